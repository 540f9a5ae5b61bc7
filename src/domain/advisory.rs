//! Compatibility checks and human-readable recommendations

use crate::domain::catalog::{AudioFormat, Quality, ALL_QUALITIES};
use crate::domain::recording::RecordingType;
use crate::domain::selection::BYTES_PER_MB;

/// Whether a (format, quality) pairing makes sense.
///
/// Catalog coverage is total, so only the denylist can exclude a
/// pairing: a lossless container around a 16 kHz capture wastes the
/// codec, so the lossless band at the lowest tier is flagged. Always
/// resolves to a boolean.
pub fn is_format_compatible(format: AudioFormat, quality: Quality) -> bool {
    !(format.is_lossless() && quality == Quality::Low)
}

/// Quality tiers worth offering for a recording purpose on a format:
/// the compatible tiers from the purpose's preferred tier downward,
/// which is exactly the set quality selection can ever land on for the
/// pairing. Falls back to every compatible tier if that set is empty.
pub fn recommended_qualities(recording_type: RecordingType, format: AudioFormat) -> Vec<Quality> {
    let preferred = recording_type.preferred_quality();
    let reachable: Vec<Quality> = ALL_QUALITIES
        .iter()
        .copied()
        .filter(|q| *q <= preferred && is_format_compatible(format, *q))
        .collect();

    if reachable.is_empty() {
        ALL_QUALITIES
            .iter()
            .copied()
            .filter(|q| is_format_compatible(format, *q))
            .collect()
    } else {
        reachable
    }
}

/// One-line human recommendation for a chosen pairing. Display-only;
/// nothing parses this, but it always names the recording purpose.
pub fn recommendation(
    format: AudioFormat,
    quality: Quality,
    recording_type: RecordingType,
) -> String {
    let mb_per_minute = format.byte_cost_per_minute(quality) as f64 / BYTES_PER_MB;
    format!(
        "For {} recordings, {} at {} quality ({:.1} kHz) writes about {:.2} MB per minute.",
        recording_type.label(),
        format.label(),
        quality,
        quality.sample_rate_hz() as f64 / 1000.0,
        mb_per_minute,
    )
}
