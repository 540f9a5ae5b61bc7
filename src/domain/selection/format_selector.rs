//! Codec selection

use crate::domain::catalog::{AudioFormat, Quality, ALL_FORMATS};
use crate::domain::recording::SizeConstraint;

use super::estimator::estimate_file_size;

/// Inputs for a format selection. Both flags unset and no constraint
/// means "balanced".
#[derive(Debug, Clone, Copy)]
pub struct FormatRequest {
    pub quality: Quality,
    pub prioritize_quality: bool,
    pub prioritize_size: bool,
    pub constraint: Option<SizeConstraint>,
}

/// Pick a codec for the requested quality tier.
///
/// - Quality priority: the costliest codec in the lossless band. Takes
///   precedence when both flags are set.
/// - Size priority: the cheapest codec in the catalog at that tier.
/// - No flags but a constraint: the first codec in catalog order whose
///   prediction fits the cap with quality held fixed. Catalog order is
///   fidelity order, so this is the highest-fidelity codec that fits.
///   When none fit, the cheapest codec (best effort).
/// - Nothing at all: the catalog's balanced reference codec.
///
/// Ties always resolve to the earlier catalog entry.
pub fn select_format(request: &FormatRequest) -> AudioFormat {
    if request.prioritize_quality {
        return costliest(
            ALL_FORMATS.iter().copied().filter(AudioFormat::is_lossless),
            request.quality,
        );
    }

    if request.prioritize_size {
        return cheapest(ALL_FORMATS.iter().copied(), request.quality);
    }

    if let Some(constraint) = request.constraint {
        let fits = ALL_FORMATS.iter().copied().find(|format| {
            estimate_file_size(*format, request.quality, constraint.duration)
                <= constraint.max_size_mb
        });
        return match fits {
            Some(format) => format,
            None => cheapest(ALL_FORMATS.iter().copied(), request.quality),
        };
    }

    AudioFormat::balanced()
}

fn costliest(formats: impl Iterator<Item = AudioFormat>, quality: Quality) -> AudioFormat {
    best_by(formats, |a, b| {
        a.byte_cost_per_minute(quality) > b.byte_cost_per_minute(quality)
    })
}

fn cheapest(formats: impl Iterator<Item = AudioFormat>, quality: Quality) -> AudioFormat {
    best_by(formats, |a, b| {
        a.byte_cost_per_minute(quality) < b.byte_cost_per_minute(quality)
    })
}

// First-wins fold so equal costs keep the earlier catalog entry.
fn best_by(
    mut formats: impl Iterator<Item = AudioFormat>,
    beats: impl Fn(AudioFormat, AudioFormat) -> bool,
) -> AudioFormat {
    let mut best = formats.next().unwrap_or(AudioFormat::balanced());
    for candidate in formats {
        if beats(candidate, best) {
            best = candidate;
        }
    }
    best
}
