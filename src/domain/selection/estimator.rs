//! Predicted file size computation

use crate::domain::catalog::{AudioFormat, Quality};
use crate::domain::recording::Duration;

/// Bytes per megabyte used for user-facing size figures
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// Predict the output size in megabytes for a recording of the given
/// length, rounded to two decimal places.
///
/// The prediction is linear in duration and rises with quality for a
/// fixed format; switching to a more compressed format at equal quality
/// always shrinks it.
pub fn estimate_file_size(format: AudioFormat, quality: Quality, duration: Duration) -> f64 {
    let bytes = format.byte_cost_per_minute(quality) as f64 * duration.as_minutes_f64();
    round_mb(bytes / BYTES_PER_MB)
}

fn round_mb(mb: f64) -> f64 {
    (mb * 100.0).round() / 100.0
}
