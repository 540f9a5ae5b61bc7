//! Recording configuration composition

use crate::domain::recording::{RecordingConfiguration, RecordingType, SizeConstraint};

use super::format_selector::{select_format, FormatRequest};
use super::quality_selector::{select_quality, QualityRequest};

/// Inputs for composing a full recording configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationRequest {
    pub recording_type: RecordingType,
    pub prioritize_quality: bool,
    pub prioritize_size: bool,
    pub constraint: Option<SizeConstraint>,
}

/// Assemble a complete recording configuration.
///
/// Format choice needs a quality and quality choice needs a format, so
/// composition runs in two passes: the format is picked against the
/// profile's preferred tier as a provisional quality, then the final
/// tier is picked for that format against the real constraint (and may
/// land below the provisional value). Channel layout and noise
/// reduction come straight from the profile, independent of the codec
/// outcome. Chaining the two selectors by hand in this order yields the
/// same configuration.
pub fn build_configuration(request: &ConfigurationRequest) -> RecordingConfiguration {
    let profile = request.recording_type.profile();

    let format = select_format(&FormatRequest {
        quality: profile.preferred_quality,
        prioritize_quality: request.prioritize_quality,
        prioritize_size: request.prioritize_size,
        constraint: request.constraint,
    });

    let quality = select_quality(&QualityRequest {
        format,
        recording_type: request.recording_type,
        constraint: request.constraint,
    });

    RecordingConfiguration {
        format,
        quality,
        channels: profile.channels,
        sample_rate_hz: quality.sample_rate_hz(),
        noise_reduction: profile.noise_reduction,
        vbr: format.supports_vbr(),
    }
}
