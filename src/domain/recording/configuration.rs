//! Recording configuration value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{AudioFormat, Quality};

/// Capture channel layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    Mono,
    Stereo,
}

impl ChannelLayout {
    pub const fn count(&self) -> u16 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Stereo => "stereo",
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complete recording configuration, ready for the capture pipeline.
///
/// Constructed once per planning call and never mutated; the pipeline
/// consumes it as a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordingConfiguration {
    pub format: AudioFormat,
    pub quality: Quality,
    pub channels: ChannelLayout,
    pub sample_rate_hz: u32,
    pub noise_reduction: bool,
    pub vbr: bool,
}

impl RecordingConfiguration {
    /// File extension the capture pipeline should write
    pub const fn extension(&self) -> &'static str {
        self.format.extension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_counts() {
        assert_eq!(ChannelLayout::Mono.count(), 1);
        assert_eq!(ChannelLayout::Stereo.count(), 2);
    }

    #[test]
    fn extension_follows_format() {
        let config = RecordingConfiguration {
            format: AudioFormat::Opus,
            quality: Quality::High,
            channels: ChannelLayout::Mono,
            sample_rate_hz: Quality::High.sample_rate_hz(),
            noise_reduction: true,
            vbr: true,
        };
        assert_eq!(config.extension(), "opus");
    }
}
