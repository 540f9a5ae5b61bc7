//! Recording type profiles

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Quality;

use super::configuration::ChannelLayout;

/// All recording types
pub const ALL_RECORDING_TYPES: &[RecordingType] = &[
    RecordingType::Speech,
    RecordingType::Voice,
    RecordingType::Meeting,
    RecordingType::Interview,
    RecordingType::Music,
    RecordingType::General,
];

/// Recording purpose, as labelled by the caller.
///
/// Labels that match nothing resolve to [`RecordingType::General`];
/// resolution never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingType {
    Speech,
    Voice,
    Meeting,
    Interview,
    Music,
    #[default]
    General,
}

impl RecordingType {
    /// Resolve a caller-supplied label. Unknown labels fall back to the
    /// general profile rather than failing.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "speech" | "dictation" => Self::Speech,
            "voice" | "memo" | "voice_memo" => Self::Voice,
            "meeting" => Self::Meeting,
            "interview" => Self::Interview,
            "music" => Self::Music,
            _ => Self::General,
        }
    }

    /// Get the string identifier for this type
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Speech => "speech",
            Self::Voice => "voice",
            Self::Meeting => "meeting",
            Self::Interview => "interview",
            Self::Music => "music",
            Self::General => "general",
        }
    }

    /// Get the human-readable label for this type
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Speech => "speech",
            Self::Voice => "voice memo",
            Self::Meeting => "meeting",
            Self::Interview => "interview",
            Self::Music => "music",
            Self::General => "general-purpose",
        }
    }

    /// Quality tier this type calls for when nothing forces it lower
    pub const fn preferred_quality(&self) -> Quality {
        match self {
            Self::Speech | Self::Voice => Quality::Medium,
            Self::Meeting | Self::Interview | Self::General => Quality::High,
            Self::Music => Quality::Ultra,
        }
    }

    /// Mono for speech-like captures, stereo otherwise
    pub const fn channel_layout(&self) -> ChannelLayout {
        match self {
            Self::Speech | Self::Voice | Self::Meeting | Self::Interview => ChannelLayout::Mono,
            Self::Music | Self::General => ChannelLayout::Stereo,
        }
    }

    /// Whether noise reduction is recommended for this type
    pub const fn noise_reduction(&self) -> bool {
        match self {
            Self::Speech | Self::Voice | Self::Meeting | Self::Interview => true,
            Self::Music | Self::General => false,
        }
    }

    /// Bundle the derived defaults for this type
    pub const fn profile(&self) -> RecordingProfile {
        RecordingProfile {
            preferred_quality: self.preferred_quality(),
            channels: self.channel_layout(),
            noise_reduction: self.noise_reduction(),
        }
    }
}

impl fmt::Display for RecordingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived defaults keyed by recording purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingProfile {
    pub preferred_quality: Quality,
    pub channels: ChannelLayout,
    pub noise_reduction: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_labels() {
        assert_eq!(RecordingType::from_label("speech"), RecordingType::Speech);
        assert_eq!(RecordingType::from_label("voice"), RecordingType::Voice);
        assert_eq!(RecordingType::from_label("meeting"), RecordingType::Meeting);
        assert_eq!(
            RecordingType::from_label("interview"),
            RecordingType::Interview
        );
        assert_eq!(RecordingType::from_label("music"), RecordingType::Music);
    }

    #[test]
    fn resolve_aliases() {
        assert_eq!(RecordingType::from_label("memo"), RecordingType::Voice);
        assert_eq!(RecordingType::from_label("dictation"), RecordingType::Speech);
    }

    #[test]
    fn resolve_is_case_insensitive_and_trims() {
        assert_eq!(RecordingType::from_label("  MEETING "), RecordingType::Meeting);
        assert_eq!(RecordingType::from_label("Music"), RecordingType::Music);
    }

    #[test]
    fn unknown_labels_never_fail() {
        assert_eq!(RecordingType::from_label("podcast"), RecordingType::General);
        assert_eq!(RecordingType::from_label(""), RecordingType::General);
        assert_eq!(RecordingType::from_label("???"), RecordingType::General);
    }

    #[test]
    fn speech_like_types_are_mono_with_noise_reduction() {
        for ty in [
            RecordingType::Speech,
            RecordingType::Voice,
            RecordingType::Meeting,
            RecordingType::Interview,
        ] {
            assert_eq!(ty.channel_layout(), ChannelLayout::Mono);
            assert!(ty.noise_reduction());
        }
    }

    #[test]
    fn music_is_stereo_ultra_without_noise_reduction() {
        let profile = RecordingType::Music.profile();
        assert_eq!(profile.preferred_quality, Quality::Ultra);
        assert_eq!(profile.channels, ChannelLayout::Stereo);
        assert!(!profile.noise_reduction);
    }

    #[test]
    fn default_is_general() {
        assert_eq!(RecordingType::default(), RecordingType::General);
        assert_eq!(
            RecordingType::General.preferred_quality(),
            Quality::High
        );
        assert_eq!(
            RecordingType::General.channel_layout(),
            ChannelLayout::Stereo
        );
    }

    #[test]
    fn all_types_constant() {
        assert_eq!(ALL_RECORDING_TYPES.len(), 6);
    }

    #[test]
    fn labels_not_empty() {
        for ty in ALL_RECORDING_TYPES {
            assert!(!ty.label().is_empty());
        }
    }
}
