//! Audio format catalog
//!
//! Static knowledge of the supported codecs: fidelity/compression
//! characteristics and the per-tier bitrate ladder each codec is
//! typically driven at. The ladder is expressed in kbps because that is
//! how codec bitrates are quoted; byte costs are derived from it.
//!
//! Coverage of the (format, quality) cross product is enforced by the
//! compiler: `bitrate_kbps` is an exhaustive match, so a missing entry
//! cannot be represented.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::quality::Quality;

/// All supported formats in catalog order: highest fidelity first,
/// strongest compression last. Selection tie-breaks follow this order.
pub const ALL_FORMATS: &[AudioFormat] = &[
    AudioFormat::Wav,
    AudioFormat::Flac,
    AudioFormat::Mp3,
    AudioFormat::Aac,
    AudioFormat::Opus,
    AudioFormat::AmrWb,
];

/// Codec identifier with an associated compression/fidelity trade-off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AudioFormat {
    /// Uncompressed 16-bit PCM in a WAV container
    Wav,
    /// Lossless compression, roughly half the PCM footprint
    Flac,
    Mp3,
    /// AAC-LC, the catalog's balanced reference codec
    Aac,
    Opus,
    /// AMR-WB speech codec, the strongest compression in the catalog
    AmrWb,
}

impl AudioFormat {
    /// The full catalog, in declaration order
    pub const fn supported() -> &'static [AudioFormat] {
        ALL_FORMATS
    }

    /// The reference codec used when the caller expresses no preference
    /// and no constraint
    pub const fn balanced() -> Self {
        Self::Aac
    }

    /// Get the string identifier for this format
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Flac => "flac",
            Self::Mp3 => "mp3",
            Self::Aac => "aac",
            Self::Opus => "opus",
            Self::AmrWb => "amr-wb",
        }
    }

    /// Get the human-readable label for this format
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Wav => "WAV (PCM)",
            Self::Flac => "FLAC",
            Self::Mp3 => "MP3",
            Self::Aac => "AAC",
            Self::Opus => "Opus",
            Self::AmrWb => "AMR-WB",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Flac => "flac",
            Self::Mp3 => "mp3",
            Self::Aac => "m4a",
            Self::Opus => "opus",
            Self::AmrWb => "awb",
        }
    }

    /// Whether the codec preserves the input signal exactly
    pub const fn is_lossless(&self) -> bool {
        matches!(self, Self::Wav | Self::Flac)
    }

    /// Whether encoders for this codec run variable-bitrate
    pub const fn supports_vbr(&self) -> bool {
        match self {
            Self::Wav | Self::AmrWb => false,
            Self::Flac | Self::Mp3 | Self::Aac | Self::Opus => true,
        }
    }

    /// Nominal output size relative to 16-bit PCM at the same sample rate
    pub const fn compression_ratio(&self) -> f64 {
        match self {
            Self::Wav => 1.0,
            Self::Flac => 0.55,
            Self::Mp3 => 0.25,
            Self::Aac => 0.20,
            Self::Opus => 0.12,
            Self::AmrWb => 0.03,
        }
    }

    /// Typical encoding bitrate for this codec at a given tier, in kbps.
    ///
    /// PCM rows are exact for 16-bit mono at the tier sample rate; lossy
    /// rows follow each codec's standard ladder; AMR-WB uses its nearest
    /// standard modes. Within every row the ladder rises with quality,
    /// and at every tier it falls strictly down the catalog order.
    pub const fn bitrate_kbps(&self, quality: Quality) -> u32 {
        match (self, quality) {
            (Self::Wav, Quality::Low) => 256,
            (Self::Wav, Quality::Medium) => 353,
            (Self::Wav, Quality::High) => 706,
            (Self::Wav, Quality::Ultra) => 768,

            (Self::Flac, Quality::Low) => 141,
            (Self::Flac, Quality::Medium) => 194,
            (Self::Flac, Quality::High) => 388,
            (Self::Flac, Quality::Ultra) => 422,

            (Self::Mp3, Quality::Low) => 64,
            (Self::Mp3, Quality::Medium) => 96,
            (Self::Mp3, Quality::High) => 192,
            (Self::Mp3, Quality::Ultra) => 320,

            (Self::Aac, Quality::Low) => 48,
            (Self::Aac, Quality::Medium) => 80,
            (Self::Aac, Quality::High) => 160,
            (Self::Aac, Quality::Ultra) => 256,

            (Self::Opus, Quality::Low) => 24,
            (Self::Opus, Quality::Medium) => 48,
            (Self::Opus, Quality::High) => 96,
            (Self::Opus, Quality::Ultra) => 160,

            (Self::AmrWb, Quality::Low) => 7,
            (Self::AmrWb, Quality::Medium) => 13,
            (Self::AmrWb, Quality::High) => 18,
            (Self::AmrWb, Quality::Ultra) => 24,
        }
    }

    /// Bytes written per minute of recording at a given tier
    pub const fn byte_cost_per_minute(&self, quality: Quality) -> u64 {
        // kbps * 1000 / 8 bytes per second, * 60 seconds
        self.bitrate_kbps(quality) as u64 * 7_500
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
