//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::catalog::{AudioFormat, Quality};
use crate::domain::config::Priority;
use crate::domain::recording::{Duration, RecordingType};

/// Recplan - recording format and quality planner
#[derive(Parser, Debug)]
#[command(name = "recplan")]
#[command(version)]
#[command(about = "Plan the codec, quality tier, and capture settings for a recording")]
#[command(long_about = None)]
pub struct Cli {
    /// Recording purpose (speech, voice, meeting, interview, music;
    /// any other label plans the general profile)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub recording_type: Option<String>,

    /// What to optimize for
    #[arg(short = 'p', long, value_name = "PRIORITY")]
    pub prioritize: Option<PriorityArg>,

    /// Hard cap on the output file size in megabytes
    #[arg(long, value_name = "MB", requires = "duration")]
    pub max_size_mb: Option<f64>,

    /// Expected recording length (e.g., 45m, 1h30m, 90s)
    #[arg(short = 'd', long, value_name = "TIME")]
    pub duration: Option<String>,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the output size for a format, quality, and length
    Estimate {
        /// Audio format
        #[arg(short, long, value_name = "FORMAT")]
        format: FormatArg,
        /// Quality tier
        #[arg(short, long, value_name = "QUALITY")]
        quality: QualityArg,
        /// Recording length (e.g., 45m, 1h30m, 90s)
        #[arg(short, long, value_name = "TIME")]
        duration: String,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// List the supported formats and their per-tier costs
    Formats {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the quality tiers recommended for a purpose on a format
    Qualities {
        /// Recording purpose
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        recording_type: String,
        /// Audio format
        #[arg(short, long, value_name = "FORMAT")]
        format: FormatArg,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Wav,
    Flac,
    Mp3,
    Aac,
    Opus,
    AmrWb,
}

impl From<FormatArg> for AudioFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Wav => AudioFormat::Wav,
            FormatArg::Flac => AudioFormat::Flac,
            FormatArg::Mp3 => AudioFormat::Mp3,
            FormatArg::Aac => AudioFormat::Aac,
            FormatArg::Opus => AudioFormat::Opus,
            FormatArg::AmrWb => AudioFormat::AmrWb,
        }
    }
}

impl From<AudioFormat> for FormatArg {
    fn from(format: AudioFormat) -> Self {
        match format {
            AudioFormat::Wav => FormatArg::Wav,
            AudioFormat::Flac => FormatArg::Flac,
            AudioFormat::Mp3 => FormatArg::Mp3,
            AudioFormat::Aac => FormatArg::Aac,
            AudioFormat::Opus => FormatArg::Opus,
            AudioFormat::AmrWb => FormatArg::AmrWb,
        }
    }
}

/// Quality argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum QualityArg {
    Low,
    Medium,
    High,
    Ultra,
}

impl From<QualityArg> for Quality {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::Low => Quality::Low,
            QualityArg::Medium => Quality::Medium,
            QualityArg::High => Quality::High,
            QualityArg::Ultra => Quality::Ultra,
        }
    }
}

impl From<Quality> for QualityArg {
    fn from(quality: Quality) -> Self {
        match quality {
            Quality::Low => QualityArg::Low,
            Quality::Medium => QualityArg::Medium,
            Quality::High => QualityArg::High,
            Quality::Ultra => QualityArg::Ultra,
        }
    }
}

/// Priority argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Quality,
    Size,
    Balanced,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Quality => Priority::Quality,
            PriorityArg::Size => Priority::Size,
            PriorityArg::Balanced => Priority::Balanced,
        }
    }
}

impl From<Priority> for PriorityArg {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Quality => PriorityArg::Quality,
            Priority::Size => PriorityArg::Size,
            Priority::Balanced => PriorityArg::Balanced,
        }
    }
}

/// Parsed planning options
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub recording_type: RecordingType,
    pub priority: Priority,
    pub max_size_mb: Option<f64>,
    pub duration: Option<Duration>,
    pub json: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "recording_type",
    "prioritize",
    "max_size_mb",
    "duration",
    "json",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
