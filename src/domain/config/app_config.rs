//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::config::Priority;
use crate::domain::recording::{Duration, RecordingType};

/// CLI default configuration.
/// All fields are optional to support partial configs and merging.
/// These are defaults for the command line, not engine state; the
/// planning engine itself persists nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub recording_type: Option<String>,
    pub prioritize: Option<String>,
    pub max_size_mb: Option<f64>,
    pub duration: Option<String>,
    pub json: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            recording_type: Some("meeting".to_string()),
            prioritize: Some("balanced".to_string()),
            max_size_mb: None,
            duration: None,
            json: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            recording_type: other.recording_type.or(self.recording_type),
            prioritize: other.prioritize.or(self.prioritize),
            max_size_mb: other.max_size_mb.or(self.max_size_mb),
            duration: other.duration.or(self.duration),
            json: other.json.or(self.json),
        }
    }

    /// Get recording type resolved from the stored label, or the default
    /// meeting profile if not set. Unknown labels resolve to general.
    pub fn recording_type_or_default(&self) -> RecordingType {
        self.recording_type
            .as_deref()
            .map(RecordingType::from_label)
            .unwrap_or(RecordingType::Meeting)
    }

    /// Get priority as parsed Priority, or balanced if not set/invalid
    pub fn priority_or_default(&self) -> Priority {
        self.prioritize
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get duration as parsed Duration, if set and valid
    pub fn duration_opt(&self) -> Option<Duration> {
        self.duration.as_ref().and_then(|s| s.parse().ok())
    }

    /// Get json setting, or false if not set
    pub fn json_or_default(&self) -> bool {
        self.json.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.recording_type, Some("meeting".to_string()));
        assert_eq!(config.prioritize, Some("balanced".to_string()));
        assert!(config.max_size_mb.is_none());
        assert!(config.duration.is_none());
        assert_eq!(config.json, Some(false));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.recording_type.is_none());
        assert!(config.prioritize.is_none());
        assert!(config.max_size_mb.is_none());
        assert!(config.duration.is_none());
        assert!(config.json.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            recording_type: Some("meeting".to_string()),
            prioritize: Some("balanced".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            recording_type: Some("music".to_string()),
            prioritize: None, // Should not override
            max_size_mb: Some(25.0),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.recording_type, Some("music".to_string()));
        assert_eq!(merged.prioritize, Some("balanced".to_string())); // Kept from base
        assert_eq!(merged.max_size_mb, Some(25.0));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            duration: Some("45m".to_string()),
            json: Some(true),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.duration, Some("45m".to_string()));
        assert_eq!(merged.json, Some(true));
    }

    #[test]
    fn recording_type_or_default_resolves() {
        let config = AppConfig {
            recording_type: Some("music".to_string()),
            ..Default::default()
        };
        assert_eq!(config.recording_type_or_default(), RecordingType::Music);
    }

    #[test]
    fn recording_type_or_default_on_none_is_meeting() {
        assert_eq!(
            AppConfig::empty().recording_type_or_default(),
            RecordingType::Meeting
        );
    }

    #[test]
    fn recording_type_unknown_label_resolves_to_general() {
        let config = AppConfig {
            recording_type: Some("podcast".to_string()),
            ..Default::default()
        };
        assert_eq!(config.recording_type_or_default(), RecordingType::General);
    }

    #[test]
    fn priority_or_default_parses() {
        let config = AppConfig {
            prioritize: Some("size".to_string()),
            ..Default::default()
        };
        assert_eq!(config.priority_or_default(), Priority::Size);
    }

    #[test]
    fn priority_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            prioritize: Some("invalid".to_string()),
            ..Default::default()
        };
        assert_eq!(config.priority_or_default(), Priority::Balanced);
    }

    #[test]
    fn duration_opt_parses() {
        let config = AppConfig {
            duration: Some("1h30m".to_string()),
            ..Default::default()
        };
        assert_eq!(config.duration_opt().unwrap().as_secs(), 5400);
    }

    #[test]
    fn duration_opt_none_on_invalid() {
        let config = AppConfig {
            duration: Some("invalid".to_string()),
            ..Default::default()
        };
        assert!(config.duration_opt().is_none());
    }

    #[test]
    fn json_defaults_to_false() {
        assert!(!AppConfig::empty().json_or_default());
    }
}
