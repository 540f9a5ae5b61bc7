//! Quality tier value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// All quality tiers, ordered lowest to highest
pub const ALL_QUALITIES: &[Quality] = &[
    Quality::Low,
    Quality::Medium,
    Quality::High,
    Quality::Ultra,
];

/// Fidelity tier, independent of codec.
///
/// The derived `Ord` is the fidelity order (`Low < Medium < High < Ultra`)
/// and is what the selection logic walks when downgrading to meet a size
/// cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
    Ultra,
}

impl Quality {
    /// Capture sample rate implied by this tier
    pub const fn sample_rate_hz(&self) -> u32 {
        match self {
            Self::Low => 16_000,
            Self::Medium => 22_050,
            Self::High => 44_100,
            Self::Ultra => 48_000,
        }
    }

    /// Get the string identifier for this tier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Ultra => "ultra",
        }
    }

    /// The next tier down, or `None` at the bottom of the ladder
    pub const fn step_down(&self) -> Option<Quality> {
        match self {
            Self::Low => None,
            Self::Medium => Some(Self::Low),
            Self::High => Some(Self::Medium),
            Self::Ultra => Some(Self::High),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(Quality::Low < Quality::Medium);
        assert!(Quality::Medium < Quality::High);
        assert!(Quality::High < Quality::Ultra);
    }

    #[test]
    fn sample_rates_rise_with_quality() {
        let rates: Vec<u32> = ALL_QUALITIES.iter().map(|q| q.sample_rate_hz()).collect();
        let mut sorted = rates.clone();
        sorted.sort_unstable();
        assert_eq!(rates, sorted);
    }

    #[test]
    fn step_down_walks_to_the_bottom() {
        assert_eq!(Quality::Ultra.step_down(), Some(Quality::High));
        assert_eq!(Quality::High.step_down(), Some(Quality::Medium));
        assert_eq!(Quality::Medium.step_down(), Some(Quality::Low));
        assert_eq!(Quality::Low.step_down(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Quality::Low.to_string(), "low");
        assert_eq!(Quality::Ultra.to_string(), "ultra");
    }

    #[test]
    fn all_qualities_constant() {
        assert_eq!(ALL_QUALITIES.len(), 4);
        assert_eq!(ALL_QUALITIES[0], Quality::Low);
        assert_eq!(ALL_QUALITIES[3], Quality::Ultra);
    }
}
