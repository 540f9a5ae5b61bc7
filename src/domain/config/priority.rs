//! Selection priority value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidPriorityError;

/// All priority values
pub const ALL_PRIORITIES: &[Priority] = &[Priority::Quality, Priority::Size, Priority::Balanced];

/// What the caller wants optimized: fidelity, footprint, or neither.
///
/// This is the user-facing spelling of the two selection flags; it
/// lowers to them at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Quality,
    Size,
    #[default]
    Balanced,
}

impl Priority {
    /// Get the string identifier for this priority
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Size => "size",
            Self::Balanced => "balanced",
        }
    }

    /// Lower to the engine's (prioritize_quality, prioritize_size) pair
    pub const fn flags(&self) -> (bool, bool) {
        match self {
            Self::Quality => (true, false),
            Self::Size => (false, true),
            Self::Balanced => (false, false),
        }
    }
}

impl FromStr for Priority {
    type Err = InvalidPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quality" => Ok(Self::Quality),
            "size" => Ok(Self::Size),
            "balanced" => Ok(Self::Balanced),
            _ => Err(InvalidPriorityError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
