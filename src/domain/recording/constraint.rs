//! Size constraint value object

use super::duration::Duration;

/// Hard upper bound on the predicted output size.
///
/// A constraint only exists when both halves are known: the cap and the
/// expected recording length it applies over. Selection treats the cap
/// as a hard bound and degrades to the smallest achievable size when it
/// cannot be met; it is the caller's job to re-check the result if
/// strict enforcement is required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConstraint {
    pub max_size_mb: f64,
    pub duration: Duration,
}

impl SizeConstraint {
    pub const fn new(max_size_mb: f64, duration: Duration) -> Self {
        Self {
            max_size_mb,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_both_halves() {
        let c = SizeConstraint::new(25.0, Duration::from_minutes(60));
        assert_eq!(c.max_size_mb, 25.0);
        assert_eq!(c.duration.as_secs(), 3600);
    }
}
