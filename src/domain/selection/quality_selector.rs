//! Quality tier selection

use crate::domain::catalog::{AudioFormat, Quality};
use crate::domain::recording::{RecordingType, SizeConstraint};

use super::estimator::estimate_file_size;

/// Inputs for a quality selection. Omitting the constraint means
/// "unconstrained".
#[derive(Debug, Clone, Copy)]
pub struct QualityRequest {
    pub format: AudioFormat,
    pub recording_type: RecordingType,
    pub constraint: Option<SizeConstraint>,
}

/// Pick a quality tier for a format and recording purpose.
///
/// Starts from the purpose's preferred tier. With no constraint that
/// tier is returned as-is; preference wins even when lower tiers would
/// be smaller. With a constraint, tiers are walked downward (never
/// upward) until the predicted size fits the cap. When not even the
/// lowest tier fits, the lowest tier is returned as the best effort;
/// the caller is responsible for noticing the cap was not met.
pub fn select_quality(request: &QualityRequest) -> Quality {
    let preferred = request.recording_type.preferred_quality();

    let Some(constraint) = request.constraint else {
        return preferred;
    };

    let mut candidate = preferred;
    loop {
        let predicted = estimate_file_size(request.format, candidate, constraint.duration);
        if predicted <= constraint.max_size_mb {
            return candidate;
        }
        match candidate.step_down() {
            Some(lower) => candidate = lower,
            None => return Quality::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recording::Duration;

    fn constrained(max_mb: f64, minutes: u64) -> Option<SizeConstraint> {
        Some(SizeConstraint::new(max_mb, Duration::from_minutes(minutes)))
    }

    #[test]
    fn unconstrained_returns_preferred() {
        let quality = select_quality(&QualityRequest {
            format: AudioFormat::Wav,
            recording_type: RecordingType::Music,
            constraint: None,
        });
        assert_eq!(quality, Quality::Ultra);
    }

    #[test]
    fn preference_wins_when_it_already_fits() {
        // Opus at high over 10 minutes is ~6.87 MB, comfortably inside 100 MB;
        // no search below the preferred tier happens.
        let quality = select_quality(&QualityRequest {
            format: AudioFormat::Opus,
            recording_type: RecordingType::Meeting,
            constraint: constrained(100.0, 10),
        });
        assert_eq!(quality, Quality::High);
    }

    #[test]
    fn downgrades_until_the_cap_fits() {
        // Lossless music over 30 minutes against a 10 MB cap: ultra/high/
        // medium all blow past it, and not even low fits (54.93 MB), so the
        // walk bottoms out at low. Never ultra.
        let quality = select_quality(&QualityRequest {
            format: AudioFormat::Wav,
            recording_type: RecordingType::Music,
            constraint: constrained(10.0, 30),
        });
        assert_eq!(quality, Quality::Low);
    }

    #[test]
    fn downgrades_one_step_when_that_is_enough() {
        // MP3 meeting (preferred high) over 60 minutes: high is 82.4 MB,
        // medium is 41.2 MB. A 50 MB cap lands on medium.
        let quality = select_quality(&QualityRequest {
            format: AudioFormat::Mp3,
            recording_type: RecordingType::Meeting,
            constraint: constrained(50.0, 60),
        });
        assert_eq!(quality, Quality::Medium);
    }

    #[test]
    fn infeasible_cap_returns_lowest_as_best_effort() {
        let quality = select_quality(&QualityRequest {
            format: AudioFormat::Wav,
            recording_type: RecordingType::Meeting,
            constraint: constrained(0.01, 60),
        });
        assert_eq!(quality, Quality::Low);
    }

    #[test]
    fn never_selects_above_the_preferred_tier() {
        // A generous cap does not push speech above its medium preference.
        let quality = select_quality(&QualityRequest {
            format: AudioFormat::Opus,
            recording_type: RecordingType::Speech,
            constraint: constrained(10_000.0, 10),
        });
        assert_eq!(quality, Quality::Medium);
    }
}
