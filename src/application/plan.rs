//! Plan recording use case

use serde::Serialize;

use crate::domain::advisory::recommendation;
use crate::domain::config::Priority;
use crate::domain::recording::{Duration, RecordingConfiguration, RecordingType, SizeConstraint};
use crate::domain::selection::{build_configuration, estimate_file_size, ConfigurationRequest};

/// Input parameters for planning a recording
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanInput {
    /// What the recording is for
    pub recording_type: RecordingType,
    /// What to optimize for
    pub priority: Priority,
    /// Hard cap on the output size, in megabytes
    pub max_size_mb: Option<f64>,
    /// Expected recording length
    pub duration: Option<Duration>,
}

/// Outcome of a planning run
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutcome {
    /// The configuration the capture pipeline should use
    pub configuration: RecordingConfiguration,
    /// Predicted output size, when the expected duration is known
    pub estimated_size_mb: Option<f64>,
    /// Whether the size cap was met; `None` when no cap applied.
    /// A `false` here is the documented best-effort outcome, not a
    /// failure: the engine already degraded to the smallest it could.
    pub constraint_met: Option<bool>,
    /// Human-readable advisory line
    pub advice: String,
}

/// Plan a recording configuration and annotate it with the size
/// prediction and advisory text.
///
/// The size cap only binds when the expected duration is known too; a
/// cap without a duration cannot be evaluated and is ignored. The
/// engine degrades silently when the cap is infeasible, so the
/// cap re-check callers are responsible for happens here, surfaced as
/// [`PlanOutcome::constraint_met`].
pub fn plan_recording(input: &PlanInput) -> PlanOutcome {
    let constraint = match (input.max_size_mb, input.duration) {
        (Some(max_size_mb), Some(duration)) => Some(SizeConstraint::new(max_size_mb, duration)),
        _ => None,
    };

    let (prioritize_quality, prioritize_size) = input.priority.flags();
    let configuration = build_configuration(&ConfigurationRequest {
        recording_type: input.recording_type,
        prioritize_quality,
        prioritize_size,
        constraint,
    });

    let estimated_size_mb = input
        .duration
        .map(|d| estimate_file_size(configuration.format, configuration.quality, d));

    let constraint_met = match (constraint, estimated_size_mb) {
        (Some(c), Some(estimate)) => Some(estimate <= c.max_size_mb),
        _ => None,
    };

    let advice = recommendation(
        configuration.format,
        configuration.quality,
        input.recording_type,
    );

    PlanOutcome {
        configuration,
        estimated_size_mb,
        constraint_met,
        advice,
    }
}
