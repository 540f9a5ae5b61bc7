//! Application layer - Use cases and port interfaces
//!
//! Contains the planning use case over the domain engine and trait
//! definitions for external system interactions.

pub mod plan;
pub mod ports;

// Re-export use cases
pub use plan::{plan_recording, PlanInput, PlanOutcome};
