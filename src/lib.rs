//! Recplan - recording format and quality planner
//!
//! This crate provides the decision engine that picks a codec, quality
//! tier, and full capture configuration for a recording, and predicts
//! the output file size before recording starts.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The pure planning engine - format catalog, selection
//!   logic, value objects, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (XDG config storage)
//! - **CLI**: Command-line interface, argument parsing, and output
//!   formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
