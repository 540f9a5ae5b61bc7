//! Selection module
//!
//! The decision functions: size prediction, quality and codec
//! selection, and the composer that assembles a full recording
//! configuration. Everything here is pure and synchronous.

mod composer;
mod estimator;
mod format_selector;
mod quality_selector;

pub use composer::{build_configuration, ConfigurationRequest};
pub use estimator::{estimate_file_size, BYTES_PER_MB};
pub use format_selector::{select_format, FormatRequest};
pub use quality_selector::{select_quality, QualityRequest};
