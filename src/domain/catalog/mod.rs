//! Format catalog module

mod format;
mod quality;

pub use format::{AudioFormat, ALL_FORMATS};
pub use quality::{Quality, ALL_QUALITIES};
