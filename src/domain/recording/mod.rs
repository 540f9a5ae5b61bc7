//! Recording domain module

mod configuration;
mod constraint;
mod duration;
mod profile;

pub use configuration::{ChannelLayout, RecordingConfiguration};
pub use constraint::SizeConstraint;
pub use duration::Duration;
pub use profile::{RecordingProfile, RecordingType, ALL_RECORDING_TYPES};
