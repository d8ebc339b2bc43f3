//! Error types for the motion core.
//!
//! Configuration errors are returned synchronously from registration calls.
//! Runtime inconsistencies (stale element handles, repeated unregister) are
//! absorbed as no-ops and never surface here.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionError {
    /// Trigger zone bounds out of order or non-finite.
    #[error("trigger zone start {start} must be finite and precede end {end}")]
    InvalidZone { start: f32, end: f32 },

    /// Progress region bounds out of order or non-finite.
    #[error("progress region start {start} must be finite and precede end {end}")]
    InvalidRegion { start: f32, end: f32 },

    /// Step duration is NaN, infinite, or negative.
    #[error("step duration must be finite and non-negative, got {0}")]
    InvalidDuration(f32),

    /// Step or stagger delay is NaN, infinite, or negative.
    #[error("delay must be finite and non-negative, got {0}")]
    InvalidDelay(f32),

    /// A timeline with no steps has nothing to interpolate.
    #[error("timeline must contain at least one step")]
    EmptyTimeline,

    /// Stored page document failed to parse or validate.
    #[error("stored page parse error: {0}")]
    Parse(String),
}
