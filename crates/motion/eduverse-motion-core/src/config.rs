//! Core configuration for eduverse-motion-core.

use serde::{Deserialize, Serialize};

/// Engine-wide switches and sizing.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Global motion switch. When false, reveal and drawer playbacks jump to
    /// their terminal style on the tick they would have started, still
    /// emitting one change and the completion event. Progress ramps are pure
    /// functions of the scroll position and stay active.
    pub animations_enabled: bool,

    /// Maximum events retained per tick; excess events are dropped.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            max_events_per_tick: 1024,
        }
    }
}
