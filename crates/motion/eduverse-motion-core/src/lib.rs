//! EduVerse motion core (host-agnostic)
//!
//! Scroll-sample-driven orchestration of viewport-triggered reveal
//! timelines, continuous scroll-progress style ramps, staggered group
//! reveals, and the navigation drawer state machine. The crate owns binding
//! lifecycle and playback clocks; hosts feed per-tick `Inputs` and apply the
//! resulting `Outputs` to their presentational layer.

pub mod config;
pub mod drawer;
pub mod ease;
pub mod engine;
pub mod error;
pub mod group;
pub mod ids;
pub mod outputs;
pub mod progress;
pub mod reveal;
pub mod stored_page;
pub mod style;
pub mod timeline;
pub mod viewport;

// Re-exports for consumers (page collaborators)
pub use config::Config;
pub use drawer::{Drawer, DrawerState, DrawerTick};
pub use ease::Easing;
pub use engine::{Engine, Inputs};
pub use error::MotionError;
pub use group::{stagger_delay, GroupItem};
pub use ids::{BindingToken, ElementHandle, IdAllocator, SubId};
pub use outputs::{Change, MotionEvent, Outputs};
pub use progress::{ProgressRegion, StyleRamp};
pub use reveal::{ReplayPolicy, RevealSpec};
pub use stored_page::{parse_stored_page_json, register_stored_page, ElementResolver, StoredPage};
pub use style::{Style, StyleProperty};
pub use timeline::{PlayDirection, PlayState, Playback, Step, Timeline};
pub use viewport::{
    Crossing, CrossingKind, ElementBounds, ScrollDirection, TriggerZone, Viewport,
    ViewportObserver,
};
