//! Navigation drawer state machine.
//!
//! Four states over one slide timeline. `toggle()` is the only external
//! input; a toggle during Opening/Closing cancels the in-flight clock at its
//! current interpolated position and reverses from there, so there is never a
//! jump-cut and never a queued transition.

use serde::{Deserialize, Serialize};

use crate::ease::Easing;
use crate::error::MotionError;
use crate::ids::ElementHandle;
use crate::style::{Style, StyleProperty};
use crate::timeline::{Playback, PlayDirection, Timeline};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DrawerState {
    Closed,
    Opening,
    Open,
    Closing,
}

impl DrawerState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Closing => "closing",
        }
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Default slide: offstage (translateX 100) to onstage (0) over 0.3s.
/// Reversing the eased curve on close reads as the matching ease-in.
fn slide_timeline() -> Timeline {
    Timeline::tween(
        Style::new().with(StyleProperty::TranslateX, 100.0),
        Style::new().with(StyleProperty::TranslateX, 0.0),
        0.3,
        0.0,
        Easing::EaseOut,
    )
}

/// Result of advancing the drawer one tick while a transition is active.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerTick {
    pub style: Style,
    /// Set on the tick a transition lands in a terminal state.
    pub settled: Option<DrawerState>,
}

#[derive(Debug)]
pub struct Drawer {
    state: DrawerState,
    panel: Option<ElementHandle>,
    timeline: Timeline,
    playback: Playback,
}

impl Default for Drawer {
    fn default() -> Self {
        Self {
            state: DrawerState::Closed,
            panel: None,
            timeline: slide_timeline(),
            playback: Playback::new(),
        }
    }
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    #[inline]
    pub fn panel(&self) -> Option<ElementHandle> {
        self.panel
    }

    /// Element receiving the slide style changes.
    pub fn set_panel(&mut self, panel: ElementHandle) {
        self.panel = Some(panel);
    }

    /// Replace the slide timeline. Only allowed while no transition is
    /// active, so the invariant of at most one active clock holds.
    pub fn set_timeline(&mut self, timeline: Timeline) -> Result<(), MotionError> {
        timeline.validate()?;
        if !self.state.is_transitioning() {
            self.playback = Playback::new();
            if self.state.is_open() {
                // Park the fresh clock at the new timeline's end.
                self.playback.play();
                self.playback.skip_to_end(timeline.total_duration());
                self.playback.advance(0.0, timeline.total_duration());
            }
            self.timeline = timeline;
        }
        Ok(())
    }

    /// Style for the drawer's current clock position.
    pub fn style(&self) -> Style {
        self.timeline.style_at(self.playback.time())
    }

    /// The single external input. Terminal states start the matching
    /// transition; a toggle mid-transition cancels the in-flight clock and
    /// immediately reverses from the current interpolated position.
    pub fn toggle(&mut self) -> DrawerState {
        self.state = match self.state {
            DrawerState::Closed => {
                self.playback.play();
                DrawerState::Opening
            }
            DrawerState::Open => {
                self.playback.reverse();
                DrawerState::Closing
            }
            DrawerState::Opening => {
                self.playback.cancel_at_current();
                self.playback.reverse();
                DrawerState::Closing
            }
            DrawerState::Closing => {
                self.playback.cancel_at_current();
                self.playback.play();
                DrawerState::Opening
            }
        };
        log::debug!("drawer toggled to {}", self.state.name());
        self.state
    }

    /// Advance an active transition. Returns None in terminal states.
    pub fn advance(&mut self, dt: f32, animations_enabled: bool) -> Option<DrawerTick> {
        if !self.state.is_transitioning() {
            return None;
        }
        let total = self.timeline.total_duration();
        if !animations_enabled {
            self.playback.skip_to_end(total);
        }
        let completed = self.playback.advance(dt, total);
        let settled = if completed {
            self.state = match self.playback.direction() {
                PlayDirection::Forward => DrawerState::Open,
                PlayDirection::Reverse => DrawerState::Closed,
            };
            Some(self.state)
        } else {
            None
        };
        Some(DrawerTick {
            style: self.style(),
            settled,
        })
    }
}
