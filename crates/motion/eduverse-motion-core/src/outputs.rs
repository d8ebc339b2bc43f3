//! Per-tick output contracts.
//!
//! Outputs carry the style changes for this tick keyed by element handle,
//! and a separate list of semantic events. Presentational collaborators
//! apply changes to the host; continuous progress output goes through
//! `changes` only and never produces events.

use serde::{Deserialize, Serialize};

use crate::drawer::DrawerState;
use crate::ids::{BindingToken, ElementHandle};
use crate::style::Style;
use crate::viewport::ScrollDirection;

/// One changed element style this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub element: ElementHandle,
    pub style: Style,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionEvent {
    ZoneEntered {
        element: ElementHandle,
        direction: ScrollDirection,
    },
    ZoneExited {
        element: ElementHandle,
        direction: ScrollDirection,
    },
    RevealStarted {
        token: BindingToken,
    },
    RevealCompleted {
        token: BindingToken,
    },
    DrawerChanged {
        state: DrawerState,
    },
}

/// Outputs returned by `Engine::update()`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<MotionEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Push an event, dropping it once the per-tick cap is reached.
    #[inline]
    pub fn push_event(&mut self, event: MotionEvent, cap: usize) {
        if self.events.len() < cap {
            self.events.push(event);
        } else {
            log::warn!("event cap {cap} reached, dropping {event:?}");
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
