//! Viewport snapshots, trigger zones, the element bounds table, and the
//! edge-triggered viewport observer.
//!
//! Zone arithmetic: an element is inside its zone iff
//! `zone.start_offset <= scroll_offset - bounds.offset <= zone.end_offset`.
//! Offsets are relative to the element's leading edge in scroll coordinates;
//! negative offsets address positions earlier in the scroll. Hosts that want
//! viewport-edge-relative triggers fold `viewport_extent` into the offsets at
//! registration time.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::ids::{ElementHandle, IdAllocator, SubId};

/// Read-only scroll snapshot delivered once per tick.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_offset: f32,
    pub viewport_extent: f32,
    pub content_extent: f32,
}

/// An element's leading edge and extent in content coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementBounds {
    pub offset: f32,
    pub extent: f32,
}

/// Offset range, relative to an element's leading edge, within which the
/// element counts as in view.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerZone {
    pub start_offset: f32,
    pub end_offset: f32,
}

impl TriggerZone {
    pub fn new(start_offset: f32, end_offset: f32) -> Self {
        Self {
            start_offset,
            end_offset,
        }
    }

    /// `start_offset < end_offset`, both finite. Mandatory at registration.
    pub fn validate(&self) -> Result<(), MotionError> {
        if !self.start_offset.is_finite()
            || !self.end_offset.is_finite()
            || self.start_offset >= self.end_offset
        {
            return Err(MotionError::InvalidZone {
                start: self.start_offset,
                end: self.end_offset,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, rel: f32) -> bool {
        rel >= self.start_offset && rel <= self.end_offset
    }
}

/// Bounds keyed by handle. Lookup-only; order never matters here.
#[derive(Default, Debug)]
pub struct ElementTable {
    map: hashbrown::HashMap<ElementHandle, ElementBounds>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, handle: ElementHandle, bounds: ElementBounds) {
        self.map.insert(handle, bounds);
    }

    pub fn remove(&mut self, handle: ElementHandle) -> bool {
        self.map.remove(&handle).is_some()
    }

    pub fn get(&self, handle: ElementHandle) -> Option<ElementBounds> {
        self.map.get(&handle).copied()
    }

    pub fn contains(&self, handle: ElementHandle) -> bool {
        self.map.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Direction the scroll position moved when a crossing fired.
/// Forward = increasing offset.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CrossingKind {
    Entered,
    Exited,
}

/// One edge-triggered zone crossing observed during a sample.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub sub: SubId,
    pub element: ElementHandle,
    pub kind: CrossingKind,
    pub direction: ScrollDirection,
}

#[derive(Debug)]
struct Subscription {
    id: SubId,
    element: ElementHandle,
    zone: TriggerZone,
    inside: bool,
}

/// Tracks scroll samples and reports, per tick, zone crossings for each
/// subscription. Each subscriber sees at most one `Entered` and one `Exited`
/// per continuous crossing; stationary samples inside the zone fire nothing.
#[derive(Default, Debug)]
pub struct ViewportObserver {
    subs: Vec<Subscription>,
    last_offset: Option<f32>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an element to a zone. The zone must already be validated.
    pub fn observe(
        &mut self,
        ids: &mut IdAllocator,
        element: ElementHandle,
        zone: TriggerZone,
    ) -> SubId {
        let id = ids.alloc_sub();
        self.subs.push(Subscription {
            id,
            element,
            zone,
            inside: false,
        });
        id
    }

    /// Drop a subscription. No-op if it was already cancelled or has been
    /// dropped after firing its terminal event.
    pub fn cancel(&mut self, sub: SubId) {
        self.subs.retain(|s| s.id != sub);
    }

    pub fn subscription_count(&self) -> usize {
        self.subs.len()
    }

    /// Evaluate one scroll sample against every subscription, in subscription
    /// order. Subscriptions against handles missing from the table are
    /// dropped silently.
    pub fn sample(&mut self, vp: &Viewport, elements: &ElementTable) -> Vec<Crossing> {
        let direction = match self.last_offset {
            Some(prev) if vp.scroll_offset < prev => ScrollDirection::Backward,
            _ => ScrollDirection::Forward,
        };
        self.last_offset = Some(vp.scroll_offset);

        let mut crossings = Vec::new();
        self.subs.retain_mut(|s| {
            let bounds = match elements.get(s.element) {
                Some(b) => b,
                None => {
                    log::debug!("dropping subscription {:?} for gone element", s.id);
                    return false;
                }
            };
            let rel = vp.scroll_offset - bounds.offset;
            let inside = s.zone.contains(rel);
            if inside != s.inside {
                s.inside = inside;
                crossings.push(Crossing {
                    sub: s.id,
                    element: s.element,
                    kind: if inside {
                        CrossingKind::Entered
                    } else {
                        CrossingKind::Exited
                    },
                    direction,
                });
            }
            true
        });
        crossings
    }
}
