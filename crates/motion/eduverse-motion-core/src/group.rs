//! Staggered group registration.
//!
//! The stagger policy is plain arithmetic kept out of call sites: item `i`'s
//! first-step delay becomes `stagger_delay(base, increment, i)` where `base`
//! is the template's own first-step delay. Items share one trigger zone
//! unless overridden per item, and are registered in index order so the
//! stagger proceeds in list order regardless of event arrival order.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::ids::ElementHandle;
use crate::timeline::Timeline;
use crate::viewport::TriggerZone;

/// One group member: an element plus its timeline template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupItem {
    pub element: ElementHandle,
    pub timeline: Timeline,
    /// Overrides the group's shared zone for this item.
    #[serde(default)]
    pub zone: Option<TriggerZone>,
}

impl GroupItem {
    pub fn new(element: ElementHandle, timeline: Timeline) -> Self {
        Self {
            element,
            timeline,
            zone: None,
        }
    }

    pub fn with_zone(mut self, zone: TriggerZone) -> Self {
        self.zone = Some(zone);
        self
    }
}

/// Per-item delay for a staggered batch.
#[inline]
pub fn stagger_delay(base_delay: f32, increment: f32, index: usize) -> f32 {
    base_delay + increment * index as f32
}

/// Override a timeline's first-step delay with the staggered value.
pub fn apply_stagger(timeline: &mut Timeline, increment: f32, index: usize) {
    if let Some(first) = timeline.steps.first_mut() {
        first.delay = stagger_delay(first.delay, increment, index);
    }
}

/// Reject a non-finite or negative stagger increment before any item of the
/// batch is registered.
pub fn validate_increment(increment: f32) -> Result<(), MotionError> {
    if !increment.is_finite() || increment < 0.0 {
        return Err(MotionError::InvalidDelay(increment));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ease::Easing;
    use crate::style::{Style, StyleProperty};

    #[test]
    fn stagger_arithmetic() {
        assert_eq!(stagger_delay(0.0, 0.1, 0), 0.0);
        assert!((stagger_delay(0.0, 0.1, 2) - 0.2).abs() < 1e-6);
        assert!((stagger_delay(0.3, 0.05, 4) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn apply_stagger_overrides_first_step() {
        let mut tl = Timeline::tween(
            Style::new().with(StyleProperty::Opacity, 0.0),
            Style::new().with(StyleProperty::Opacity, 1.0),
            0.6,
            0.1,
            Easing::Linear,
        );
        apply_stagger(&mut tl, 0.2, 3);
        assert!((tl.steps[0].delay - 0.7).abs() < 1e-6);
    }

    #[test]
    fn increment_validation() {
        assert!(validate_increment(0.1).is_ok());
        assert!(validate_increment(0.0).is_ok());
        assert!(validate_increment(-0.1).is_err());
        assert!(validate_increment(f32::NAN).is_err());
    }
}
