//! Continuous scroll-progress bindings.
//!
//! A ramp is a pure function `progress -> Style`; nothing here holds discrete
//! state, so the driver is testable independent of any rendering call.

use serde::{Deserialize, Serialize};

use crate::ease::Easing;
use crate::error::MotionError;
use crate::ids::{BindingToken, ElementHandle};
use crate::style::Style;

/// Scroll region over which progress runs 0 to 1.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressRegion {
    pub start: f32,
    pub end: f32,
}

impl ProgressRegion {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start >= self.end {
            return Err(MotionError::InvalidRegion {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Progress at a scroll offset, always clamped to [0,1] even when the
    /// offset precedes or exceeds the region.
    #[inline]
    pub fn progress_at(&self, scroll_offset: f32) -> f32 {
        ((scroll_offset - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// Eased linear map from progress to a style between two endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleRamp {
    pub from: Style,
    pub to: Style,
    #[serde(default)]
    pub easing: Easing,
}

impl StyleRamp {
    pub fn new(from: Style, to: Style) -> Self {
        Self {
            from,
            to,
            easing: Easing::Linear,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Pure sampling; output always lies between the endpoints.
    pub fn sample(&self, progress: f32) -> Style {
        Style::lerp(&self.from, &self.to, self.easing.apply(progress.clamp(0.0, 1.0)))
    }
}

/// Live progress binding held by the engine.
#[derive(Clone, Debug)]
pub struct ProgressBinding {
    pub token: BindingToken,
    pub element: ElementHandle,
    pub region: ProgressRegion,
    pub ramp: StyleRamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProperty;

    #[test]
    fn progress_clamps_outside_region() {
        let region = ProgressRegion::new(0.0, 80.0);
        assert_eq!(region.progress_at(-50.0), 0.0);
        assert_eq!(region.progress_at(0.0), 0.0);
        assert_eq!(region.progress_at(40.0), 0.5);
        assert_eq!(region.progress_at(80.0), 1.0);
        assert_eq!(region.progress_at(5000.0), 1.0);
    }

    #[test]
    fn region_validation() {
        assert!(ProgressRegion::new(0.0, 80.0).validate().is_ok());
        assert!(ProgressRegion::new(80.0, 0.0).validate().is_err());
        assert!(ProgressRegion::new(0.0, 0.0).validate().is_err());
        assert!(ProgressRegion::new(f32::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn ramp_output_stays_in_range() {
        let ramp = StyleRamp::new(
            Style::new().with(StyleProperty::PaddingBlock, 16.0),
            Style::new().with(StyleProperty::PaddingBlock, 8.0),
        );
        for p in [-1.0, 0.0, 0.3, 0.99, 1.0, 7.5] {
            let v = ramp.sample(p).get(StyleProperty::PaddingBlock).unwrap();
            assert!((8.0..=16.0).contains(&v), "out of range at {p}: {v}");
        }
        assert_eq!(
            ramp.sample(0.5).get(StyleProperty::PaddingBlock),
            Some(12.0)
        );
    }
}
