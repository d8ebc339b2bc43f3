//! Timelines and their playback clock.
//!
//! A `Timeline` is the immutable description: an initial style plus ordered
//! interpolation steps. A `Playback` is the mutable clock that runs over it,
//! forward or reversed. Keeping the two apart makes `style_at` a pure
//! function of time, so replay is deterministic.

use serde::{Deserialize, Serialize};

use crate::ease::Easing;
use crate::error::MotionError;
use crate::style::Style;

/// One interpolation step: ease toward `target` over `duration`, starting
/// `delay` after the prior step's end. Delays are timeline-relative, never
/// wall-clock, so stagger offsets compose predictably.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub target: Style,
    pub duration: f32,
    #[serde(default)]
    pub delay: f32,
    #[serde(default)]
    pub easing: Easing,
}

impl Step {
    pub fn new(target: Style, duration: f32) -> Self {
        Self {
            target,
            duration,
            delay: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Ordered sequence of interpolation steps over a defined initial style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub initial: Style,
    pub steps: Vec<Step>,
}

impl Timeline {
    pub fn new(initial: Style) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// Builder-style step append.
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Single-step convenience constructor.
    pub fn tween(initial: Style, target: Style, duration: f32, delay: f32, easing: Easing) -> Self {
        Timeline::new(initial).then(Step::new(target, duration).with_delay(delay).with_easing(easing))
    }

    /// Reject empty timelines and non-finite or negative durations/delays.
    pub fn validate(&self) -> Result<(), MotionError> {
        if self.steps.is_empty() {
            return Err(MotionError::EmptyTimeline);
        }
        for step in &self.steps {
            if !step.duration.is_finite() || step.duration < 0.0 {
                return Err(MotionError::InvalidDuration(step.duration));
            }
            if !step.delay.is_finite() || step.delay < 0.0 {
                return Err(MotionError::InvalidDelay(step.delay));
            }
        }
        Ok(())
    }

    /// Total clock span: the sum of every step's delay and duration.
    pub fn total_duration(&self) -> f32 {
        self.steps.iter().map(|s| s.delay + s.duration).sum()
    }

    /// Style at timeline time `t` (clamped into [0, total]). During a step's
    /// delay the output holds the prior step's end style.
    pub fn style_at(&self, t: f32) -> Style {
        let mut from = self.initial.clone();
        let mut cursor = 0.0f32;
        for step in &self.steps {
            let start = cursor + step.delay;
            let end = start + step.duration;
            if t < start {
                return from;
            }
            if t < end {
                let local = if step.duration > 0.0 {
                    (t - start) / step.duration
                } else {
                    1.0
                };
                return Style::lerp(&from, &step.target, step.easing.apply(local));
            }
            from = step.target.clone();
            cursor = end;
        }
        from
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayDirection {
    Forward,
    Reverse,
}

/// Playback lifecycle. `Idle` covers both never-started and frozen via
/// `cancel_at_current`; the clock value disambiguates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayState {
    Idle,
    Playing,
    Done,
}

/// Forward/reverse clock over a timeline. The playback does not own the
/// timeline; callers pass the total duration to `advance` and map the clock
/// through `Timeline::style_at`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playback {
    time: f32,
    direction: PlayDirection,
    state: PlayState,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            time: 0.0,
            direction: PlayDirection::Forward,
            state: PlayState::Idle,
        }
    }
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    #[inline]
    pub fn state(&self) -> PlayState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlayState::Playing)
    }

    /// Progress fraction of the clock in [0,1].
    pub fn progress(&self, total: f32) -> f32 {
        if total <= 0.0 {
            return 0.0;
        }
        (self.time / total).clamp(0.0, 1.0)
    }

    /// Start (or continue) playing forward. A completed forward run or a
    /// pristine clock restarts from the initial style; an in-flight or frozen
    /// clock resumes from its current position for visual continuity.
    pub fn play(&mut self) {
        match self.state {
            PlayState::Playing => self.direction = PlayDirection::Forward,
            PlayState::Idle if self.time > 0.0 => {
                self.direction = PlayDirection::Forward;
                self.state = PlayState::Playing;
            }
            _ => {
                self.time = 0.0;
                self.direction = PlayDirection::Forward;
                self.state = PlayState::Playing;
            }
        }
    }

    /// Run the clock backward from its current position toward the initial
    /// style. A forward-completed clock reverses from the end.
    pub fn reverse(&mut self) {
        self.direction = PlayDirection::Reverse;
        self.state = PlayState::Playing;
    }

    /// Freeze the clock where it stands. Output stays at the style for the
    /// current time; never snaps to either end.
    pub fn cancel_at_current(&mut self) {
        self.state = PlayState::Idle;
    }

    /// Jump the clock to the terminal position for its direction; the next
    /// `advance` completes immediately. Used when animations are disabled.
    pub fn skip_to_end(&mut self, total: f32) {
        if self.is_playing() {
            self.time = match self.direction {
                PlayDirection::Forward => total,
                PlayDirection::Reverse => 0.0,
            };
        }
    }

    /// Advance by dt against a timeline span. Returns true on the tick the
    /// clock reaches its boundary.
    pub fn advance(&mut self, dt: f32, total: f32) -> bool {
        if !self.is_playing() {
            return false;
        }
        match self.direction {
            PlayDirection::Forward => {
                self.time += dt;
                if self.time >= total {
                    self.time = total;
                    self.state = PlayState::Done;
                    return true;
                }
            }
            PlayDirection::Reverse => {
                self.time -= dt;
                if self.time <= 0.0 {
                    self.time = 0.0;
                    self.state = PlayState::Done;
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProperty;

    fn fade() -> Timeline {
        Timeline::tween(
            Style::new().with(StyleProperty::Opacity, 0.0),
            Style::new().with(StyleProperty::Opacity, 1.0),
            1.0,
            0.0,
            Easing::Linear,
        )
    }

    #[test]
    fn total_duration_sums_delays() {
        let tl = Timeline::new(Style::new().with(StyleProperty::Opacity, 0.0))
            .then(Step::new(Style::new().with(StyleProperty::Opacity, 1.0), 0.6).with_delay(0.2))
            .then(Step::new(Style::new().with(StyleProperty::Opacity, 0.5), 0.4).with_delay(0.3));
        assert!((tl.total_duration() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn style_holds_during_delay() {
        let tl = Timeline::new(Style::new().with(StyleProperty::Opacity, 0.0))
            .then(
                Step::new(Style::new().with(StyleProperty::Opacity, 1.0), 0.5)
                    .with_easing(Easing::Linear),
            )
            .then(
                Step::new(Style::new().with(StyleProperty::Opacity, 0.25), 0.5)
                    .with_delay(0.5)
                    .with_easing(Easing::Linear),
            );
        // Inside the second step's delay window: holds the first target.
        assert_eq!(tl.style_at(0.75).get(StyleProperty::Opacity), Some(1.0));
        // Past the end: last target.
        assert_eq!(tl.style_at(9.0).get(StyleProperty::Opacity), Some(0.25));
    }

    #[test]
    fn zero_duration_step_snaps() {
        let tl = Timeline::new(Style::new().with(StyleProperty::Opacity, 0.0)).then(Step::new(
            Style::new().with(StyleProperty::Opacity, 1.0),
            0.0,
        ));
        assert_eq!(tl.style_at(0.0).get(StyleProperty::Opacity), Some(1.0));
    }

    #[test]
    fn validate_rejects_bad_steps() {
        let empty = Timeline::new(Style::new());
        assert_eq!(empty.validate(), Err(MotionError::EmptyTimeline));

        let nan = Timeline::tween(Style::new(), Style::new(), f32::NAN, 0.0, Easing::Linear);
        assert!(matches!(
            nan.validate(),
            Err(MotionError::InvalidDuration(_))
        ));

        let neg_delay = Timeline::tween(Style::new(), Style::new(), 1.0, -0.1, Easing::Linear);
        assert!(matches!(
            neg_delay.validate(),
            Err(MotionError::InvalidDelay(_))
        ));
    }

    #[test]
    fn replay_restarts_from_initial() {
        let tl = fade();
        let mut pb = Playback::new();
        pb.play();
        while !pb.advance(0.25, tl.total_duration()) {}
        assert_eq!(pb.state(), PlayState::Done);
        pb.play();
        assert_eq!(pb.time(), 0.0);
        assert_eq!(tl.style_at(pb.time()), tl.initial);
    }

    #[test]
    fn cancel_freezes_in_place() {
        let tl = fade();
        let mut pb = Playback::new();
        pb.play();
        pb.advance(0.4, tl.total_duration());
        pb.cancel_at_current();
        let frozen = tl.style_at(pb.time());
        assert!(!pb.advance(10.0, tl.total_duration()));
        assert_eq!(tl.style_at(pb.time()), frozen);
        assert_eq!(frozen.get(StyleProperty::Opacity), Some(0.4));
    }

    #[test]
    fn reverse_returns_to_initial() {
        let tl = fade();
        let mut pb = Playback::new();
        pb.play();
        pb.advance(0.7, tl.total_duration());
        pb.reverse();
        assert!(pb.advance(0.7, tl.total_duration()));
        assert_eq!(tl.style_at(pb.time()), tl.initial);
    }
}
