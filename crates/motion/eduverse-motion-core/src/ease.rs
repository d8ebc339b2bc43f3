//! Easing functions: named presets lowered to cubic-bezier timing, plus the
//! bezier x-inversion used to evaluate them.

use serde::{Deserialize, Serialize};

/// Timing curve for a timeline step or progress ramp.
///
/// Named variants carry the CSS control points; `CubicBezier` takes
/// `[x1, y1, x2, y2]` directly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier([f32; 4]),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseOut
    }
}

impl Easing {
    /// Control points (x1, y1, x2, y2), or None for Linear.
    pub fn control_points(&self) -> Option<[f32; 4]> {
        match self {
            Easing::Linear => None,
            Easing::EaseIn => Some([0.42, 0.0, 1.0, 1.0]),
            Easing::EaseOut => Some([0.0, 0.0, 0.58, 1.0]),
            Easing::EaseInOut => Some([0.42, 0.0, 0.58, 1.0]),
            Easing::CubicBezier(ctrl) => Some(*ctrl),
        }
    }

    /// Map raw progress t in [0,1] to eased progress.
    #[inline]
    pub fn apply(&self, t: f32) -> f32 {
        match self.control_points() {
            None => t.clamp(0.0, 1.0),
            Some([x1, y1, x2, y2]) => bezier_ease_t(t, x1, y1, x2, y2),
        }
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(Easing::Linear.apply(t), t);
        }
    }

    #[test]
    fn bezier_linear_fast_path() {
        let e = Easing::CubicBezier([0.0, 0.0, 1.0, 1.0]);
        assert_eq!(e.apply(0.37), 0.37);
    }

    #[test]
    fn ease_out_endpoints_and_monotone() {
        let e = Easing::EaseOut;
        assert!(e.apply(0.0).abs() < 1e-4);
        assert!((e.apply(1.0) - 1.0).abs() < 1e-4);
        let mut prev = 0.0;
        for i in 1..=20 {
            let y = e.apply(i as f32 / 20.0);
            assert!(y >= prev - 1e-4, "not monotone at step {i}");
            prev = y;
        }
        // Ease-out front-loads progress.
        assert!(e.apply(0.5) > 0.5);
    }

    #[test]
    fn apply_clamps_input() {
        assert_eq!(Easing::EaseInOut.apply(-0.5), Easing::EaseInOut.apply(0.0));
        assert_eq!(Easing::EaseInOut.apply(1.5), Easing::EaseInOut.apply(1.0));
    }
}
