#![forbid(unsafe_code)]

//! Cubic-bezier timing curves.
//!
//! CSS transitions describe easing as `cubic-bezier(x1, y1, x2, y2)`. The
//! runtime needs the same curve in two places: as a CSS string for the
//! declarative reveal rule, and as a function for hosts that interpolate
//! the transition themselves (no CSS transitions available).
//!
//! # Invariants
//!
//! 1. `sample(0) == 0` and `sample(1) == 1` for every curve.
//! 2. Inputs outside `[0, 1]` are clamped.
//! 3. `x1` and `x2` are clamped to `[0, 1]` so the x(t) curve stays monotone.

/// A CSS `cubic-bezier()` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Strong ease-out used by the reveal transition.
pub const EASE_OUT_EXPO: CubicBezier = CubicBezier::new(0.16, 1.0, 0.3, 1.0);

/// The CSS `ease` keyword.
pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

/// The CSS `linear` keyword.
pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f64 = 1e-7;
const BISECTION_ITERATIONS: usize = 48;

impl CubicBezier {
    /// Create a curve from its two control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn coord(t: f64, p1: f64, p2: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn coord_derivative(t: f64, p1: f64, p2: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Solve x(t) = x for the curve parameter t.
    fn solve_t(&self, x: f64) -> f64 {
        let x1 = self.x1.clamp(0.0, 1.0);
        let x2 = self.x2.clamp(0.0, 1.0);

        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::coord(t, x1, x2) - x;
            if err.abs() < NEWTON_EPSILON {
                return t;
            }
            let slope = Self::coord_derivative(t, x1, x2);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        // Newton stalled on a flat segment; bisection always converges.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::coord(t, x1, x2);
            if (value - x).abs() < NEWTON_EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    #[must_use]
    pub fn sample(&self, x: f64) -> f64 {
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        Self::coord(t, self.y1, self.y2)
    }

    /// CSS representation, e.g. `cubic-bezier(0.16, 1, 0.3, 1)`.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        EASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for curve in [EASE_OUT_EXPO, EASE, LINEAR] {
            assert_eq!(curve.sample(0.0), 0.0);
            assert_eq!(curve.sample(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        assert_eq!(EASE_OUT_EXPO.sample(-0.5), 0.0);
        assert_eq!(EASE_OUT_EXPO.sample(1.5), 1.0);
        assert_eq!(EASE_OUT_EXPO.sample(f64::NAN), 0.0);
    }

    #[test]
    fn linear_is_identity() {
        for i in 0..=10 {
            let x = f64::from(i) / 10.0;
            assert!((LINEAR.sample(x) - x).abs() < 1e-5, "x={x}");
        }
    }

    #[test]
    fn ease_out_expo_is_front_loaded() {
        // Most of the motion happens in the first half.
        assert!(EASE_OUT_EXPO.sample(0.5) > 0.9);
        assert!(EASE_OUT_EXPO.sample(0.1) > 0.3);
    }

    #[test]
    fn ease_out_expo_is_monotone() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = EASE_OUT_EXPO.sample(f64::from(i) / 100.0);
            assert!(v + 1e-9 >= prev, "regressed at {i}: {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn css_string() {
        assert_eq!(EASE_OUT_EXPO.css(), "cubic-bezier(0.16, 1, 0.3, 1)");
    }
}
