//! Easing functions for viewport interpolation.
//!
//! All curves are monotonic reparameterizations of [0, 1] with fixed
//! endpoints, cheap enough to evaluate every frame.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic ease-in-out (slow start, fast middle, slow end).
    /// For t < 0.5: `4t³`; otherwise `1 − (−2t + 2)³ / 2`.
    CubicInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing: cubic ease-in-out, the curve zoom transitions use.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        // Clamp input to [0, 1]
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SqrtOut => t.sqrt(),
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let x = -2.0 * t + 2.0;
                    1.0 - x * x * x / 2.0
                }
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                // f(t) = c0(1-t)³ + c1·3t(1-t)² + c2·3(1-t)t² + c3·t³
                // where c0=0.0, c3=1.0
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 6] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::SqrtOut,
        EasingFunction::CubicInOut,
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 },
    ];

    #[test]
    fn test_endpoints_fixed() {
        for easing in ALL {
            assert!(easing.evaluate(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!(
                (easing.evaluate(1.0) - 1.0).abs() < 1e-6,
                "{easing:?} at 1"
            );
        }
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        for easing in ALL {
            let mut prev = easing.evaluate(0.0);
            for step in 1..=100 {
                let value = easing.evaluate(step as f32 / 100.0);
                assert!(
                    value >= prev - 1e-6,
                    "{easing:?} decreased at step {step}"
                );
                prev = value;
            }
        }
    }

    #[test]
    fn test_cubic_in_out_shape() {
        let ease = EasingFunction::CubicInOut;
        // Symmetric S-curve: slow start, exact half at the midpoint.
        assert!((ease.evaluate(0.25) - 0.0625).abs() < 1e-6); // 4·0.25³
        assert!((ease.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((ease.evaluate(0.75) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        for easing in ALL {
            assert_eq!(easing.evaluate(-0.5), easing.evaluate(0.0));
            assert!((easing.evaluate(1.5) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicInOut);
    }
}
