//! Transition describes how to animate from the current viewport to a
//! target.

use web_time::Duration;

use super::easing::EasingFunction;

/// Timing and curve for one viewport animation.
///
/// Consumers construct transitions via preset constructors:
/// [`glide()`](Self::glide), [`fast()`](Self::fast),
/// [`linear()`](Self::linear), or [`snap()`](Self::snap), then adjust via
/// the builder methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Total animation duration.
    pub duration: Duration,
    /// Easing curve for interpolation.
    pub easing: EasingFunction,
    /// Debug name.
    pub name: &'static str,
}

impl Transition {
    /// Standard zoom transition: 800 ms, cubic ease-in-out.
    #[must_use]
    pub fn glide() -> Self {
        Self {
            duration: Duration::from_millis(800),
            easing: EasingFunction::DEFAULT,
            name: "glide",
        }
    }

    /// Short transition (300 ms, quadratic ease-out).
    #[must_use]
    pub fn fast() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: EasingFunction::QuadraticOut,
            name: "fast",
        }
    }

    /// Linear interpolation (no easing distortion).
    #[must_use]
    pub fn linear(duration: Duration) -> Self {
        Self {
            duration,
            easing: EasingFunction::Linear,
            name: "linear",
        }
    }

    /// Instant snap with no animation.
    #[must_use]
    pub fn snap() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: EasingFunction::Linear,
            name: "snap",
        }
    }

    /// Override the duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Override the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::glide()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glide_transition() {
        let t = Transition::glide();
        assert_eq!(t.name, "glide");
        assert_eq!(t.duration, Duration::from_millis(800));
        assert_eq!(t.easing, EasingFunction::CubicInOut);
    }

    #[test]
    fn test_snap_is_instant() {
        let t = Transition::snap();
        assert_eq!(t.duration, Duration::ZERO);
    }

    #[test]
    fn test_default_is_glide() {
        assert_eq!(Transition::default().name, "glide");
    }

    #[test]
    fn test_builder_methods() {
        let t = Transition::glide()
            .with_duration(Duration::from_millis(150))
            .with_easing(EasingFunction::Linear);
        assert_eq!(t.duration, Duration::from_millis(150));
        assert_eq!(t.easing, EasingFunction::Linear);
    }
}
