//! Animation runner executes a single viewport animation.

use web_time::Instant;

use super::transition::Transition;
use crate::geometry::Viewport;

/// One in-flight viewport animation.
///
/// The runner holds the fixed endpoints, the start timestamp, and the
/// transition's timing; sampling is pure given a clock reading. Owned by
/// the [`ViewportAnimator`](super::ViewportAnimator) — at most one exists
/// at a time, and replacing it is how an animation is cancelled.
pub struct AnimationRunner {
    /// When the animation started.
    start_time: Instant,
    /// Viewport at the start of the animation.
    from: Viewport,
    /// Viewport the animation lands on.
    to: Viewport,
    /// Timing and easing.
    transition: Transition,
}

impl AnimationRunner {
    /// Start a new animation between two viewports.
    #[must_use]
    pub fn new(from: Viewport, to: Viewport, transition: Transition) -> Self {
        Self {
            start_time: Instant::now(),
            from,
            to,
            transition,
        }
    }

    /// Create with explicit start time (for testing).
    #[cfg(test)]
    pub fn with_start_time(
        start_time: Instant,
        from: Viewport,
        to: Viewport,
        transition: Transition,
    ) -> Self {
        Self {
            start_time,
            from,
            to,
            transition,
        }
    }

    /// The viewport this animation lands on.
    #[must_use]
    pub fn target(&self) -> &Viewport {
        &self.to
    }

    /// Calculate normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);
        let duration = self.transition.duration;

        if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        }
    }

    /// Whether the animation has reached completion.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Sample the eased viewport at the given clock reading.
    ///
    /// At completion this returns the target exactly (no residual float
    /// drift from the lerp), so the final rendered attribute matches the
    /// target's attribute string.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Viewport {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.transition.easing.evaluate(t);
        self.from.lerp(&self.to, eased)
    }
}

impl std::fmt::Debug for AnimationRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationRunner")
            .field("name", &self.transition.name)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.transition.duration)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    fn endpoints() -> (Viewport, Viewport) {
        (
            Viewport::new(0.0, 0.0, 1000.0, 600.0),
            Viewport::new(50.0, 35.0, 300.0, 180.0),
        )
    }

    #[test]
    fn test_runner_progress() {
        let (from, to) = endpoints();
        let start = Instant::now();
        let runner = AnimationRunner::with_start_time(
            start,
            from,
            to,
            Transition::linear(Duration::from_millis(100)),
        );

        assert!((runner.progress(start) - 0.0).abs() < 0.01);

        let mid = start + Duration::from_millis(50);
        assert!((runner.progress(mid) - 0.5).abs() < 0.01);

        let end = start + Duration::from_millis(100);
        assert!((runner.progress(end) - 1.0).abs() < 0.01);

        let past = start + Duration::from_millis(200);
        assert!((runner.progress(past) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_runner_sample_linear_midpoint() {
        let (from, to) = endpoints();
        let start = Instant::now();
        let runner = AnimationRunner::with_start_time(
            start,
            from,
            to,
            Transition::linear(Duration::from_millis(100)),
        );

        let mid = runner.sample(start + Duration::from_millis(50));
        assert!((mid.x - 25.0).abs() < 0.1);
        assert!((mid.width - 650.0).abs() < 0.1);
    }

    #[test]
    fn test_runner_sample_snaps_exactly_at_completion() {
        let (from, to) = endpoints();
        let start = Instant::now();
        let runner = AnimationRunner::with_start_time(
            start,
            from,
            to,
            Transition::glide(),
        );

        let done = runner.sample(start + Duration::from_secs(2));
        assert_eq!(done, to);
        assert_eq!(done.to_attribute(), "50 35 300 180");
    }

    #[test]
    fn test_runner_snap_completes_immediately() {
        let (from, to) = endpoints();
        let runner = AnimationRunner::new(from, to, Transition::snap());

        assert!(runner.is_complete(Instant::now()));
        assert_eq!(runner.sample(Instant::now()), to);
    }

    #[test]
    fn test_runner_eased_sample_stays_between_endpoints() {
        let (from, to) = endpoints();
        let start = Instant::now();
        let runner = AnimationRunner::with_start_time(
            start,
            from,
            to,
            Transition::glide().with_duration(Duration::from_millis(100)),
        );

        for ms in [10, 30, 50, 70, 90] {
            let vp = runner.sample(start + Duration::from_millis(ms));
            assert!(vp.width <= from.width && vp.width >= to.width);
            assert!(vp.x >= from.x && vp.x <= to.x);
        }
    }
}
