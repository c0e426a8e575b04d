//! The animation driver: owns the in-flight animation and writes the
//! rendered viewport.

use web_time::Instant;

use super::runner::AnimationRunner;
use super::transition::Transition;
use crate::geometry::Viewport;
use crate::surface::MapSurface;

/// Drives viewport animations one frame at a time.
///
/// Owns at most one [`AnimationRunner`]; starting a new animation replaces
/// (and thereby cancels) any in-flight one, and the new animation's start
/// point is the *current* — possibly mid-flight — viewport, so rapid
/// repeated requests compose without visual tearing. This is the only
/// place that writes the surface's viewport attribute.
///
/// The render hint is set on the surface while an animation is in flight
/// and cleared when it completes.
pub struct ViewportAnimator {
    /// The viewport as last applied to the surface.
    current: Viewport,
    /// In-flight animation, if any.
    runner: Option<AnimationRunner>,
}

impl ViewportAnimator {
    /// Animator at rest on the given viewport.
    #[must_use]
    pub fn new(initial: Viewport) -> Self {
        Self {
            current: initial,
            runner: None,
        }
    }

    /// The viewport as of the last applied frame.
    #[must_use]
    pub fn current(&self) -> Viewport {
        self.current
    }

    /// Whether an animation is currently in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.runner.is_some()
    }

    /// Write the current viewport to the surface without animating.
    ///
    /// Used once at startup to publish the initial viewport.
    pub fn apply_current(&self, surface: &mut dyn MapSurface) {
        surface.set_view_box(&self.current);
    }

    /// Begin animating from the current viewport to `target`.
    ///
    /// Any in-flight animation is superseded: its runner is dropped, so
    /// none of its remaining ticks can ever apply.
    pub fn animate_to(
        &mut self,
        target: Viewport,
        transition: Transition,
        surface: &mut dyn MapSurface,
    ) {
        if self.runner.is_some() {
            log::debug!("superseding in-flight animation");
        }
        surface.set_render_hint(true);
        self.runner =
            Some(AnimationRunner::new(self.current, target, transition));
    }

    /// Begin animating with an explicit start instant (for testing).
    #[cfg(test)]
    fn animate_to_at(
        &mut self,
        target: Viewport,
        transition: Transition,
        surface: &mut dyn MapSurface,
        start: Instant,
    ) {
        surface.set_render_hint(true);
        self.runner = Some(AnimationRunner::with_start_time(
            start,
            self.current,
            target,
            transition,
        ));
    }

    /// Advance the in-flight animation and apply the frame to the surface.
    ///
    /// Returns `true` while the animation is still running. On the
    /// completing frame the viewport snaps exactly to the target, the
    /// render hint is cleared, and the runner is dropped. Calling with no
    /// animation in flight is a no-op.
    pub fn update(
        &mut self,
        now: Instant,
        surface: &mut dyn MapSurface,
    ) -> bool {
        let Some(ref runner) = self.runner else {
            return false;
        };

        self.current = runner.sample(now);
        surface.set_view_box(&self.current);

        if runner.is_complete(now) {
            self.runner = None;
            surface.set_render_hint(false);
            log::debug!("animation complete at {}", self.current);
            return false;
        }

        true
    }

    /// Skip the in-flight animation to its end state.
    pub fn skip(&mut self, surface: &mut dyn MapSurface) {
        if let Some(runner) = self.runner.take() {
            self.current = *runner.target();
            surface.set_view_box(&self.current);
            surface.set_render_hint(false);
        }
    }

    /// Drop the in-flight animation, staying at the current viewport.
    pub fn cancel(&mut self, surface: &mut dyn MapSurface) {
        if self.runner.take().is_some() {
            surface.set_render_hint(false);
        }
    }
}

impl std::fmt::Debug for ViewportAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportAnimator")
            .field("current", &self.current)
            .field("is_animating", &self.runner.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::surface::MemorySurface;

    const DEFAULT: Viewport = Viewport {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 600.0,
    };

    fn target_a() -> Viewport {
        Viewport::new(100.0, 100.0, 400.0, 240.0)
    }

    fn target_b() -> Viewport {
        Viewport::new(600.0, 200.0, 500.0, 300.0)
    }

    #[test]
    fn test_idle_update_is_noop() {
        let mut animator = ViewportAnimator::new(DEFAULT);
        let mut surface = MemorySurface::new();

        assert!(!animator.update(Instant::now(), &mut surface));
        assert_eq!(surface.view_box(), "");
        assert!(!surface.render_hint());
    }

    #[test]
    fn test_animation_runs_and_completes_exactly() {
        let mut animator = ViewportAnimator::new(DEFAULT);
        let mut surface = MemorySurface::new();
        let start = Instant::now();

        animator.animate_to_at(
            target_a(),
            Transition::linear(Duration::from_millis(100)),
            &mut surface,
            start,
        );
        assert!(animator.is_animating());
        assert!(surface.render_hint());

        let still = animator
            .update(start + Duration::from_millis(50), &mut surface);
        assert!(still);
        let mid = animator.current();
        assert!((mid.x - 50.0).abs() < 0.1);
        assert!(surface.render_hint());

        let still = animator
            .update(start + Duration::from_millis(100), &mut surface);
        assert!(!still);
        assert!(!animator.is_animating());
        assert!(!surface.render_hint());
        assert_eq!(surface.view_box(), "100 100 400 240");
    }

    #[test]
    fn test_supersession_leaves_one_animation_and_no_tearing() {
        let mut animator = ViewportAnimator::new(DEFAULT);
        let mut surface = MemorySurface::new();
        let start = Instant::now();

        animator.animate_to_at(
            target_a(),
            Transition::linear(Duration::from_millis(100)),
            &mut surface,
            start,
        );
        let _ = animator
            .update(start + Duration::from_millis(50), &mut surface);
        let mid_flight = animator.current();

        // Re-entrant request: the new animation starts from the mid-flight
        // viewport and the old runner is gone.
        animator.animate_to(target_b(), Transition::glide(), &mut surface);
        assert!(animator.is_animating());
        assert_eq!(animator.current(), mid_flight);

        // Far-future tick: only B's target can ever be applied.
        let done = animator
            .update(Instant::now() + Duration::from_secs(5), &mut surface);
        assert!(!done);
        assert_eq!(animator.current(), target_b());
        assert_eq!(surface.view_box(), target_b().to_attribute());
    }

    #[test]
    fn test_snap_completes_on_first_update() {
        let mut animator = ViewportAnimator::new(DEFAULT);
        let mut surface = MemorySurface::new();

        animator.animate_to(target_a(), Transition::snap(), &mut surface);
        assert!(!animator.update(Instant::now(), &mut surface));
        assert_eq!(animator.current(), target_a());
        assert!(!surface.render_hint());
    }

    #[test]
    fn test_skip_jumps_to_target() {
        let mut animator = ViewportAnimator::new(DEFAULT);
        let mut surface = MemorySurface::new();

        animator.animate_to(target_a(), Transition::glide(), &mut surface);
        animator.skip(&mut surface);

        assert!(!animator.is_animating());
        assert_eq!(animator.current(), target_a());
        assert!(!surface.render_hint());
    }

    #[test]
    fn test_cancel_stays_at_current() {
        let mut animator = ViewportAnimator::new(DEFAULT);
        let mut surface = MemorySurface::new();
        let start = Instant::now();

        animator.animate_to_at(
            target_a(),
            Transition::linear(Duration::from_millis(100)),
            &mut surface,
            start,
        );
        let _ = animator
            .update(start + Duration::from_millis(50), &mut surface);
        let mid_flight = animator.current();

        animator.cancel(&mut surface);
        assert!(!animator.is_animating());
        assert_eq!(animator.current(), mid_flight);
        assert!(!surface.render_hint());
    }

    #[test]
    fn test_restart_after_completion_animates_again() {
        let mut animator = ViewportAnimator::new(DEFAULT);
        let mut surface = MemorySurface::new();

        animator.animate_to(target_a(), Transition::snap(), &mut surface);
        let _ = animator.update(Instant::now(), &mut surface);

        // Requesting a new animation from a completion observer must not
        // double-schedule: there is still exactly one runner.
        animator.animate_to(DEFAULT, Transition::snap(), &mut surface);
        assert!(animator.is_animating());
        let _ = animator.update(Instant::now(), &mut surface);
        assert_eq!(surface.view_box(), "0 0 1000 600");
    }
}
