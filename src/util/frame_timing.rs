//! Frame pacing for host event loops.

use web_time::{Duration, Instant};

/// Frame timing with FPS calculation and optional frame limiting.
///
/// Hosts without vsync-driven callbacks use this to pace
/// [`MapEngine::tick`](crate::engine::MapEngine::tick) calls: check
/// [`should_render`](Self::should_render) each loop iteration and call
/// [`end_frame`](Self::end_frame) after applying a frame.
#[derive(Debug)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited).
    target_fps: u32,
    /// Minimum frame duration based on the target FPS.
    min_frame_duration: Duration,
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameTiming {
    /// Frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// The minimum spacing between frames at the configured target.
    #[must_use]
    pub fn frame_budget(&self) -> Duration {
        self.min_frame_duration
    }

    /// Call after applying a frame to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current smoothed FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
