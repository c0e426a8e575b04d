//! Viewport animation: easing curves, transitions, and the frame-driven
//! animation driver.

mod driver;
mod easing;
mod runner;
mod transition;

pub use driver::ViewportAnimator;
pub use easing::EasingFunction;
pub use runner::AnimationRunner;
pub use transition::Transition;
