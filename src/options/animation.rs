use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::Transition;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Animation timing parameters.
pub struct AnimationOptions {
    /// Whether zoom transitions animate at all. Disabled, every
    /// transition snaps instantly.
    #[schemars(title = "Animate Transitions")]
    pub enabled: bool,
    /// Zoom transition duration in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub duration_ms: u64,
}

impl AnimationOptions {
    /// The transition zoom changes should use under these options.
    #[must_use]
    pub fn transition(&self) -> Transition {
        if self.enabled {
            Transition::glide()
                .with_duration(Duration::from_millis(self.duration_ms))
        } else {
            Transition::snap()
        }
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_uses_configured_duration() {
        let opts = AnimationOptions {
            enabled: true,
            duration_ms: 250,
        };
        assert_eq!(
            opts.transition().duration,
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_disabled_animation_snaps() {
        let opts = AnimationOptions {
            enabled: false,
            duration_ms: 800,
        };
        assert_eq!(opts.transition(), Transition::snap());
    }
}
