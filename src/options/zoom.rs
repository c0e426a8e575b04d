use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Zoom target geometry parameters.
pub struct ZoomOptions {
    /// Map-space padding added around a region's bounds before fitting.
    #[schemars(title = "Padding", range(min = 0.0, max = 200.0), extend("step" = 5.0))]
    pub padding: f32,
    /// Minimum zoom extent as a fraction of the default viewport size.
    /// Regions smaller than this never zoom tighter.
    #[schemars(title = "Minimum Zoom", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub min_zoom_ratio: f32,
    /// Horizontal offset as a fraction of the target width, shifting the
    /// focused region aside to leave room for the panel.
    #[schemars(title = "Panel Shift", range(min = 0.0, max = 0.5), extend("step" = 0.05))]
    pub panel_shift_ratio: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            padding: 40.0,
            min_zoom_ratio: 0.3,
            panel_shift_ratio: 0.25,
        }
    }
}
