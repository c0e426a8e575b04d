//! View focus state and the zoom target computation.

use crate::catalog::RegionId;
use crate::geometry::{RegionBounds, Viewport};
use crate::options::ZoomOptions;

/// Where the view is looking.
///
/// Encodes the zoom invariant in the type: a focused region exists if and
/// only if the view is zoomed, and exactly one region can be focused at a
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewFocus {
    /// The whole map at its default viewport.
    #[default]
    Overview,
    /// Zoomed in on one region.
    Focused(RegionId),
}

impl ViewFocus {
    /// Whether the view is zoomed in.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        matches!(self, Self::Focused(_))
    }

    /// The focused region, if any.
    #[must_use]
    pub fn focused_region(&self) -> Option<&RegionId> {
        match self {
            Self::Overview => None,
            Self::Focused(id) => Some(id),
        }
    }
}

/// Compute the viewport that focuses a region.
///
/// Fits the region's padded bounds into the default viewport's aspect
/// ratio by expanding whichever dimension is the binding constraint, then
/// clamps both dimensions to `min_zoom_ratio` of the default viewport so
/// tiny regions never produce degenerate close-ups (the clamp pair shares
/// the fit's aspect ratio, so it stays intact). The result is shifted
/// horizontally by `panel_shift_ratio` of the target width, leaving room
/// for the side panel next to the region.
#[must_use]
pub fn focus_viewport(
    bounds: &RegionBounds,
    default_viewport: &Viewport,
    zoom: &ZoomOptions,
) -> Viewport {
    let target_aspect = default_viewport.aspect();

    let (mut width, mut height) = if bounds.aspect() > target_aspect {
        let w = bounds.width + zoom.padding * 2.0;
        (w, w / target_aspect)
    } else {
        let h = bounds.height + zoom.padding * 2.0;
        (h * target_aspect, h)
    };

    width = width.max(default_viewport.width * zoom.min_zoom_ratio);
    height = height.max(default_viewport.height * zoom.min_zoom_ratio);

    let center = bounds.center();
    Viewport {
        x: center.x - width * (0.5 - zoom.panel_shift_ratio),
        y: center.y - height / 2.0,
        width,
        height,
    }
}
