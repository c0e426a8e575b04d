//! Per-region bounding boxes.

use glam::Vec2;

/// Axis-aligned bounding box of one selectable region, in map coordinates.
///
/// Measured once by the host's [`RegionGeometry`](crate::surface::RegionGeometry)
/// collaborator and cached in a [`BoundsCache`](super::BoundsCache) for the
/// lifetime of the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Box width.
    pub width: f32,
    /// Box height.
    pub height: f32,
}

impl RegionBounds {
    /// Bounds from the four box components.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x + self.width / 2.0,
            self.y + self.height / 2.0,
        )
    }

    /// Width-to-height ratio.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}
