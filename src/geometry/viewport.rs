//! The visible rectangular window into the map's coordinate space.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;

use crate::error::MappaError;

/// A rectangle in map coordinates describing what the surface renders.
///
/// The rendered form is the whitespace-separated attribute string
/// `"x y width height"`; [`fmt::Display`] and [`FromStr`] convert between
/// the two. Values are not necessarily integers.
///
/// Mutated only by the
/// [`ViewportAnimator`](crate::animation::ViewportAnimator); everything
/// else reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge in map coordinates.
    pub x: f32,
    /// Top edge in map coordinates.
    pub y: f32,
    /// Visible width.
    pub width: f32,
    /// Visible height.
    pub height: f32,
}

impl Viewport {
    /// Viewport from its four components.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width-to-height ratio.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Center point of the visible rectangle.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x + self.width / 2.0,
            self.y + self.height / 2.0,
        )
    }

    /// Component-wise linear interpolation between two viewports.
    ///
    /// Pure — the caller remaps `t` through an easing curve first. For any
    /// `t`, `a.lerp(&a, t) == a`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            width: self.width + (other.width - self.width) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }

    /// The rendered attribute form, `"x y width height"`.
    #[must_use]
    pub fn to_attribute(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for Viewport {
    type Err = MappaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let mut next = || -> Result<f32, MappaError> {
            parts
                .next()
                .ok_or_else(|| {
                    MappaError::ViewportParse(format!(
                        "expected four numbers, got {s:?}"
                    ))
                })?
                .parse::<f32>()
                .map_err(|e| {
                    MappaError::ViewportParse(format!("{e} in {s:?}"))
                })
        };

        let (x, y, width, height) = (next()?, next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(MappaError::ViewportParse(format!(
                "trailing input in {s:?}"
            )));
        }
        Ok(Self::new(x, y, width, height))
    }
}
