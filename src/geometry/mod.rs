//! Map-space geometry: viewports, region bounds, and the bounds cache.

mod bounds;
mod cache;
mod viewport;

pub use bounds::RegionBounds;
pub use cache::BoundsCache;
pub use viewport::Viewport;
