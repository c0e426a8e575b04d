//! Per-frame animation advance for MapEngine.

use web_time::Instant;

use super::MapEngine;
use crate::surface::{MapSurface, PanelSurface, RegionGeometry};

impl<M, P, G> MapEngine<M, P, G>
where
    M: MapSurface,
    P: PanelSurface,
    G: RegionGeometry,
{
    /// Advance the in-flight zoom animation by one frame.
    ///
    /// Call once per host frame. Returns `true` while an animation is
    /// running (the host should keep scheduling frames); with nothing in
    /// flight this is a cheap no-op, so unconditional per-frame calls are
    /// fine.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.animator.update(now, &mut self.map)
    }
}
