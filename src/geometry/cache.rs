//! Measure-once cache of region bounding boxes.

use rustc_hash::FxHashMap;

use super::RegionBounds;
use crate::catalog::RegionId;
use crate::surface::RegionGeometry;

/// Caches each selectable region's bounding box.
///
/// Boxes are measured once up front via [`compute_all`](Self::compute_all)
/// after the host reports the map laid out. Regions that fail measurement
/// are simply absent; [`get_or_measure`](Self::get_or_measure) retries them
/// lazily, so a region that becomes measurable later recovers on its next
/// query.
#[derive(Debug, Default)]
pub struct BoundsCache {
    entries: FxHashMap<RegionId, RegionBounds>,
}

impl BoundsCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure and store every region the source knows about.
    ///
    /// Failed measurements are skipped, not errors.
    pub fn compute_all(&mut self, source: &dyn RegionGeometry) {
        let ids = source.region_ids();
        let total = ids.len();

        for id in ids {
            match source.measure(&id) {
                Some(bounds) => {
                    let _ = self.entries.insert(id, bounds);
                }
                None => {
                    log::debug!("region '{id}' not measurable, skipping");
                }
            }
        }

        log::info!("bounds cache: {}/{total} regions measured", self.len());
    }

    /// Cached bounds for a region, without measuring.
    #[must_use]
    pub fn get(&self, id: &RegionId) -> Option<RegionBounds> {
        self.entries.get(id).copied()
    }

    /// Cached bounds, measuring lazily on a miss.
    ///
    /// Returns `None` only when the region still cannot be measured;
    /// callers treat that as "not yet measurable", not fatal.
    pub fn get_or_measure(
        &mut self,
        id: &RegionId,
        source: &dyn RegionGeometry,
    ) -> Option<RegionBounds> {
        if let Some(bounds) = self.entries.get(id) {
            return Some(*bounds);
        }
        let bounds = source.measure(id)?;
        let _ = self.entries.insert(id.clone(), bounds);
        Some(bounds)
    }

    /// Number of cached boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
