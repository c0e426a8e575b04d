//! Collaborator seams between the engine and the host page.
//!
//! The engine never touches markup or styling directly. It writes a small
//! set of markers — the viewport attribute, an active-region class, a
//! render hint, panel visibility and content — through these traits, and
//! reads region geometry through [`RegionGeometry`]. The in-memory
//! implementations ([`MemorySurface`], [`MemoryPanel`], [`StaticGeometry`])
//! make the engine fully exercisable headless.

use rustc_hash::FxHashMap;

use crate::catalog::RegionId;
use crate::geometry::{RegionBounds, Viewport};
use crate::panel::PanelSection;

/// The rendered map surface.
///
/// Hosts translate these calls into their rendering layer: the viewport
/// becomes the surface's view-box attribute, the active region and render
/// hint become style markers.
pub trait MapSurface {
    /// Write the rendered viewport attribute (`"x y width height"`).
    ///
    /// Called only by the animation driver.
    fn set_view_box(&mut self, viewport: &Viewport);

    /// Set or clear the animation-in-flight render hint.
    fn set_render_hint(&mut self, active: bool);

    /// Mark a region as the focused one, or clear the marker.
    fn set_active_region(&mut self, id: Option<&RegionId>);
}

/// The information side panel.
///
/// The engine sets content and a visibility marker; rendering the markup
/// is the host's responsibility.
pub trait PanelSurface {
    /// Show or hide the panel (a marker the styling layer consumes).
    fn set_visible(&mut self, visible: bool);

    /// Mark which panel section is active.
    fn set_active_section(&mut self, section: PanelSection);

    /// Replace the panel's content markup.
    fn render(&mut self, markup: &str);
}

/// Region measurement collaborator.
///
/// Measurement may legitimately fail for regions the host has not laid
/// out yet (hidden or degenerate elements) — `measure` returns `None` and
/// callers treat absence as "not yet measurable", never as fatal.
pub trait RegionGeometry {
    /// Identifiers of every selectable region.
    fn region_ids(&self) -> Vec<RegionId>;

    /// Bounding box of one region, if it can be measured right now.
    fn measure(&self, id: &RegionId) -> Option<RegionBounds>;
}

// ── In-memory implementations ────────────────────────────────────────────

/// Map surface that records the latest markers in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    view_box: String,
    render_hint: bool,
    active_region: Option<RegionId>,
}

impl MemorySurface {
    /// Surface with no attribute written yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last view-box attribute written, empty before the first write.
    #[must_use]
    pub fn view_box(&self) -> &str {
        &self.view_box
    }

    /// Whether the render hint is currently set.
    #[must_use]
    pub fn render_hint(&self) -> bool {
        self.render_hint
    }

    /// The currently marked active region, if any.
    #[must_use]
    pub fn active_region(&self) -> Option<&RegionId> {
        self.active_region.as_ref()
    }
}

impl MapSurface for MemorySurface {
    fn set_view_box(&mut self, viewport: &Viewport) {
        self.view_box = viewport.to_attribute();
    }

    fn set_render_hint(&mut self, active: bool) {
        self.render_hint = active;
    }

    fn set_active_region(&mut self, id: Option<&RegionId>) {
        self.active_region = id.cloned();
    }
}

/// Panel surface that records visibility, section, and markup in memory.
#[derive(Debug, Clone)]
pub struct MemoryPanel {
    visible: bool,
    section: PanelSection,
    markup: String,
}

impl MemoryPanel {
    /// Hidden panel with no content.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: false,
            section: PanelSection::default(),
            markup: String::new(),
        }
    }

    /// Whether the visibility marker is set.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The active section marker.
    #[must_use]
    pub fn section(&self) -> PanelSection {
        self.section
    }

    /// The last rendered markup.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl Default for MemoryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelSurface for MemoryPanel {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_active_section(&mut self, section: PanelSection) {
        self.section = section;
    }

    fn render(&mut self, markup: &str) {
        self.markup = markup.to_owned();
    }
}

/// Fixed region geometry backed by a map of pre-measured bounds.
///
/// Regions registered with `None` bounds model elements the host cannot
/// measure (hidden/degenerate) — they appear in `region_ids` but fail
/// measurement.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    regions: FxHashMap<RegionId, Option<RegionBounds>>,
}

impl StaticGeometry {
    /// Empty geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a measurable region.
    pub fn insert(&mut self, id: RegionId, bounds: RegionBounds) {
        let _ = self.regions.insert(id, Some(bounds));
    }

    /// Register a region whose measurement fails.
    pub fn insert_unmeasurable(&mut self, id: RegionId) {
        let _ = self.regions.insert(id, None);
    }
}

impl RegionGeometry for StaticGeometry {
    fn region_ids(&self) -> Vec<RegionId> {
        self.regions.keys().cloned().collect()
    }

    fn measure(&self, id: &RegionId) -> Option<RegionBounds> {
        self.regions.get(id).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_records_markers() {
        let mut surface = MemorySurface::new();
        assert_eq!(surface.view_box(), "");

        surface.set_view_box(&Viewport::new(0.0, 0.0, 1000.0, 600.0));
        surface.set_render_hint(true);
        surface.set_active_region(Some(&RegionId::new("fr")));

        assert_eq!(surface.view_box(), "0 0 1000 600");
        assert!(surface.render_hint());
        assert_eq!(surface.active_region(), Some(&RegionId::new("fr")));

        surface.set_active_region(None);
        assert!(surface.active_region().is_none());
    }

    #[test]
    fn test_static_geometry_measurement() {
        let mut geometry = StaticGeometry::new();
        geometry.insert(
            RegionId::new("fr"),
            RegionBounds::new(1.0, 2.0, 3.0, 4.0),
        );
        geometry.insert_unmeasurable(RegionId::new("aq"));

        assert_eq!(geometry.region_ids().len(), 2);
        assert!(geometry.measure(&RegionId::new("fr")).is_some());
        assert!(geometry.measure(&RegionId::new("aq")).is_none());
        assert!(geometry.measure(&RegionId::new("zz")).is_none());
    }
}
