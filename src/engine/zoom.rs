//! Zoom transitions for MapEngine.

use super::MapEngine;
use crate::catalog::RegionId;
use crate::surface::{MapSurface, PanelSurface, RegionGeometry};
use crate::view::{focus_viewport, ViewFocus};

impl<M, P, G> MapEngine<M, P, G>
where
    M: MapSurface,
    P: PanelSurface,
    G: RegionGeometry,
{
    /// Focus a region, or toggle back to the overview when it is already
    /// focused.
    ///
    /// The transition always starts from the current live viewport, so a
    /// click mid-animation retargets smoothly. Returns `false` when the
    /// region cannot be measured yet — the click degrades to a no-op and
    /// the view stays interactable.
    pub(super) fn select_region(&mut self, id: RegionId) -> bool {
        if self.focus.focused_region() == Some(&id) {
            return self.clear_focus();
        }

        let Some(bounds) = self.cache.get_or_measure(&id, &self.geometry)
        else {
            log::debug!("region '{id}' not measurable, ignoring click");
            return false;
        };

        let target = focus_viewport(
            &bounds,
            &self.default_viewport,
            &self.options.zoom,
        );
        self.animator.animate_to(
            target,
            self.options.animation.transition(),
            &mut self.map,
        );

        // Active marker moves to the clicked region, replacing any
        // previous one.
        self.map.set_active_region(Some(&id));
        self.presenter
            .present(self.catalog.resolve(&id), &mut self.panel);

        log::info!("focused region '{id}'");
        self.focus = ViewFocus::Focused(id);
        true
    }

    /// Return to the overview. No-op (no animation) when already there.
    pub(super) fn clear_focus(&mut self) -> bool {
        if !self.focus.is_zoomed() {
            return false;
        }

        self.animator.animate_to(
            self.default_viewport,
            self.options.animation.transition(),
            &mut self.map,
        );
        self.map.set_active_region(None);
        self.presenter.hide(&mut self.panel);

        log::info!("returning to overview");
        self.focus = ViewFocus::Overview;
        true
    }
}
