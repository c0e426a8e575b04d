//! The map engine: composition root for input, zoom state, animation,
//! and presentation.

mod command;
mod frame;
mod input;
mod zoom;

pub use command::MapCommand;

use crate::animation::ViewportAnimator;
use crate::catalog::RegionCatalog;
use crate::geometry::{BoundsCache, Viewport};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::panel::PanelPresenter;
use crate::surface::{MapSurface, PanelSurface, RegionGeometry};
use crate::view::ViewFocus;

/// The interactive map core.
///
/// Owns the collaborator surfaces, the bounds cache, the animation
/// driver, and the zoom state, and exposes three entry points to the
/// host: [`handle_input`](Self::handle_input) for raw pointer events,
/// [`execute`](Self::execute) for explicit commands, and
/// [`tick`](Self::tick) once per frame.
pub struct MapEngine<M, P, G>
where
    M: MapSurface,
    P: PanelSurface,
    G: RegionGeometry,
{
    options: Options,
    catalog: RegionCatalog,
    geometry: G,
    map: M,
    panel: P,
    cache: BoundsCache,
    animator: ViewportAnimator,
    focus: ViewFocus,
    presenter: PanelPresenter,
    processor: InputProcessor,
    default_viewport: Viewport,
}

impl<M, P, G> MapEngine<M, P, G>
where
    M: MapSurface,
    P: PanelSurface,
    G: RegionGeometry,
{
    /// Engine at the overview, resting on the map's default viewport.
    ///
    /// Call [`initialize`](Self::initialize) once the host has laid the
    /// map out, so region bounds can be measured.
    #[must_use]
    pub fn new(
        default_viewport: Viewport,
        options: Options,
        catalog: RegionCatalog,
        geometry: G,
        map: M,
        panel: P,
    ) -> Self {
        Self {
            options,
            catalog,
            geometry,
            map,
            panel,
            cache: BoundsCache::new(),
            animator: ViewportAnimator::new(default_viewport),
            focus: ViewFocus::Overview,
            presenter: PanelPresenter::new(),
            processor: InputProcessor::new(),
            default_viewport,
        }
    }

    /// Measure all region bounds and publish the initial viewport.
    ///
    /// Regions that fail measurement are skipped and retried lazily on
    /// their first click.
    pub fn initialize(&mut self) {
        self.cache.compute_all(&self.geometry);
        self.animator.apply_current(&mut self.map);
        log::info!(
            "map engine initialized at viewport {}",
            self.default_viewport
        );
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current view focus.
    #[must_use]
    pub fn focus(&self) -> &ViewFocus {
        &self.focus
    }

    /// The viewport as of the last applied frame.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.animator.current()
    }

    /// The map's default (overview) viewport.
    #[must_use]
    pub fn default_viewport(&self) -> Viewport {
        self.default_viewport
    }

    /// Whether a zoom transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Engine options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable engine options (takes effect on the next transition).
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// The region content catalog.
    #[must_use]
    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// The map surface (host-side markers and attributes).
    #[must_use]
    pub fn map_surface(&self) -> &M {
        &self.map
    }

    /// The panel surface.
    #[must_use]
    pub fn panel_surface(&self) -> &P {
        &self.panel
    }
}
