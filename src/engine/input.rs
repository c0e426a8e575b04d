//! Input dispatch for MapEngine.

use super::{MapCommand, MapEngine};
use crate::input::InputEvent;
use crate::surface::{MapSurface, PanelSurface, RegionGeometry};

impl<M, P, G> MapEngine<M, P, G>
where
    M: MapSurface,
    P: PanelSurface,
    G: RegionGeometry,
{
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw host
    /// events as [`InputEvent`] variants; the engine converts clean clicks
    /// into commands and executes them.
    ///
    /// Returns `true` if engine state changed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::PointerUp {
    ///     target: ClickTarget::Region(RegionId::new("fr")),
    /// });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match self.processor.handle_event(event) {
            Some(cmd) => self.execute(cmd),
            None => false,
        }
    }

    /// Execute a command.
    ///
    /// The engine never cares how a command was triggered — pointer
    /// input, host UI, or API all converge here. Returns `true` if engine
    /// state changed.
    pub fn execute(&mut self, cmd: MapCommand) -> bool {
        match cmd {
            MapCommand::SelectRegion { id } => self.select_region(id),
            MapCommand::ClearFocus => self.clear_focus(),
            MapCommand::ShowPanelSection { section } => {
                self.presenter.show_section(section, &mut self.panel)
            }
        }
    }
}
