//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a pointer click, a
//! host UI control, or a programmatic call — is represented as a
//! `MapCommand`.  Consumers construct commands and pass them to
//! [`MapEngine::execute`](super::MapEngine::execute).

use crate::catalog::RegionId;
use crate::panel::PanelSection;

/// A discrete operation the engine can perform.
///
/// This is the single, centralized description of what the engine can do
/// interactively.  The engine never cares *how* a command was triggered —
/// pointer input, host UI, or API all look identical:
///
/// ```ignore
/// engine.execute(MapCommand::SelectRegion { id: RegionId::new("fr") });
/// engine.execute(MapCommand::ClearFocus);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    /// Focus a region, zooming the viewport to it.
    ///
    /// Selecting the already-focused region zooms back out instead;
    /// selecting a different region while focused retargets directly.
    SelectRegion {
        /// The region to focus.
        id: RegionId,
    },

    /// Return to the overview if zoomed. No-op at the overview.
    ClearFocus,

    /// Switch the information panel to a section.
    ShowPanelSection {
        /// The section to show.
        section: PanelSection,
    },
}
