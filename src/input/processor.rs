//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! drag detection) and is the only thing that sits between raw host
//! events and the engine's
//! [`execute`](crate::engine::MapEngine::execute) method.

use super::event::InputEvent;
use super::state::{ClickOutcome, PointerState};
use crate::engine::MapCommand;

/// Converts raw host events into [`MapCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Pointer tracking and click state machine.
    state: PointerState,
}

impl InputProcessor {
    /// Create a new processor with no active press.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PointerState::new(),
        }
    }

    /// Current pointer position in surface pixels.
    #[must_use]
    pub fn pointer_pos(&self) -> (f32, f32) {
        self.state.pointer_pos
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<MapCommand> {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.state.handle_pointer_moved(x, y);
                None
            }
            InputEvent::PointerDown { target } => {
                self.state.handle_pointer_down(target);
                None
            }
            InputEvent::PointerUp { target } => {
                match self.state.process_pointer_up(target) {
                    ClickOutcome::NoAction => None,
                    ClickOutcome::Region(id) => {
                        Some(MapCommand::SelectRegion { id })
                    }
                    ClickOutcome::Background => Some(MapCommand::ClearFocus),
                    ClickOutcome::PanelTab(section) => {
                        Some(MapCommand::ShowPanelSection { section })
                    }
                }
            }
        }
    }
}
