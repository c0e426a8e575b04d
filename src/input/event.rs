//! Platform-agnostic input events.
//!
//! These are fed into an [`InputProcessor`](super::InputProcessor) which
//! converts them into [`MapCommand`](crate::engine::MapCommand) values.
//! Hit testing happens on the host side: each pointer event arrives with
//! the [`ClickTarget`] the host resolved under the pointer, the way a DOM
//! event carries its target element.
//!
//! # Example
//!
//! ```ignore
//! let cmd = input_processor.handle_event(InputEvent::PointerUp {
//!     target: ClickTarget::Region(RegionId::new("fr")),
//! });
//! ```

use crate::catalog::RegionId;
use crate::panel::PanelSection;

/// What the host found under a pointer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A selectable map region.
    Region(RegionId),
    /// The bare map surface with no region under the pointer.
    Background,
    /// The information panel body (interactive content — clicks here
    /// must not leak through to the map).
    Panel,
    /// One of the panel's section tabs.
    PanelTab(PanelSection),
}

/// Platform-agnostic pointer events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed.
    PointerDown {
        /// What the host resolved under the pointer.
        target: ClickTarget,
    },
    /// Primary pointer released.
    PointerUp {
        /// What the host resolved under the pointer at release time.
        target: ClickTarget,
    },
    /// Pointer moved to absolute surface position.
    PointerMoved {
        /// Horizontal position in surface pixels.
        x: f32,
        /// Vertical position in surface pixels.
        y: f32,
    },
}
