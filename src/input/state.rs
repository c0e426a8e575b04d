use super::event::ClickTarget;
use crate::catalog::RegionId;
use crate::panel::PanelSection;

/// Squared pointer travel (surface pixels) past which a press counts as a
/// drag rather than a click.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// Result of processing a pointer-up event through the click state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No action (drag, mismatched down/up, or a suppressed panel click).
    NoAction,
    /// A clean click on a region.
    Region(RegionId),
    /// A clean click on the map background.
    Background,
    /// A clean click on a panel section tab.
    PanelTab(PanelSection),
}

/// Tracks pointer position, drag state, and press/release matching.
#[derive(Debug, Default)]
pub struct PointerState {
    /// Last known pointer position.
    pub pointer_pos: (f32, f32),
    /// What was under the pointer at press time, while pressed.
    down_target: Option<ClickTarget>,
    /// Whether significant movement occurred while pressed.
    is_dragging: bool,
}

impl PointerState {
    /// State with no active press.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what was under the pointer at press time.
    pub fn handle_pointer_down(&mut self, target: ClickTarget) {
        self.down_target = Some(target);
        self.is_dragging = false;
    }

    /// Update pointer position; past the drag threshold while pressed,
    /// the press stops being a click.
    pub fn handle_pointer_moved(&mut self, x: f32, y: f32) {
        let (lx, ly) = self.pointer_pos;
        self.pointer_pos = (x, y);

        if self.down_target.is_some() {
            let (dx, dy) = (x - lx, y - ly);
            if dx * dx + dy * dy > DRAG_THRESHOLD_SQ {
                self.is_dragging = true;
            }
        }
    }

    /// Process a pointer release and return what kind of click happened.
    ///
    /// A click requires press and release on the same target with no drag
    /// in between. Panel-body clicks resolve to [`ClickOutcome::NoAction`]
    /// — interactive panel content must never read as a map click.
    pub fn process_pointer_up(&mut self, target: ClickTarget) -> ClickOutcome {
        let down_target = self.down_target.take();
        let was_dragging = std::mem::take(&mut self.is_dragging);

        if was_dragging {
            return ClickOutcome::NoAction;
        }

        match down_target {
            Some(down) if down == target => match target {
                ClickTarget::Region(id) => ClickOutcome::Region(id),
                ClickTarget::Background => ClickOutcome::Background,
                ClickTarget::PanelTab(section) => {
                    ClickOutcome::PanelTab(section)
                }
                ClickTarget::Panel => ClickOutcome::NoAction,
            },
            // Pressed and released on different things — no action.
            _ => ClickOutcome::NoAction,
        }
    }
}
