use gridflex_core::types::EncodingMode;

use super::drag::{DragState, SelectionMode};
use crate::recurrence::{cron_to_slots, slots_to_cron_with_mode};
use crate::slot::{SlotSelection, WeekSlot};

/// A slot selection together with the drag in progress over it.
#[derive(Debug, Clone, Default)]
pub struct GridEditor {
    selection: SlotSelection,
    drag: DragState,
}

impl GridEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Opens an editor on a stored recurrence string.
    ///
    /// Undecodable clauses are skipped, so the editor shows whatever part
    /// of the string could be read.
    #[must_use]
    pub fn load(recurrence: &str) -> Self {
        Self {
            selection: cron_to_slots(recurrence),
            drag: DragState::Idle,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &SlotSelection {
        &self.selection
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn press(&mut self, slot: WeekSlot) -> SelectionMode {
        self.drag.press(slot, &mut self.selection)
    }

    pub fn hover(&mut self, slot: WeekSlot) -> bool {
        self.drag.hover(slot, &mut self.selection)
    }

    pub fn release(&mut self) {
        self.drag.release();
    }

    /// Deselects everything and abandons any drag.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.drag.release();
    }

    /// Serialises the current selection.
    #[must_use]
    pub fn encode(&self, mode: EncodingMode) -> String {
        slots_to_cron_with_mode(&self.selection, mode)
    }
}
