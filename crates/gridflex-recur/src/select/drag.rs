use crate::slot::{SlotSelection, WeekSlot};

/// Whether a drag adds slots to the selection or removes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Select,
    Deselect,
}

impl SelectionMode {
    /// The mode that flips a slot currently in state `selected`.
    #[must_use]
    pub const fn inverse_of(selected: bool) -> Self {
        if selected { Self::Deselect } else { Self::Select }
    }

    #[must_use]
    pub const fn selects(self) -> bool {
        matches!(self, Self::Select)
    }
}

/// Pointer state for paint-style selection.
///
/// A press fixes the anchor corner and the mode. Every hover then repaints
/// the whole rectangle between the anchor and the hovered slot on top of
/// the selection as it was at press time, so shrinking the drag restores
/// the cells it leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor: WeekSlot,
        mode: SelectionMode,
        baseline: SlotSelection,
    },
}

impl DragState {
    /// ## Summary
    /// Starts a drag at `slot`, flipping it and returning the chosen mode.
    ///
    /// A press while already dragging restarts from the new anchor.
    pub fn press(&mut self, slot: WeekSlot, selection: &mut SlotSelection) -> SelectionMode {
        let mode = SelectionMode::inverse_of(selection.contains(slot));
        let baseline = selection.clone();
        selection.set(slot, mode.selects());
        tracing::trace!(%slot, ?mode, "Drag started");
        *self = Self::Dragging {
            anchor: slot,
            mode,
            baseline,
        };
        mode
    }

    /// ## Summary
    /// Extends the drag to `slot`. Returns `false` when no drag is active.
    pub fn hover(&self, slot: WeekSlot, selection: &mut SlotSelection) -> bool {
        let Self::Dragging {
            anchor,
            mode,
            baseline,
        } = self
        else {
            return false;
        };

        selection.clone_from(baseline);
        for cell in rectangle(*anchor, slot) {
            selection.set(cell, mode.selects());
        }
        true
    }

    /// Ends the drag, keeping whatever the last hover painted.
    pub fn release(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Every slot between two corners, inclusive on both axes.
fn rectangle(a: WeekSlot, b: WeekSlot) -> impl Iterator<Item = WeekSlot> {
    let days = a.day().min(b.day())..=a.day().max(b.day());
    let halves = a.half_hour().min(b.half_hour())..=a.half_hour().max(b.half_hour());
    days.flat_map(move |day| {
        halves
            .clone()
            .filter_map(move |half_hour| WeekSlot::new(day, half_hour).ok())
    })
}
