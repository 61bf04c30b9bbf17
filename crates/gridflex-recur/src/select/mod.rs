//! Grid editing: click and drag painting over a [`SlotSelection`](crate::slot::SlotSelection).

mod drag;
mod editor;

pub use drag::{DragState, SelectionMode};
pub use editor::GridEditor;
