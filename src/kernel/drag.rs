//! Drag-to-reorder interaction state.

use crate::models::HabitList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: usize,
    },
}

impl DragState {
    pub fn source(&self) -> Option<usize> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { source } => Some(*source),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Picks up the row at `index`. Rows outside `0..len` cannot be picked up.
    pub fn start(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        let next = DragState::Dragging { source: index };
        let changed = *self != next;
        *self = next;
        changed
    }

    /// Whether dropping on `index` would be accepted. Never changes state.
    pub fn over(&self, index: usize, len: usize) -> bool {
        self.is_dragging() && index < len
    }

    /// Completes the drag on `target`, reordering `habits`.
    ///
    /// Returns `(ended, reordered)`. A drop with no recorded source does nothing.
    pub fn drop_on(&mut self, target: usize, habits: &mut HabitList) -> (bool, bool) {
        let Some(source) = self.source() else {
            return (false, false);
        };
        *self = DragState::Idle;
        (true, habits.move_to(source, target))
    }

    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = DragState::Idle;
        was_dragging
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/drag.rs"]
mod tests;
