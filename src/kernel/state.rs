use crate::models::HabitList;

use super::drag::DragState;
use super::input::HabitInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Input,
    List,
}

impl FocusTarget {
    pub fn next(self) -> Self {
        match self {
            FocusTarget::Input => FocusTarget::List,
            FocusTarget::List => FocusTarget::Input,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: FocusTarget,
    /// Keyboard cursor in the list; meaningless while the list is empty.
    pub selected: usize,
    /// First visible row.
    pub list_scroll: usize,
    /// Visible row count reported by the last render.
    pub list_view_height: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub habits: HabitList,
    pub input: HabitInput,
    pub drag: DragState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(habits: HabitList) -> Self {
        Self {
            habits,
            ..Self::default()
        }
    }

    pub fn selected_habit(&self) -> Option<&crate::models::HabitRecord> {
        self.habits.get(self.ui.selected)
    }

    /// Clamps the selection into the list and scrolls it into view.
    pub(super) fn normalize_list_view(&mut self) -> bool {
        let prev = (self.ui.selected, self.ui.list_scroll);
        let len = self.habits.len();

        self.ui.selected = self.ui.selected.min(len.saturating_sub(1));

        let height = self.ui.list_view_height;
        if height > 0 {
            if self.ui.selected < self.ui.list_scroll {
                self.ui.list_scroll = self.ui.selected;
            } else if self.ui.selected >= self.ui.list_scroll + height {
                self.ui.list_scroll = self.ui.selected + 1 - height;
            }
            self.ui.list_scroll = self.ui.list_scroll.min(len.saturating_sub(height));
        } else {
            self.ui.list_scroll = 0;
        }

        prev != (self.ui.selected, self.ui.list_scroll)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
