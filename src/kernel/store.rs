use crate::core::Command;
use crate::models::HabitId;

use super::{Action, AppState, Effect, FocusTarget};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn unchanged() -> Self {
        Self::changed(false)
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::InputInsert(ch) => DispatchResult::changed(self.state.input.insert(ch)),
            Action::InputPaste(text) => {
                DispatchResult::changed(self.state.input.insert_str(&text))
            }
            Action::InputBackspace => DispatchResult::changed(self.state.input.backspace()),
            Action::InputDelete => DispatchResult::changed(self.state.input.delete()),
            Action::InputCursorLeft => DispatchResult::changed(self.state.input.cursor_left()),
            Action::InputCursorRight => DispatchResult::changed(self.state.input.cursor_right()),
            Action::InputCursorHome => DispatchResult::changed(self.state.input.cursor_home()),
            Action::InputCursorEnd => DispatchResult::changed(self.state.input.cursor_end()),
            Action::InputClear => DispatchResult::changed(self.state.input.clear()),
            Action::SubmitInput => self.submit_input(),
            Action::RemoveHabit { id } => self.remove_habit(id),
            Action::RemoveSelected => match self.state.selected_habit().map(|r| r.id) {
                Some(id) => self.remove_habit(id),
                None => DispatchResult::unchanged(),
            },
            Action::SelectRow { index } => {
                if index >= self.state.habits.len() {
                    return DispatchResult::unchanged();
                }
                let prev = (self.state.ui.selected, self.state.ui.focus);
                self.state.ui.selected = index;
                self.state.ui.focus = FocusTarget::List;
                let scrolled = self.state.normalize_list_view();
                DispatchResult::changed(scrolled || prev != (index, FocusTarget::List))
            }
            Action::MoveSelection { delta } => {
                let len = self.state.habits.len();
                if len == 0 {
                    return DispatchResult::unchanged();
                }
                let prev = self.state.ui.selected;
                self.state.ui.selected = offset_index(prev, delta, len);
                let scrolled = self.state.normalize_list_view();
                DispatchResult::changed(scrolled || prev != self.state.ui.selected)
            }
            Action::MoveSelected { delta } => self.move_selected(delta),
            Action::ListSetViewHeight { height } => {
                let prev = self.state.ui.list_view_height;
                self.state.ui.list_view_height = height;
                let scrolled = self.state.normalize_list_view();
                DispatchResult::changed(scrolled || prev != height)
            }
            Action::ListScroll { delta } => {
                let len = self.state.habits.len();
                let height = self.state.ui.list_view_height.max(1);
                let max_scroll = len.saturating_sub(height);
                let prev = self.state.ui.list_scroll;
                let next = offset_index(prev, delta, max_scroll + 1);
                self.state.ui.list_scroll = next;
                // Keep the keyboard cursor on a visible row.
                if len > 0 {
                    self.state.ui.selected = self
                        .state
                        .ui
                        .selected
                        .clamp(next, (next + height - 1).min(len - 1));
                }
                DispatchResult::changed(prev != next)
            }
            Action::DragStart { index } => {
                let len = self.state.habits.len();
                let changed = self.state.drag.start(index, len);
                if self.state.drag.is_dragging() {
                    tracing::debug!(index, "drag started");
                } else {
                    tracing::debug!(index, len, "drag start outside the list ignored");
                }
                DispatchResult::changed(changed)
            }
            Action::DragOver { index } => {
                let accepted = self.state.drag.over(index, self.state.habits.len());
                tracing::trace!(index, accepted, "drag over");
                DispatchResult::unchanged()
            }
            Action::DragDrop { index } => {
                let source = self.state.drag.source();
                let (ended, reordered) = self.state.drag.drop_on(index, &mut self.state.habits);
                if !ended {
                    tracing::debug!(index, "drop without drag source ignored");
                    return DispatchResult::unchanged();
                }
                tracing::debug!(?source, target = index, reordered, "drop");
                if reordered {
                    self.state.ui.selected = index;
                    self.state.normalize_list_view();
                }
                DispatchResult::changed(true)
            }
            Action::DragCancel => {
                let cancelled = self.state.drag.cancel();
                if cancelled {
                    tracing::debug!("drag cancelled");
                }
                DispatchResult::changed(cancelled)
            }
            Action::SetFocus(focus) => {
                let prev = self.state.ui.focus;
                self.state.ui.focus = focus;
                DispatchResult::changed(prev != focus)
            }
            Action::FocusNext => {
                self.state.ui.focus = self.state.ui.focus.next();
                DispatchResult::changed(true)
            }
            Action::Quit => DispatchResult {
                effects: vec![Effect::Quit],
                state_changed: false,
            },
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        let action = match command {
            Command::Quit => Action::Quit,
            Command::FocusNext => Action::FocusNext,
            Command::FocusInput => Action::SetFocus(FocusTarget::Input),
            Command::FocusList => Action::SetFocus(FocusTarget::List),
            Command::Escape => {
                if self.state.drag.is_dragging() {
                    Action::DragCancel
                } else {
                    match self.state.ui.focus {
                        FocusTarget::Input => Action::InputClear,
                        FocusTarget::List => Action::SetFocus(FocusTarget::Input),
                    }
                }
            }
            Command::Submit => Action::SubmitInput,
            Command::CursorLeft => Action::InputCursorLeft,
            Command::CursorRight => Action::InputCursorRight,
            Command::CursorHome => Action::InputCursorHome,
            Command::CursorEnd => Action::InputCursorEnd,
            Command::DeleteBackward => Action::InputBackspace,
            Command::DeleteForward => Action::InputDelete,
            Command::ClearInput => Action::InputClear,
            Command::SelectPrev => Action::MoveSelection { delta: -1 },
            Command::SelectNext => Action::MoveSelection { delta: 1 },
            Command::SelectFirst => Action::MoveSelection {
                delta: isize::MIN,
            },
            Command::SelectLast => Action::MoveSelection {
                delta: isize::MAX,
            },
            Command::MoveHabitUp => Action::MoveSelected { delta: -1 },
            Command::MoveHabitDown => Action::MoveSelected { delta: 1 },
            Command::RemoveHabit => Action::RemoveSelected,
        };
        self.dispatch(action)
    }

    fn submit_input(&mut self) -> DispatchResult {
        let Some(id) = self.state.habits.add(self.state.input.text()) else {
            tracing::debug!("blank habit name ignored");
            return DispatchResult::unchanged();
        };
        self.state.input.clear();
        tracing::debug!(%id, len = self.state.habits.len(), "habit added");
        self.state.normalize_list_view();
        DispatchResult::changed(true)
    }

    fn remove_habit(&mut self, id: HabitId) -> DispatchResult {
        if !self.state.habits.remove(id) {
            tracing::debug!(%id, "remove of unknown habit ignored");
            return DispatchResult::unchanged();
        }
        // Row indices shifted under any in-flight drag.
        self.state.drag.cancel();
        tracing::debug!(%id, len = self.state.habits.len(), "habit removed");
        self.state.normalize_list_view();
        DispatchResult::changed(true)
    }

    fn move_selected(&mut self, delta: isize) -> DispatchResult {
        let len = self.state.habits.len();
        if len == 0 {
            return DispatchResult::unchanged();
        }
        let from = self.state.ui.selected;
        let to = offset_index(from, delta, len);
        if !self.state.habits.move_to(from, to) {
            return DispatchResult::unchanged();
        }
        // Row indices shifted under any in-flight drag.
        self.state.drag.cancel();
        tracing::debug!(from, to, "habit moved");
        self.state.ui.selected = to;
        self.state.normalize_list_view();
        DispatchResult::changed(true)
    }
}

/// `index + delta`, saturated into `0..len` (`len` must be non-zero).
fn offset_index(index: usize, delta: isize, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if delta < 0 {
        index.saturating_sub(delta.unsigned_abs())
    } else {
        index.saturating_add(delta as usize).min(last)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
