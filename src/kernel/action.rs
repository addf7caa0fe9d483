use crate::core::Command;
use crate::models::HabitId;

use super::state::FocusTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RunCommand(Command),

    InputInsert(char),
    InputPaste(String),
    InputBackspace,
    InputDelete,
    InputCursorLeft,
    InputCursorRight,
    InputCursorHome,
    InputCursorEnd,
    InputClear,
    SubmitInput,

    RemoveHabit { id: HabitId },
    RemoveSelected,
    SelectRow { index: usize },
    MoveSelection { delta: isize },
    MoveSelected { delta: isize },
    ListSetViewHeight { height: usize },
    ListScroll { delta: isize },

    DragStart { index: usize },
    DragOver { index: usize },
    DragDrop { index: usize },
    DragCancel,

    SetFocus(FocusTarget),
    FocusNext,
    Quit,
}
