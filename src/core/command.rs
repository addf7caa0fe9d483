//! Semantic commands that keys resolve to.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Application
    Quit,
    FocusNext,
    FocusInput,
    FocusList,
    Escape,

    // Habit input
    Submit,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    DeleteBackward,
    DeleteForward,
    ClearInput,

    // Habit list
    SelectPrev,
    SelectNext,
    SelectFirst,
    SelectLast,
    MoveHabitUp,
    MoveHabitDown,
    RemoveHabit,
}

impl Command {
    pub const ALL: [Command; 20] = [
        Command::Quit,
        Command::FocusNext,
        Command::FocusInput,
        Command::FocusList,
        Command::Escape,
        Command::Submit,
        Command::CursorLeft,
        Command::CursorRight,
        Command::CursorHome,
        Command::CursorEnd,
        Command::DeleteBackward,
        Command::DeleteForward,
        Command::ClearInput,
        Command::SelectPrev,
        Command::SelectNext,
        Command::SelectFirst,
        Command::SelectLast,
        Command::MoveHabitUp,
        Command::MoveHabitDown,
        Command::RemoveHabit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::FocusNext => "focusNext",
            Command::FocusInput => "focusInput",
            Command::FocusList => "focusList",
            Command::Escape => "escape",
            Command::Submit => "submit",
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorHome => "cursorHome",
            Command::CursorEnd => "cursorEnd",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::ClearInput => "clearInput",
            Command::SelectPrev => "selectPrev",
            Command::SelectNext => "selectNext",
            Command::SelectFirst => "selectFirst",
            Command::SelectLast => "selectLast",
            Command::MoveHabitUp => "moveHabitUp",
            Command::MoveHabitDown => "moveHabitDown",
            Command::RemoveHabit => "removeHabit",
        }
    }

    /// Case-insensitive lookup by [`Command::name`].
    pub fn from_name(name: &str) -> Option<Command> {
        let name = name.trim();
        Command::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
