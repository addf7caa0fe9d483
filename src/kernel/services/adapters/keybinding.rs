//! Keybindings: key chord → command, resolved per focus context.

use crate::core::event::Key;
use crate::core::event::KeyCode;
use crate::core::Command;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Input,
    List,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "input" | "habitinput" | "habit_input" => Some(Self::Input),
            "list" | "habitlist" | "habit_list" | "reorder" => Some(Self::List),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    input: FxHashMap<Key, Command>,
    list: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            input: default_input_keybindings(),
            list: default_list_keybindings(),
        }
    }

    /// Looks `key` up in `context`, falling back to the global map.
    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Input => self.input.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::List => self.list.get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Input => &self.input,
            KeybindingContext::List => &self.list,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Input => &mut self.input,
            KeybindingContext::List => &mut self.list,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::simple(KeyCode::Tab), Command::FocusNext);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::FocusNext);
    bindings.insert(Key::shift(KeyCode::BackTab), Command::FocusNext);

    bindings
}

fn default_input_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Enter), Command::Submit);
    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorHome);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorEnd);
    bindings.insert(Key::ctrl(KeyCode::Char('a')), Command::CursorHome);
    bindings.insert(Key::ctrl(KeyCode::Char('e')), Command::CursorEnd);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);
    bindings.insert(Key::ctrl(KeyCode::Char('u')), Command::ClearInput);
    bindings.insert(Key::simple(KeyCode::Down), Command::FocusList);

    bindings
}

fn default_list_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Up), Command::SelectPrev);
    bindings.insert(Key::simple(KeyCode::Down), Command::SelectNext);
    bindings.insert(Key::simple(KeyCode::Char('k')), Command::SelectPrev);
    bindings.insert(Key::simple(KeyCode::Char('j')), Command::SelectNext);
    bindings.insert(Key::simple(KeyCode::Home), Command::SelectFirst);
    bindings.insert(Key::simple(KeyCode::End), Command::SelectLast);

    bindings.insert(Key::alt(KeyCode::Up), Command::MoveHabitUp);
    bindings.insert(Key::alt(KeyCode::Down), Command::MoveHabitDown);
    bindings.insert(Key::shift(KeyCode::Up), Command::MoveHabitUp);
    bindings.insert(Key::shift(KeyCode::Down), Command::MoveHabitDown);

    bindings.insert(Key::simple(KeyCode::Delete), Command::RemoveHabit);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::RemoveHabit);
    bindings.insert(Key::simple(KeyCode::Char('d')), Command::RemoveHabit);

    bindings.insert(Key::simple(KeyCode::Char('i')), Command::FocusInput);
    bindings.insert(Key::simple(KeyCode::Char('a')), Command::FocusInput);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
