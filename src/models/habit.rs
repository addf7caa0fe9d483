use compact_str::CompactString;
use std::fmt;

/// Identifier of a habit, unique for the lifetime of the [`super::HabitList`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HabitId(u64);

impl HabitId {
    pub const fn raw(v: u64) -> Self {
        Self(v)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitRecord {
    pub id: HabitId,
    /// Trimmed, never empty.
    pub name: CompactString,
}

impl HabitRecord {
    /// Returns `None` when `name` is blank after trimming.
    pub fn new(id: HabitId, name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id,
            name: CompactString::from(name),
        })
    }
}
