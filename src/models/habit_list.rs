//! Ordered in-memory habit store.
//!
//! Every mutation is permissive: invalid input is ignored rather than reported, and the return
//! value only says whether the sequence changed.

use super::habit::{HabitId, HabitRecord};

#[derive(Debug, Clone)]
pub struct HabitList {
    records: Vec<HabitRecord>,
    next_id: u64,
}

impl Default for HabitList {
    fn default() -> Self {
        Self::new()
    }
}

impl HabitList {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a list by `add`ing each name in order; blank names are skipped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in names {
            list.add(name.as_ref());
        }
        list
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HabitRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HabitRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[HabitRecord] {
        &self.records
    }

    pub fn position(&self, id: HabitId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Appends a habit named `name` (trimmed). Blank names are ignored.
    pub fn add(&mut self, name: &str) -> Option<HabitId> {
        let id = HabitId::raw(self.next_id);
        let record = HabitRecord::new(id, name)?;
        self.next_id += 1;
        self.records.push(record);
        Some(id)
    }

    pub fn remove(&mut self, id: HabitId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.records.remove(index);
        true
    }

    /// Takes the habit at `source` out and reinserts it at `target`, where `target` indexes the
    /// sequence *after* the removal. A `target` past the end appends. Out-of-range `source` is
    /// ignored.
    pub fn move_to(&mut self, source: usize, target: usize) -> bool {
        if source >= self.records.len() {
            return false;
        }
        let record = self.records.remove(source);
        let target = target.min(self.records.len());
        self.records.insert(target, record);
        source != target
    }
}

impl<'a> IntoIterator for &'a HabitList {
    type Item = &'a HabitRecord;
    type IntoIter = std::slice::Iter<'a, HabitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/habit_list.rs"]
mod tests;
