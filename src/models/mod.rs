//! Data models.

pub mod habit;
pub mod habit_list;

pub use habit::{HabitId, HabitRecord};
pub use habit_list::HabitList;
