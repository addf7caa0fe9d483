//! Application layer: wires the kernel store to input, theme and painting.

pub mod habit_chain;
pub mod theme;

pub use habit_chain::HabitChainApp;
