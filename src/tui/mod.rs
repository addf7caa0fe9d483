//! Terminal frontend (crossterm + ratatui).
//!
//! Kept apart from `kernel` and `models` so the core stays free of terminal crates.

pub mod crossterm;
pub mod terminal_guard;
