//! habitchain - build a daily routine as a chain of habits in the terminal.
//!
//! Module layout:
//! - models: habit records and the ordered habit list
//! - kernel: actions, state, the store reducer, chain formatting, drag state, settings
//! - core: commands, input events and the view contract
//! - ui: geometry, hit-test tree, pointer runtime, paint commands and backends
//! - app: the habit chain screen (layout, render, input routing, theme)
//! - tui: crossterm conversion and terminal lifecycle

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
