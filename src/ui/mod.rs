//! UI layer (thin wrapper over `ratatui`).
//!
//! All `ratatui` types stay behind the backend adapter; the rest of the crate talks to the
//! hit-test tree, the pointer runtime and paint commands.

pub mod backend;
pub mod core;
