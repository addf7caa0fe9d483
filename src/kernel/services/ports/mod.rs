//! Service ports: data contracts.

pub mod settings;

pub use settings::{KeybindingRule, Settings, ThemeSettings};
