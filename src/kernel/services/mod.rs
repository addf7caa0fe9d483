//! Services layer (ports + adapters).
//!
//! - `ports`: data contracts shared with the app layer.
//! - `adapters`: filesystem specific implementations (paths, settings, keybindings).

pub mod adapters;
pub mod ports;
