//! Service adapters: filesystem specific implementations.

pub mod keybinding;
pub mod paths;
pub mod settings;

pub use keybinding::{KeybindingContext, KeybindingService};
pub use paths::{ensure_log_dir, get_cache_dir, get_log_dir, get_settings_path};
pub use settings::{
    apply_keybinding_rules, ensure_settings_file, load_settings, load_settings_from,
    parse_keybinding,
};
