//! Headless application core (state/action/effect).

pub mod action;
pub mod chain;
pub mod drag;
pub mod effect;
pub mod input;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use chain::{format_chain, CHAIN_PLACEHOLDER};
pub use drag::DragState;
pub use effect::Effect;
pub use input::HabitInput;
pub use state::{AppState, FocusTarget, UiState};
pub use store::{DispatchResult, Store};
