//! Input vocabulary and view contract shared by the kernel and the frontends.

pub mod command;
pub mod event;
pub mod view;

pub use command::Command;
pub use event::{InputEvent, Key};
pub use view::{EventResult, View};
