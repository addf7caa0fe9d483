//! Toolkit-neutral UI primitives: geometry, hit-test tree, pointer runtime and paint commands.

pub mod geom;
pub mod id;
pub mod input;
pub mod painter;
pub mod runtime;
pub mod style;
pub mod tree;
