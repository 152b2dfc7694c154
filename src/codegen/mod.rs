//! JSX generation: component mapping and source emission.

pub mod emit;
pub mod mapping;

pub use emit::{emit, emit_named};
