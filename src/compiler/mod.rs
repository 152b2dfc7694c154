//! The compiler core: classification, extraction and semantic tree
//! construction. Everything here is pure and synchronous.

pub mod classify;
pub mod layout;
pub mod parser;
pub mod style;
pub mod tree;

pub use parser::{build, NoRootComponent};
pub use tree::{ComponentType, UiNode};
