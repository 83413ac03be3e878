//! rill_core: Shared primitives for the Rill compiler.
//!
//! Source locations, string interning, and the literal value
//! representation used by every later stage.

pub mod intern;
pub mod text;
pub mod value;
