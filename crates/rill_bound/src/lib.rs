//! rill_bound: the bound tree.
//!
//! The binder turns syntax into these nodes: every name resolved to a
//! symbol, every node carrying its type, every operator resolved against
//! the static operator tables. The lowerer and evaluator consume nothing
//! but this representation.

pub mod conversion;
pub mod label;
pub mod node;
pub mod ops;
pub mod program;
pub mod writer;

pub use conversion::Conversion;
pub use label::BoundLabel;
pub use node::*;
pub use ops::{BoundBinaryOperator, BoundBinaryOperatorKind, BoundUnaryOperator, BoundUnaryOperatorKind};
pub use program::{BoundGlobalScope, BoundProgram};
