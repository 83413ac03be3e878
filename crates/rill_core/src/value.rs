//! The literal value representation.
//!
//! The same representation is used for literal tokens, bound literal
//! expressions, and runtime values in the evaluator, so a backend only
//! ever sees one encoding of integers, booleans, and strings.

use std::fmt;
use std::sync::Arc;

/// A literal or runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value; produced by void expressions.
    Unit,
    Int(i64),
    Bool(bool),
    String(Arc<str>),
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.into())
    }
}
