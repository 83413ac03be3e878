//! Jump targets in lowered code.

use std::fmt;

/// A label introduced by the lowerer. Labels are numbered per lowering
/// pass; their identity only has to hold within one lowered body.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundLabel(pub u32);

impl fmt::Display for BoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label{}", self.0)
    }
}
