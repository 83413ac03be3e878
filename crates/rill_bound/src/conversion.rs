//! Conversion classification.

use rill_symbols::TypeSymbol;

/// How one type converts to another, if at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub exists: bool,
    pub is_identity: bool,
    pub is_implicit: bool,
}

impl Conversion {
    pub const NONE: Conversion = Conversion {
        exists: false,
        is_identity: false,
        is_implicit: false,
    };
    pub const IDENTITY: Conversion = Conversion {
        exists: true,
        is_identity: true,
        is_implicit: true,
    };
    pub const IMPLICIT: Conversion = Conversion {
        exists: true,
        is_identity: false,
        is_implicit: true,
    };
    pub const EXPLICIT: Conversion = Conversion {
        exists: true,
        is_identity: false,
        is_implicit: false,
    };

    pub fn is_explicit(&self) -> bool {
        self.exists && !self.is_implicit
    }

    /// Classify the conversion from `from` to `to`.
    pub fn classify(from: TypeSymbol, to: TypeSymbol) -> Conversion {
        if from == to {
            return Conversion::IDENTITY;
        }
        if from != TypeSymbol::Error && to == TypeSymbol::Any {
            return Conversion::IMPLICIT;
        }
        if from == TypeSymbol::Any && to != TypeSymbol::Error {
            return Conversion::EXPLICIT;
        }
        match (from, to) {
            (TypeSymbol::Bool | TypeSymbol::Int, TypeSymbol::String) => Conversion::EXPLICIT,
            (TypeSymbol::String, TypeSymbol::Bool | TypeSymbol::Int) => Conversion::EXPLICIT,
            _ => Conversion::NONE,
        }
    }
}
