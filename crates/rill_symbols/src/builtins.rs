//! Built-in functions.
//!
//! These are ordinary function symbols without a declaration; the evaluator
//! dispatches on their identity.

use crate::symbol::{FunctionSymbol, VariableKind, VariableSymbol};
use crate::types::TypeSymbol;
use std::sync::{Arc, LazyLock};

fn parameter(name: &str, ty: TypeSymbol) -> Arc<VariableSymbol> {
    VariableSymbol::new(name, VariableKind::Parameter, true, ty)
}

/// `print(text: Any)` writes a line to standard output.
pub static BUILTIN_PRINT: LazyLock<Arc<FunctionSymbol>> = LazyLock::new(|| {
    FunctionSymbol::new(
        "print",
        vec![parameter("text", TypeSymbol::Any)],
        TypeSymbol::Void,
        None,
    )
});

/// `input(): String` reads a line from standard input.
pub static BUILTIN_INPUT: LazyLock<Arc<FunctionSymbol>> =
    LazyLock::new(|| FunctionSymbol::new("input", Vec::new(), TypeSymbol::String, None));

/// `rnd(max: Int): Int` returns a random integer in `[0, max)`.
pub static BUILTIN_RND: LazyLock<Arc<FunctionSymbol>> = LazyLock::new(|| {
    FunctionSymbol::new(
        "rnd",
        vec![parameter("max", TypeSymbol::Int)],
        TypeSymbol::Int,
        None,
    )
});

/// All builtins, in declaration order.
pub fn all() -> [&'static Arc<FunctionSymbol>; 3] {
    [&BUILTIN_PRINT, &BUILTIN_INPUT, &BUILTIN_RND]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_identity_is_stable() {
        let print = Arc::clone(&BUILTIN_PRINT);
        assert_eq!(*BUILTIN_PRINT, print);
        assert_ne!(BUILTIN_PRINT.id, BUILTIN_INPUT.id);
    }

    #[test]
    fn test_builtin_signatures() {
        assert_eq!(BUILTIN_PRINT.parameters.len(), 1);
        assert_eq!(BUILTIN_PRINT.return_type, TypeSymbol::Void);
        assert_eq!(BUILTIN_INPUT.return_type, TypeSymbol::String);
        assert_eq!(BUILTIN_RND.parameters[0].ty, TypeSymbol::Int);
    }
}
