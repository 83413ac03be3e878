//! The type universe.

use rill_core::value::Value;
use std::fmt;

/// Every type the language knows about. `Error` is the placeholder type
/// produced when binding fails; it silences cascading diagnostics because
/// no operator or conversion is ever reported against it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TypeSymbol {
    Error,
    Any,
    Int,
    Bool,
    String,
    Void,
}

impl TypeSymbol {
    /// Resolve a type name as written in source.
    pub fn lookup(name: &str) -> Option<TypeSymbol> {
        match name {
            "Any" => Some(TypeSymbol::Any),
            "Int" => Some(TypeSymbol::Int),
            "Bool" => Some(TypeSymbol::Bool),
            "String" => Some(TypeSymbol::String),
            _ => None,
        }
    }

    /// The type of a runtime value.
    pub fn of(value: &Value) -> TypeSymbol {
        match value {
            Value::Unit => TypeSymbol::Void,
            Value::Int(_) => TypeSymbol::Int,
            Value::Bool(_) => TypeSymbol::Bool,
            Value::String(_) => TypeSymbol::String,
        }
    }

    pub fn is_error(self) -> bool {
        self == TypeSymbol::Error
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeSymbol::Error => "?",
            TypeSymbol::Any => "Any",
            TypeSymbol::Int => "Int",
            TypeSymbol::Bool => "Bool",
            TypeSymbol::String => "String",
            TypeSymbol::Void => "Void",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(TypeSymbol::lookup("Int"), Some(TypeSymbol::Int));
        assert_eq!(TypeSymbol::lookup("int"), None);
        assert_eq!(TypeSymbol::lookup("Void"), None);
    }

    #[test]
    fn test_type_of_value() {
        assert_eq!(TypeSymbol::of(&Value::Int(3)), TypeSymbol::Int);
        assert_eq!(TypeSymbol::of(&Value::Bool(true)), TypeSymbol::Bool);
        assert_eq!(TypeSymbol::of(&Value::string("x")), TypeSymbol::String);
        assert_eq!(TypeSymbol::of(&Value::Unit), TypeSymbol::Void);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TypeSymbol::Int.to_string(), "Int");
        assert_eq!(TypeSymbol::Error.to_string(), "?");
    }
}
