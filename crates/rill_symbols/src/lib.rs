//! rill_symbols: the symbol and type model.
//!
//! Symbols are `Arc`-shared across the binder, the lowered program, and the
//! evaluator. Identity is a process-unique id, never the name, so shadowed
//! variables in nested scopes stay distinct at runtime.

pub mod builtins;
pub mod symbol;
pub mod types;

pub use builtins::{BUILTIN_INPUT, BUILTIN_PRINT, BUILTIN_RND};
pub use symbol::{FunctionSymbol, Symbol, SymbolId, VariableKind, VariableSymbol};
pub use types::TypeSymbol;
