//! Variable and function symbols.

use crate::types::TypeSymbol;
use rill_syntax::ast::FunctionDeclarationSyntax;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

static NEXT_SYMBOL_ID: AtomicU32 = AtomicU32::new(0);

/// Process-unique symbol identity. Two symbols with the same name but
/// different ids are different symbols; this is what makes shadowing work.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    pub fn next() -> SymbolId {
        SymbolId(NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where a variable lives at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VariableKind {
    /// Top-level declaration, stored in the shared variable map.
    Global,
    /// Declared inside a function or nested block.
    Local,
    /// A function parameter.
    Parameter,
}

#[derive(Debug, Clone)]
pub struct VariableSymbol {
    pub id: SymbolId,
    pub name: Arc<str>,
    pub kind: VariableKind,
    pub is_read_only: bool,
    pub ty: TypeSymbol,
}

impl VariableSymbol {
    pub fn new(
        name: impl Into<Arc<str>>,
        kind: VariableKind,
        is_read_only: bool,
        ty: TypeSymbol,
    ) -> Arc<VariableSymbol> {
        Arc::new(VariableSymbol {
            id: SymbolId::next(),
            name: name.into(),
            kind,
            is_read_only,
            ty,
        })
    }
}

impl PartialEq for VariableSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for VariableSymbol {}

impl Hash for VariableSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for VariableSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct FunctionSymbol {
    pub id: SymbolId,
    pub name: Arc<str>,
    pub parameters: Vec<Arc<VariableSymbol>>,
    pub return_type: TypeSymbol,
    /// The declaration syntax, kept so bodies can be bound after all
    /// signatures are known. `None` for builtins.
    pub declaration: Option<Arc<FunctionDeclarationSyntax>>,
}

impl FunctionSymbol {
    pub fn new(
        name: impl Into<Arc<str>>,
        parameters: Vec<Arc<VariableSymbol>>,
        return_type: TypeSymbol,
        declaration: Option<Arc<FunctionDeclarationSyntax>>,
    ) -> Arc<FunctionSymbol> {
        Arc::new(FunctionSymbol {
            id: SymbolId::next(),
            name: name.into(),
            parameters,
            return_type,
            declaration,
        })
    }
}

impl PartialEq for FunctionSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FunctionSymbol {}

impl Hash for FunctionSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for FunctionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Anything a name can resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Variable(Arc<VariableSymbol>),
    Function(Arc<FunctionSymbol>),
}

impl Symbol {
    pub fn name(&self) -> &Arc<str> {
        match self {
            Symbol::Variable(v) => &v.name,
            Symbol::Function(f) => &f.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_different_identity() {
        let a = VariableSymbol::new("x", VariableKind::Local, false, TypeSymbol::Int);
        let b = VariableSymbol::new("x", VariableKind::Local, false, TypeSymbol::Int);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_symbol_ids_are_unique() {
        let ids: Vec<_> = (0..100).map(|_| SymbolId::next()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }
}
