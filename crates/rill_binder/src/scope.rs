//! Lexical scopes.
//!
//! Scopes form a parent chain keyed by interned names. Declaring fails if
//! the name is already taken in the *same* scope; lookups walk outward, so
//! an inner declaration shadows an outer one.

use rill_core::intern::InternedString;
use rill_symbols::{FunctionSymbol, Symbol, VariableSymbol};
use rustc_hash::FxHashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct BoundScope {
    parent: Option<Box<BoundScope>>,
    symbols: FxHashMap<InternedString, Symbol>,
}

impl BoundScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: BoundScope) -> Self {
        Self {
            parent: Some(Box::new(parent)),
            symbols: FxHashMap::default(),
        }
    }

    /// Detach and return the parent scope. Panics if called on the root;
    /// the binder only pops scopes it pushed.
    pub fn into_parent(self) -> BoundScope {
        match self.parent {
            Some(parent) => *parent,
            None => unreachable!("popped the root scope"),
        }
    }

    pub fn try_declare_variable(
        &mut self,
        name: InternedString,
        variable: Arc<VariableSymbol>,
    ) -> bool {
        self.try_declare(name, Symbol::Variable(variable))
    }

    pub fn try_declare_function(
        &mut self,
        name: InternedString,
        function: Arc<FunctionSymbol>,
    ) -> bool {
        self.try_declare(name, Symbol::Function(function))
    }

    fn try_declare(&mut self, name: InternedString, symbol: Symbol) -> bool {
        if self.symbols.contains_key(&name) {
            return false;
        }
        self.symbols.insert(name, symbol);
        true
    }

    /// Look up a name, walking the parent chain.
    pub fn lookup(&self, name: InternedString) -> Option<&Symbol> {
        if let Some(symbol) = self.symbols.get(&name) {
            return Some(symbol);
        }
        self.parent.as_ref()?.lookup(name)
    }
}
