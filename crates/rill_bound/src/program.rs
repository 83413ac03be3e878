//! Results of binding: the global scope and the lowered program.

use crate::node::{BoundBlockStatement, BoundStatement};
use indexmap::IndexMap;
use rill_diagnostics::Diagnostic;
use rill_symbols::{FunctionSymbol, VariableSymbol};
use std::sync::Arc;

/// Everything visible at the top level of one submission, chained to the
/// previous submission's scope.
#[derive(Debug)]
pub struct BoundGlobalScope {
    pub previous: Option<Arc<BoundGlobalScope>>,
    pub diagnostics: Vec<Diagnostic>,
    pub functions: Vec<Arc<FunctionSymbol>>,
    pub variables: Vec<Arc<VariableSymbol>>,
    pub statements: Vec<BoundStatement>,
}

/// A fully bound and lowered submission, ready to evaluate. Function bodies
/// declared in earlier submissions are reachable through `previous`.
#[derive(Debug)]
pub struct BoundProgram {
    pub previous: Option<Arc<BoundProgram>>,
    pub diagnostics: Vec<Diagnostic>,
    pub functions: IndexMap<Arc<FunctionSymbol>, BoundBlockStatement>,
    pub statement: BoundBlockStatement,
}

impl BoundProgram {
    /// Look up a function body, walking the submission chain from newest
    /// to oldest.
    pub fn function_body(&self, function: &Arc<FunctionSymbol>) -> Option<&BoundBlockStatement> {
        let mut program = Some(self);
        while let Some(p) = program {
            if let Some(body) = p.functions.get(function) {
                return Some(body);
            }
            program = p.previous.as_deref();
        }
        None
    }
}
