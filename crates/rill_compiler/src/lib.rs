//! rill_compiler: the compilation driver.
//!
//! A [`Compilation`] owns one submission's syntax trees and its place in a
//! submission chain. Binding is lazy: the global scope is computed on
//! first use and published once, so concurrent readers agree on a single
//! scope even if several race to compute it.

use rill_binder::Binder;
use rill_bound::{writer, BoundGlobalScope, BoundProgram};
use rill_core::intern::StringInterner;
use rill_core::value::Value;
use rill_diagnostics::{Diagnostic, DiagnosticBag};
use rill_evaluator::{Evaluator, RuntimeFault, Variables};
use rill_symbols::{FunctionSymbol, VariableSymbol};
use rill_syntax::SyntaxTree;
use std::fmt::Write as _;
use std::sync::{Arc, OnceLock};

/// The outcome of evaluating a submission: either diagnostics, or the
/// submission's value.
#[derive(Debug, PartialEq)]
pub struct EvaluationResult {
    pub diagnostics: Vec<Diagnostic>,
    pub value: Option<Value>,
}

pub struct Compilation {
    is_script: bool,
    previous: Option<Arc<Compilation>>,
    syntax_trees: Vec<Arc<SyntaxTree>>,
    interner: StringInterner,
    global_scope: OnceLock<Arc<BoundGlobalScope>>,
}

impl Compilation {
    /// A standalone, whole-program compilation.
    pub fn new(syntax_trees: Vec<Arc<SyntaxTree>>) -> Arc<Compilation> {
        Arc::new(Compilation {
            is_script: false,
            previous: None,
            syntax_trees,
            interner: StringInterner::new(),
            global_scope: OnceLock::new(),
        })
    }

    /// The first submission of an interactive session.
    pub fn new_script(syntax_tree: Arc<SyntaxTree>) -> Arc<Compilation> {
        Arc::new(Compilation {
            is_script: true,
            previous: None,
            syntax_trees: vec![syntax_tree],
            interner: StringInterner::new(),
            global_scope: OnceLock::new(),
        })
    }

    /// Chain a new submission onto this one. Symbols declared here remain
    /// visible; redeclarations in the new submission shadow them.
    pub fn continue_with(self: &Arc<Self>, syntax_tree: Arc<SyntaxTree>) -> Arc<Compilation> {
        Arc::new(Compilation {
            is_script: true,
            previous: Some(Arc::clone(self)),
            syntax_trees: vec![syntax_tree],
            interner: self.interner.clone(),
            global_scope: OnceLock::new(),
        })
    }

    pub fn syntax_trees(&self) -> &[Arc<SyntaxTree>] {
        &self.syntax_trees
    }

    pub fn previous(&self) -> Option<&Arc<Compilation>> {
        self.previous.as_ref()
    }

    /// The bound global scope, computed on first use. If several threads
    /// race here, each computes a candidate and the first to publish
    /// wins; the rest are discarded.
    pub fn global_scope(&self) -> &Arc<BoundGlobalScope> {
        if let Some(scope) = self.global_scope.get() {
            return scope;
        }
        let scope = Arc::new(Binder::bind_global_scope(
            self.is_script,
            self.previous.as_ref().map(|p| p.global_scope()),
            &self.syntax_trees,
            &self.interner,
        ));
        let _ = self.global_scope.set(scope);
        match self.global_scope.get() {
            Some(scope) => scope,
            None => unreachable!("global scope published by set or a racing thread"),
        }
    }

    /// Functions declared by this submission.
    pub fn functions(&self) -> &[Arc<FunctionSymbol>] {
        &self.global_scope().functions
    }

    /// Top-level variables declared by this submission.
    pub fn variables(&self) -> &[Arc<VariableSymbol>] {
        &self.global_scope().variables
    }

    fn program(&self) -> Arc<BoundProgram> {
        let previous = self.previous.as_ref().map(|p| p.program());
        Arc::new(Binder::bind_program(
            self.is_script,
            previous,
            self.global_scope(),
            &self.interner,
        ))
    }

    /// Evaluate this submission. Reports diagnostics without running if
    /// any stage produced them; otherwise runs the lowered program
    /// against the caller's global variable store.
    pub fn evaluate(&self, variables: &mut Variables) -> Result<EvaluationResult, RuntimeFault> {
        let mut diagnostics = DiagnosticBag::new();
        for tree in &self.syntax_trees {
            diagnostics.extend_from_slice(tree.diagnostics());
        }
        diagnostics.extend_from_slice(&self.global_scope().diagnostics);
        if !diagnostics.is_empty() {
            diagnostics.sort();
            return Ok(EvaluationResult {
                diagnostics: diagnostics.into_diagnostics(),
                value: None,
            });
        }

        let program = self.program();
        if !program.diagnostics.is_empty() {
            return Ok(EvaluationResult {
                diagnostics: program.diagnostics.clone(),
                value: None,
            });
        }

        let value = Evaluator::evaluate(&program, variables)?;
        Ok(EvaluationResult {
            diagnostics: Vec::new(),
            value: Some(value),
        })
    }

    /// Render the lowered program as text: each function, then the
    /// top-level statement block.
    pub fn emit_tree(&self) -> String {
        let program = self.program();
        let mut out = String::new();
        for (function, body) in &program.functions {
            let _ = write!(out, "function {}(", function.name);
            for (i, parameter) in function.parameters.iter().enumerate() {
                if i > 0 {
                    let _ = write!(out, ", ");
                }
                let _ = write!(out, "{}: {}", parameter.name, parameter.ty);
            }
            let _ = writeln!(out, "): {}", function.return_type);
            writer::write_block(&mut out, body);
        }
        writer::write_block(&mut out, &program.statement);
        out
    }
}
