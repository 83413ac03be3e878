//! The binder.
//!
//! Binding never stops at the first error: failed expressions bind to an
//! error placeholder whose `Error` type silences follow-on diagnostics,
//! so one pass reports each distinct mistake once.

use crate::scope::BoundScope;
use indexmap::IndexMap;
use rill_bound::{
    BoundAssignmentExpression, BoundBinaryExpression, BoundBinaryOperator, BoundBlockStatement,
    BoundCallExpression, BoundConditionalGotoStatement, BoundConversionExpression,
    BoundDoWhileStatement, BoundExpression, BoundExpressionStatement, BoundForStatement,
    BoundGlobalScope, BoundIfStatement, BoundProgram, BoundReturnStatement, BoundStatement,
    BoundUnaryExpression, BoundUnaryOperator, BoundVariableDeclaration, BoundVariableExpression,
    BoundWhileStatement, Conversion,
};
use rill_core::intern::StringInterner;
use rill_core::text::TextSpan;
use rill_diagnostics::DiagnosticBag;
use rill_flow::ControlFlowGraph;
use rill_lowering::Lowerer;
use rill_symbols::{builtins, FunctionSymbol, Symbol, TypeSymbol, VariableKind, VariableSymbol};
use rill_syntax::ast::*;
use rill_syntax::{SyntaxKind, SyntaxToken, SyntaxTree};
use rustc_hash::FxHashSet;
use std::sync::Arc;

pub struct Binder {
    is_script: bool,
    interner: StringInterner,
    scope: BoundScope,
    diagnostics: DiagnosticBag,
    /// The function whose body is being bound; `None` at the top level.
    function: Option<Arc<FunctionSymbol>>,
    /// Nesting depth below the submission scope. Declarations at depth 0
    /// are recorded in the global scope.
    scope_depth: u32,
    declared_functions: Vec<Arc<FunctionSymbol>>,
    declared_variables: Vec<Arc<VariableSymbol>>,
}

impl Binder {
    fn new(
        is_script: bool,
        interner: &StringInterner,
        scope: BoundScope,
        function: Option<Arc<FunctionSymbol>>,
    ) -> Self {
        Self {
            is_script,
            interner: interner.clone(),
            scope,
            diagnostics: DiagnosticBag::new(),
            function,
            scope_depth: 0,
            declared_functions: Vec::new(),
            declared_variables: Vec::new(),
        }
    }

    /// Bind one submission's declarations and top-level statements against
    /// the chain of earlier submissions.
    pub fn bind_global_scope(
        is_script: bool,
        previous: Option<&Arc<BoundGlobalScope>>,
        trees: &[Arc<SyntaxTree>],
        interner: &StringInterner,
    ) -> BoundGlobalScope {
        let parent = create_parent_scope(previous, interner);
        let mut binder = Binder::new(is_script, interner, BoundScope::with_parent(parent), None);

        // Function signatures are declared before any statement binds, so
        // forward references and mutual recursion work.
        for tree in trees {
            for member in &tree.root().members {
                if let MemberSyntax::Function(function) = member {
                    binder.bind_function_declaration(function);
                }
            }
        }

        let mut statements = Vec::new();
        for tree in trees {
            for member in &tree.root().members {
                if let MemberSyntax::GlobalStatement(global) = member {
                    statements.push(binder.bind_statement(&global.statement));
                }
            }
        }

        BoundGlobalScope {
            previous: previous.cloned(),
            diagnostics: binder.diagnostics.into_diagnostics(),
            functions: binder.declared_functions,
            variables: binder.declared_variables,
            statements,
        }
    }

    /// Bind and lower the function bodies of one submission, then lower
    /// its top-level statements into the executable program.
    pub fn bind_program(
        is_script: bool,
        previous: Option<Arc<BoundProgram>>,
        global_scope: &Arc<BoundGlobalScope>,
        interner: &StringInterner,
    ) -> BoundProgram {
        let mut parent = create_parent_scope(Some(global_scope), interner);
        let mut diagnostics = DiagnosticBag::new();
        let mut functions = IndexMap::new();

        for function in &global_scope.functions {
            let Some(declaration) = function.declaration.clone() else {
                continue;
            };
            let mut binder = Binder::new(
                is_script,
                interner,
                BoundScope::with_parent(parent),
                Some(Arc::clone(function)),
            );
            for parameter in &function.parameters {
                let key = interner.intern(&parameter.name);
                binder.scope.try_declare_variable(key, Arc::clone(parameter));
            }

            let body = binder.bind_block_statement(&declaration.body);
            let lowered = Lowerer::lower(BoundStatement::Block(body));
            if function.return_type != TypeSymbol::Void
                && !ControlFlowGraph::all_paths_return(&lowered)
            {
                binder
                    .diagnostics
                    .report_all_paths_must_return(declaration.identifier.span);
            }
            functions.insert(Arc::clone(function), lowered);
            diagnostics.extend(binder.diagnostics);
            parent = binder.scope.into_parent();
        }

        let statement = Lowerer::lower(BoundStatement::Block(BoundBlockStatement {
            statements: global_scope.statements.clone(),
        }));

        BoundProgram {
            previous,
            diagnostics: diagnostics.into_diagnostics(),
            functions,
            statement,
        }
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn bind_function_declaration(&mut self, syntax: &Arc<FunctionDeclarationSyntax>) {
        let mut parameters = Vec::new();
        let mut seen = FxHashSet::default();
        for parameter in &syntax.parameters {
            let ty = self.bind_type_clause(&parameter.type_clause);
            let name = parameter.identifier.text.clone();
            if !seen.insert(self.interner.intern(&name)) {
                self.diagnostics
                    .report_parameter_already_declared(parameter.span(), &name);
                continue;
            }
            parameters.push(VariableSymbol::new(name, VariableKind::Parameter, true, ty));
        }

        let return_type = syntax
            .type_clause
            .as_ref()
            .map(|clause| self.bind_type_clause(clause))
            .unwrap_or(TypeSymbol::Void);

        let function = FunctionSymbol::new(
            syntax.identifier.text.clone(),
            parameters,
            return_type,
            Some(Arc::clone(syntax)),
        );

        if syntax.identifier.is_missing() {
            return;
        }
        let key = self.interner.intern(&syntax.identifier.text);
        if self.scope.try_declare_function(key, Arc::clone(&function)) {
            self.declared_functions.push(function);
        } else {
            self.diagnostics
                .report_function_already_declared(syntax.identifier.span, &syntax.identifier.text);
        }
    }

    fn bind_type_clause(&mut self, syntax: &TypeClauseSyntax) -> TypeSymbol {
        match TypeSymbol::lookup(&syntax.identifier.text) {
            Some(ty) => ty,
            None => {
                if !syntax.identifier.is_missing() {
                    self.diagnostics
                        .report_undefined_type(syntax.identifier.span, &syntax.identifier.text);
                }
                TypeSymbol::Error
            }
        }
    }

    fn bind_variable(
        &mut self,
        identifier: &SyntaxToken,
        is_read_only: bool,
        ty: TypeSymbol,
    ) -> Arc<VariableSymbol> {
        let name: &str = if identifier.text.is_empty() {
            "?"
        } else {
            &identifier.text
        };
        let kind = if self.function.is_none() {
            VariableKind::Global
        } else {
            VariableKind::Local
        };
        let variable = VariableSymbol::new(name, kind, is_read_only, ty);

        if !identifier.is_missing() {
            let key = self.interner.intern(&identifier.text);
            if self.scope.try_declare_variable(key, Arc::clone(&variable)) {
                if self.function.is_none() && self.scope_depth == 0 {
                    self.declared_variables.push(Arc::clone(&variable));
                }
            } else {
                self.diagnostics
                    .report_variable_already_declared(identifier.span, &identifier.text);
            }
        }
        variable
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn bind_statement(&mut self, syntax: &StatementSyntax) -> BoundStatement {
        match syntax {
            StatementSyntax::Block(s) => BoundStatement::Block(self.bind_block_statement(s)),
            StatementSyntax::VariableDeclaration(s) => self.bind_variable_declaration(s),
            StatementSyntax::If(s) => self.bind_if_statement(s),
            StatementSyntax::While(s) => self.bind_while_statement(s),
            StatementSyntax::DoWhile(s) => self.bind_do_while_statement(s),
            StatementSyntax::For(s) => self.bind_for_statement(s),
            StatementSyntax::Return(s) => self.bind_return_statement(s),
            StatementSyntax::Expression(s) => {
                BoundStatement::Expression(BoundExpressionStatement {
                    expression: self.bind_expression_internal(&s.expression, true),
                })
            }
        }
    }

    fn bind_block_statement(&mut self, syntax: &BlockStatementSyntax) -> BoundBlockStatement {
        self.push_scope();
        let statements = syntax
            .statements
            .iter()
            .map(|s| self.bind_statement(s))
            .collect();
        self.pop_scope();
        BoundBlockStatement { statements }
    }

    fn bind_variable_declaration(&mut self, syntax: &VariableDeclarationSyntax) -> BoundStatement {
        let is_read_only = syntax.keyword.kind == SyntaxKind::LetKeyword;
        let declared_type = syntax
            .type_clause
            .as_ref()
            .map(|clause| self.bind_type_clause(clause));
        let initializer = self.bind_expression(&syntax.initializer);
        let variable_type = declared_type.unwrap_or_else(|| initializer.ty());
        let initializer =
            self.bind_conversion(syntax.initializer.span(), initializer, variable_type, false);
        let variable = self.bind_variable(&syntax.identifier, is_read_only, variable_type);
        BoundStatement::VariableDeclaration(BoundVariableDeclaration {
            variable,
            initializer,
        })
    }

    fn bind_if_statement(&mut self, syntax: &IfStatementSyntax) -> BoundStatement {
        let condition = self.bind_converted_expression(&syntax.condition, TypeSymbol::Bool);
        let then_statement = Box::new(self.bind_statement(&syntax.then_statement));
        let else_statement = syntax
            .else_clause
            .as_ref()
            .map(|clause| Box::new(self.bind_statement(&clause.else_statement)));
        BoundStatement::If(BoundIfStatement {
            condition,
            then_statement,
            else_statement,
        })
    }

    fn bind_while_statement(&mut self, syntax: &WhileStatementSyntax) -> BoundStatement {
        let condition = self.bind_converted_expression(&syntax.condition, TypeSymbol::Bool);
        let body = Box::new(self.bind_statement(&syntax.body));
        BoundStatement::While(BoundWhileStatement { condition, body })
    }

    fn bind_do_while_statement(&mut self, syntax: &DoWhileStatementSyntax) -> BoundStatement {
        let body = Box::new(self.bind_statement(&syntax.body));
        let condition = self.bind_converted_expression(&syntax.condition, TypeSymbol::Bool);
        BoundStatement::DoWhile(BoundDoWhileStatement { body, condition })
    }

    fn bind_for_statement(&mut self, syntax: &ForStatementSyntax) -> BoundStatement {
        let lower_bound = self.bind_converted_expression(&syntax.lower_bound, TypeSymbol::Int);
        let upper_bound = self.bind_converted_expression(&syntax.upper_bound, TypeSymbol::Int);

        self.push_scope();
        let variable = self.bind_variable(&syntax.identifier, true, TypeSymbol::Int);
        let body = Box::new(self.bind_statement(&syntax.body));
        self.pop_scope();

        BoundStatement::For(BoundForStatement {
            variable,
            lower_bound,
            upper_bound,
            body,
        })
    }

    fn bind_return_statement(&mut self, syntax: &ReturnStatementSyntax) -> BoundStatement {
        let function = self.function.clone();
        let expression = match (&syntax.expression, &function) {
            (None, None) => {
                if !self.is_script {
                    self.diagnostics
                        .report_invalid_return(syntax.return_keyword.span);
                }
                None
            }
            (Some(expression), None) => {
                let bound = self.bind_expression(expression);
                if !self.is_script {
                    self.diagnostics
                        .report_invalid_return(syntax.return_keyword.span);
                }
                Some(bound)
            }
            (None, Some(function)) => {
                if function.return_type != TypeSymbol::Void {
                    self.diagnostics.report_missing_return_expression(
                        syntax.return_keyword.span,
                        function.return_type,
                    );
                }
                None
            }
            (Some(expression), Some(function)) => {
                let bound = self.bind_expression(expression);
                if function.return_type == TypeSymbol::Void {
                    self.diagnostics
                        .report_invalid_return_expression(expression.span(), &function.name);
                    Some(bound)
                } else {
                    Some(self.bind_conversion(
                        expression.span(),
                        bound,
                        function.return_type,
                        false,
                    ))
                }
            }
        };
        BoundStatement::Return(BoundReturnStatement { expression })
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn bind_expression(&mut self, syntax: &ExpressionSyntax) -> BoundExpression {
        self.bind_expression_internal(syntax, false)
    }

    fn bind_expression_internal(
        &mut self,
        syntax: &ExpressionSyntax,
        can_be_void: bool,
    ) -> BoundExpression {
        let result = self.bind_expression_core(syntax);
        if !can_be_void && result.ty() == TypeSymbol::Void {
            self.diagnostics
                .report_expression_must_have_value(syntax.span());
            return BoundExpression::Error;
        }
        result
    }

    fn bind_converted_expression(
        &mut self,
        syntax: &ExpressionSyntax,
        target: TypeSymbol,
    ) -> BoundExpression {
        let bound = self.bind_expression(syntax);
        self.bind_conversion(syntax.span(), bound, target, false)
    }

    fn bind_conversion(
        &mut self,
        span: TextSpan,
        expression: BoundExpression,
        target: TypeSymbol,
        allow_explicit: bool,
    ) -> BoundExpression {
        let from = expression.ty();
        let conversion = Conversion::classify(from, target);
        if !conversion.exists {
            if from != TypeSymbol::Error && target != TypeSymbol::Error {
                self.diagnostics.report_cannot_convert(span, from, target);
            }
            return BoundExpression::Error;
        }
        if !allow_explicit && conversion.is_explicit() {
            self.diagnostics.report_cannot_convert(span, from, target);
        }
        if conversion.is_identity {
            return expression;
        }
        BoundExpression::Conversion(BoundConversionExpression {
            ty: target,
            expression: Box::new(expression),
        })
    }

    fn bind_expression_core(&mut self, syntax: &ExpressionSyntax) -> BoundExpression {
        match syntax {
            ExpressionSyntax::Literal(e) => BoundExpression::literal(e.value.clone()),
            ExpressionSyntax::Name(e) => self.bind_name_expression(e),
            ExpressionSyntax::Assignment(e) => self.bind_assignment_expression(e),
            ExpressionSyntax::Unary(e) => self.bind_unary_expression(e),
            ExpressionSyntax::Binary(e) => self.bind_binary_expression(e),
            ExpressionSyntax::Parenthesized(e) => self.bind_expression(&e.expression),
            ExpressionSyntax::Call(e) => self.bind_call_expression(e),
        }
    }

    fn bind_name_expression(&mut self, syntax: &NameExpressionSyntax) -> BoundExpression {
        if syntax.identifier.is_missing() {
            // The parser already reported the missing identifier.
            return BoundExpression::Error;
        }
        match self.lookup_symbol(&syntax.identifier.text) {
            Some(Symbol::Variable(variable)) => {
                BoundExpression::Variable(BoundVariableExpression { variable })
            }
            Some(Symbol::Function(_)) => {
                self.diagnostics
                    .report_not_a_variable(syntax.identifier.span, &syntax.identifier.text);
                BoundExpression::Error
            }
            None => {
                self.diagnostics
                    .report_undefined_variable(syntax.identifier.span, &syntax.identifier.text);
                BoundExpression::Error
            }
        }
    }

    fn bind_assignment_expression(
        &mut self,
        syntax: &AssignmentExpressionSyntax,
    ) -> BoundExpression {
        let bound = self.bind_expression(&syntax.expression);
        let variable = match self.lookup_symbol(&syntax.identifier.text) {
            Some(Symbol::Variable(variable)) => variable,
            Some(Symbol::Function(_)) => {
                self.diagnostics
                    .report_not_a_variable(syntax.identifier.span, &syntax.identifier.text);
                return bound;
            }
            None => {
                self.diagnostics
                    .report_undefined_variable(syntax.identifier.span, &syntax.identifier.text);
                return bound;
            }
        };
        if variable.is_read_only {
            self.diagnostics
                .report_cannot_assign(syntax.equals_token.span, &syntax.identifier.text);
        }
        let expression = self.bind_conversion(syntax.expression.span(), bound, variable.ty, false);
        BoundExpression::Assignment(BoundAssignmentExpression {
            variable,
            expression: Box::new(expression),
        })
    }

    fn bind_unary_expression(&mut self, syntax: &UnaryExpressionSyntax) -> BoundExpression {
        let operand = self.bind_expression(&syntax.operand);
        if operand.ty().is_error() {
            return BoundExpression::Error;
        }
        match BoundUnaryOperator::bind(syntax.operator.kind, operand.ty()) {
            Some(operator) => BoundExpression::Unary(BoundUnaryExpression {
                operator,
                operand: Box::new(operand),
            }),
            None => {
                self.diagnostics.report_undefined_unary_operator(
                    syntax.operator.span,
                    &syntax.operator.text,
                    operand.ty(),
                );
                BoundExpression::Error
            }
        }
    }

    fn bind_binary_expression(&mut self, syntax: &BinaryExpressionSyntax) -> BoundExpression {
        let left = self.bind_expression(&syntax.left);
        let right = self.bind_expression(&syntax.right);
        if left.ty().is_error() || right.ty().is_error() {
            return BoundExpression::Error;
        }
        match BoundBinaryOperator::bind(syntax.operator.kind, left.ty(), right.ty()) {
            Some(operator) => BoundExpression::Binary(BoundBinaryExpression {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            }),
            None => {
                self.diagnostics.report_undefined_binary_operator(
                    syntax.operator.span,
                    &syntax.operator.text,
                    left.ty(),
                    right.ty(),
                );
                BoundExpression::Error
            }
        }
    }

    fn bind_call_expression(&mut self, syntax: &CallExpressionSyntax) -> BoundExpression {
        // A call of a type name with one argument is an explicit conversion.
        if syntax.arguments.len() == 1 {
            if let Some(ty) = TypeSymbol::lookup(&syntax.identifier.text) {
                let bound = self.bind_expression(&syntax.arguments[0]);
                return self.bind_conversion(syntax.arguments[0].span(), bound, ty, true);
            }
        }

        let arguments: Vec<BoundExpression> = syntax
            .arguments
            .iter()
            .map(|argument| self.bind_expression(argument))
            .collect();

        let function = match self.lookup_symbol(&syntax.identifier.text) {
            Some(Symbol::Function(function)) => function,
            Some(Symbol::Variable(_)) => {
                self.diagnostics
                    .report_not_a_function(syntax.identifier.span, &syntax.identifier.text);
                return BoundExpression::Error;
            }
            None => {
                self.diagnostics
                    .report_undefined_function(syntax.identifier.span, &syntax.identifier.text);
                return BoundExpression::Error;
            }
        };

        if arguments.len() != function.parameters.len() {
            let span = syntax.identifier.span.union(&syntax.close_paren.span);
            self.diagnostics.report_wrong_argument_count(
                span,
                &function.name,
                function.parameters.len(),
                arguments.len(),
            );
            return BoundExpression::Error;
        }

        let mut converted = Vec::with_capacity(arguments.len());
        for ((argument_syntax, argument), parameter) in syntax
            .arguments
            .iter()
            .zip(arguments)
            .zip(function.parameters.clone())
        {
            converted.push(self.bind_conversion(
                argument_syntax.span(),
                argument,
                parameter.ty,
                false,
            ));
        }

        BoundExpression::Call(BoundCallExpression {
            function,
            arguments: converted,
        })
    }

    // ========================================================================
    // Scope plumbing
    // ========================================================================

    fn push_scope(&mut self) {
        let parent = std::mem::take(&mut self.scope);
        self.scope = BoundScope::with_parent(parent);
        self.scope_depth += 1;
    }

    fn pop_scope(&mut self) {
        self.scope = std::mem::take(&mut self.scope).into_parent();
        self.scope_depth -= 1;
    }

    fn lookup_symbol(&self, name: &str) -> Option<Symbol> {
        let key = self.interner.get(name)?;
        self.scope.lookup(key).cloned()
    }
}

/// Rebuild the scope chain for a submission: builtins at the root, then
/// one scope per earlier submission, oldest outermost. A name redeclared
/// in a later submission shadows the earlier one.
fn create_parent_scope(
    previous: Option<&Arc<BoundGlobalScope>>,
    interner: &StringInterner,
) -> BoundScope {
    let mut chain = Vec::new();
    let mut current = previous;
    while let Some(submission) = current {
        chain.push(Arc::clone(submission));
        current = submission.previous.as_ref();
    }

    let mut scope = BoundScope::new();
    for builtin in builtins::all() {
        scope.try_declare_function(interner.intern(&builtin.name), Arc::clone(builtin));
    }

    for submission in chain.iter().rev() {
        let mut child = BoundScope::with_parent(scope);
        for function in &submission.functions {
            child.try_declare_function(interner.intern(&function.name), Arc::clone(function));
        }
        for variable in &submission.variables {
            child.try_declare_variable(interner.intern(&variable.name), Arc::clone(variable));
        }
        scope = child;
    }
    scope
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(text: &str) -> BoundGlobalScope {
        let tree = SyntaxTree::parse(text);
        assert!(tree.diagnostics().is_empty(), "syntax errors: {:?}", tree.diagnostics());
        let interner = StringInterner::new();
        Binder::bind_global_scope(true, None, &[tree], &interner)
    }

    fn bind_messages(text: &str) -> Vec<String> {
        bind(text).diagnostics.into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn test_bind_clean_program() {
        let scope = bind("var x = 10 x + 1");
        assert!(scope.diagnostics.is_empty());
        assert_eq!(scope.variables.len(), 1);
        assert_eq!(scope.statements.len(), 2);
    }

    #[test]
    fn test_undefined_variable() {
        assert_eq!(bind_messages("y + 1"), vec!["Variable 'y' does not exist."]);
    }

    #[test]
    fn test_undefined_variable_reported_once() {
        // The error placeholder suppresses the cascading operator error.
        assert_eq!(bind_messages("y * true"), vec!["Variable 'y' does not exist."]);
    }

    #[test]
    fn test_redeclaration() {
        assert_eq!(
            bind_messages("var x = 1 var x = 2"),
            vec!["Variable 'x' is already declared."]
        );
    }

    #[test]
    fn test_assignment_to_read_only() {
        assert_eq!(
            bind_messages("let x = 1 x = 2"),
            vec!["Variable 'x' is read-only and cannot be assigned to."]
        );
    }

    #[test]
    fn test_undefined_binary_operator() {
        assert_eq!(
            bind_messages("1 * true"),
            vec!["Binary operator '*' is not defined for types 'Int' and 'Bool'."]
        );
    }

    #[test]
    fn test_condition_requires_bool() {
        assert_eq!(
            bind_messages("if 1 { }"),
            vec!["Cannot convert type 'Int' to 'Bool'."]
        );
    }

    #[test]
    fn test_block_scope_shadowing() {
        let scope = bind("var x = 1 { var x = 2 x } x");
        assert!(scope.diagnostics.is_empty());
        // Only the outer declaration is visible at the top level.
        assert_eq!(scope.variables.len(), 1);
    }

    #[test]
    fn test_function_forward_reference() {
        let scope = bind("even(4) function even(n: Int): Bool { return n == 0 || odd(n - 1) } function odd(n: Int): Bool { return n != 0 && even(n - 1) }");
        assert!(scope.diagnostics.is_empty());
        assert_eq!(scope.functions.len(), 2);
    }

    #[test]
    fn test_all_paths_must_return() {
        let tree = SyntaxTree::parse(
            "function f(n: Int): Int { if n > 0 { return 1 } }",
        );
        let interner = StringInterner::new();
        let scope = Arc::new(Binder::bind_global_scope(true, None, &[tree], &interner));
        assert!(scope.diagnostics.is_empty());
        let program = Binder::bind_program(true, None, &scope, &interner);
        assert_eq!(
            program.diagnostics[0].message,
            "All paths must return a value."
        );
    }

    #[test]
    fn test_explicit_conversion_via_type_call() {
        let scope = bind("let text = String(42)");
        assert!(scope.diagnostics.is_empty());
        assert_eq!(scope.variables[0].ty, TypeSymbol::String);
    }

    #[test]
    fn test_implicit_string_conversion_rejected() {
        assert_eq!(
            bind_messages("var s = \"a\" s = 1"),
            vec!["Cannot convert type 'Int' to 'String'."]
        );
    }

    #[test]
    fn test_wrong_argument_count() {
        assert_eq!(
            bind_messages("print()"),
            vec!["Function 'print' requires 1 arguments but was given 0."]
        );
    }

    #[test]
    fn test_cross_submission_shadowing() {
        let interner = StringInterner::new();
        let first = SyntaxTree::parse("var x = 1");
        let first_scope =
            Arc::new(Binder::bind_global_scope(true, None, &[first], &interner));
        assert!(first_scope.diagnostics.is_empty());

        let second = SyntaxTree::parse("var x = \"hello\" x");
        let second_scope =
            Binder::bind_global_scope(true, Some(&first_scope), &[second], &interner);
        assert!(second_scope.diagnostics.is_empty());
        assert_eq!(second_scope.variables[0].ty, TypeSymbol::String);
    }
}
