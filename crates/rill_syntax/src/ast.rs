//! Syntax tree nodes.
//!
//! Nodes own their tokens so every node can report its full source span.
//! Function declarations are `Arc`-shared because function symbols keep a
//! handle to their declaration for late body binding.

use crate::token::SyntaxToken;
use rill_core::text::TextSpan;
use rill_core::value::Value;
use std::sync::Arc;

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone)]
pub enum ExpressionSyntax {
    Literal(LiteralExpressionSyntax),
    Name(NameExpressionSyntax),
    Assignment(AssignmentExpressionSyntax),
    Unary(UnaryExpressionSyntax),
    Binary(BinaryExpressionSyntax),
    Parenthesized(ParenthesizedExpressionSyntax),
    Call(CallExpressionSyntax),
}

impl ExpressionSyntax {
    pub fn span(&self) -> TextSpan {
        match self {
            ExpressionSyntax::Literal(e) => e.literal_token.span,
            ExpressionSyntax::Name(e) => e.identifier.span,
            ExpressionSyntax::Assignment(e) => e.identifier.span.union(&e.expression.span()),
            ExpressionSyntax::Unary(e) => e.operator.span.union(&e.operand.span()),
            ExpressionSyntax::Binary(e) => e.left.span().union(&e.right.span()),
            ExpressionSyntax::Parenthesized(e) => e.open_paren.span.union(&e.close_paren.span),
            ExpressionSyntax::Call(e) => e.identifier.span.union(&e.close_paren.span),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LiteralExpressionSyntax {
    pub literal_token: SyntaxToken,
    pub value: Value,
}

#[derive(Debug, Clone)]
pub struct NameExpressionSyntax {
    pub identifier: SyntaxToken,
}

#[derive(Debug, Clone)]
pub struct AssignmentExpressionSyntax {
    pub identifier: SyntaxToken,
    pub equals_token: SyntaxToken,
    pub expression: Box<ExpressionSyntax>,
}

#[derive(Debug, Clone)]
pub struct UnaryExpressionSyntax {
    pub operator: SyntaxToken,
    pub operand: Box<ExpressionSyntax>,
}

#[derive(Debug, Clone)]
pub struct BinaryExpressionSyntax {
    pub left: Box<ExpressionSyntax>,
    pub operator: SyntaxToken,
    pub right: Box<ExpressionSyntax>,
}

#[derive(Debug, Clone)]
pub struct ParenthesizedExpressionSyntax {
    pub open_paren: SyntaxToken,
    pub expression: Box<ExpressionSyntax>,
    pub close_paren: SyntaxToken,
}

#[derive(Debug, Clone)]
pub struct CallExpressionSyntax {
    pub identifier: SyntaxToken,
    pub open_paren: SyntaxToken,
    pub arguments: Vec<ExpressionSyntax>,
    pub close_paren: SyntaxToken,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone)]
pub enum StatementSyntax {
    Block(BlockStatementSyntax),
    VariableDeclaration(VariableDeclarationSyntax),
    If(IfStatementSyntax),
    While(WhileStatementSyntax),
    DoWhile(DoWhileStatementSyntax),
    For(ForStatementSyntax),
    Return(ReturnStatementSyntax),
    Expression(ExpressionStatementSyntax),
}

impl StatementSyntax {
    pub fn span(&self) -> TextSpan {
        match self {
            StatementSyntax::Block(s) => s.open_brace.span.union(&s.close_brace.span),
            StatementSyntax::VariableDeclaration(s) => {
                s.keyword.span.union(&s.initializer.span())
            }
            StatementSyntax::If(s) => {
                let end = match &s.else_clause {
                    Some(e) => e.else_statement.span(),
                    None => s.then_statement.span(),
                };
                s.if_keyword.span.union(&end)
            }
            StatementSyntax::While(s) => s.while_keyword.span.union(&s.body.span()),
            StatementSyntax::DoWhile(s) => s.do_keyword.span.union(&s.condition.span()),
            StatementSyntax::For(s) => s.for_keyword.span.union(&s.body.span()),
            StatementSyntax::Return(s) => {
                let end = match &s.expression {
                    Some(e) => e.span(),
                    None => s.return_keyword.span,
                };
                s.return_keyword.span.union(&end)
            }
            StatementSyntax::Expression(s) => s.expression.span(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlockStatementSyntax {
    pub open_brace: SyntaxToken,
    pub statements: Vec<StatementSyntax>,
    pub close_brace: SyntaxToken,
}

#[derive(Debug, Clone)]
pub struct TypeClauseSyntax {
    pub colon_token: SyntaxToken,
    pub identifier: SyntaxToken,
}

#[derive(Debug, Clone)]
pub struct VariableDeclarationSyntax {
    /// `var` or `let`.
    pub keyword: SyntaxToken,
    pub identifier: SyntaxToken,
    pub type_clause: Option<TypeClauseSyntax>,
    pub equals_token: SyntaxToken,
    pub initializer: ExpressionSyntax,
}

#[derive(Debug, Clone)]
pub struct IfStatementSyntax {
    pub if_keyword: SyntaxToken,
    pub condition: ExpressionSyntax,
    pub then_statement: Box<StatementSyntax>,
    pub else_clause: Option<ElseClauseSyntax>,
}

#[derive(Debug, Clone)]
pub struct ElseClauseSyntax {
    pub else_keyword: SyntaxToken,
    pub else_statement: Box<StatementSyntax>,
}

#[derive(Debug, Clone)]
pub struct WhileStatementSyntax {
    pub while_keyword: SyntaxToken,
    pub condition: ExpressionSyntax,
    pub body: Box<StatementSyntax>,
}

#[derive(Debug, Clone)]
pub struct DoWhileStatementSyntax {
    pub do_keyword: SyntaxToken,
    pub body: Box<StatementSyntax>,
    pub while_keyword: SyntaxToken,
    pub condition: ExpressionSyntax,
}

#[derive(Debug, Clone)]
pub struct ForStatementSyntax {
    pub for_keyword: SyntaxToken,
    pub identifier: SyntaxToken,
    pub equals_token: SyntaxToken,
    pub lower_bound: ExpressionSyntax,
    pub to_keyword: SyntaxToken,
    pub upper_bound: ExpressionSyntax,
    pub body: Box<StatementSyntax>,
}

#[derive(Debug, Clone)]
pub struct ReturnStatementSyntax {
    pub return_keyword: SyntaxToken,
    pub expression: Option<ExpressionSyntax>,
}

#[derive(Debug, Clone)]
pub struct ExpressionStatementSyntax {
    pub expression: ExpressionSyntax,
}

// ============================================================================
// Top-level members
// ============================================================================

#[derive(Debug, Clone)]
pub struct ParameterSyntax {
    pub identifier: SyntaxToken,
    pub type_clause: TypeClauseSyntax,
}

impl ParameterSyntax {
    pub fn span(&self) -> TextSpan {
        self.identifier.span.union(&self.type_clause.identifier.span)
    }
}

#[derive(Debug, Clone)]
pub struct FunctionDeclarationSyntax {
    pub function_keyword: SyntaxToken,
    pub identifier: SyntaxToken,
    pub open_paren: SyntaxToken,
    pub parameters: Vec<ParameterSyntax>,
    pub close_paren: SyntaxToken,
    pub type_clause: Option<TypeClauseSyntax>,
    pub body: BlockStatementSyntax,
}

#[derive(Debug, Clone)]
pub struct GlobalStatementSyntax {
    pub statement: StatementSyntax,
}

#[derive(Debug, Clone)]
pub enum MemberSyntax {
    Function(Arc<FunctionDeclarationSyntax>),
    GlobalStatement(GlobalStatementSyntax),
}

#[derive(Debug, Clone)]
pub struct CompilationUnitSyntax {
    pub members: Vec<MemberSyntax>,
    pub eof_token: SyntaxToken,
}
