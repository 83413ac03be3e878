//! Bound expression and statement nodes.

use crate::label::BoundLabel;
use crate::ops::{BoundBinaryOperator, BoundUnaryOperator};
use rill_core::value::Value;
use rill_symbols::{FunctionSymbol, TypeSymbol, VariableSymbol};
use std::sync::Arc;

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone)]
pub enum BoundExpression {
    /// Placeholder for an expression that failed to bind. Its type is
    /// `Error`, which suppresses follow-on diagnostics.
    Error,
    Literal(BoundLiteralExpression),
    Variable(BoundVariableExpression),
    Assignment(BoundAssignmentExpression),
    Unary(BoundUnaryExpression),
    Binary(BoundBinaryExpression),
    Call(BoundCallExpression),
    Conversion(BoundConversionExpression),
}

impl BoundExpression {
    pub fn ty(&self) -> TypeSymbol {
        match self {
            BoundExpression::Error => TypeSymbol::Error,
            BoundExpression::Literal(e) => e.ty,
            BoundExpression::Variable(e) => e.variable.ty,
            BoundExpression::Assignment(e) => e.expression.ty(),
            BoundExpression::Unary(e) => e.operator.result_type,
            BoundExpression::Binary(e) => e.operator.result_type,
            BoundExpression::Call(e) => e.function.return_type,
            BoundExpression::Conversion(e) => e.ty,
        }
    }

    pub fn literal(value: Value) -> BoundExpression {
        let ty = TypeSymbol::of(&value);
        BoundExpression::Literal(BoundLiteralExpression { value, ty })
    }

    /// The constant value of this expression, if it is a literal.
    pub fn constant_value(&self) -> Option<&Value> {
        match self {
            BoundExpression::Literal(e) => Some(&e.value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoundLiteralExpression {
    pub value: Value,
    pub ty: TypeSymbol,
}

#[derive(Debug, Clone)]
pub struct BoundVariableExpression {
    pub variable: Arc<VariableSymbol>,
}

#[derive(Debug, Clone)]
pub struct BoundAssignmentExpression {
    pub variable: Arc<VariableSymbol>,
    pub expression: Box<BoundExpression>,
}

#[derive(Debug, Clone)]
pub struct BoundUnaryExpression {
    pub operator: &'static BoundUnaryOperator,
    pub operand: Box<BoundExpression>,
}

#[derive(Debug, Clone)]
pub struct BoundBinaryExpression {
    pub left: Box<BoundExpression>,
    pub operator: &'static BoundBinaryOperator,
    pub right: Box<BoundExpression>,
}

#[derive(Debug, Clone)]
pub struct BoundCallExpression {
    pub function: Arc<FunctionSymbol>,
    pub arguments: Vec<BoundExpression>,
}

#[derive(Debug, Clone)]
pub struct BoundConversionExpression {
    pub ty: TypeSymbol,
    pub expression: Box<BoundExpression>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone)]
pub enum BoundStatement {
    Block(BoundBlockStatement),
    VariableDeclaration(BoundVariableDeclaration),
    If(BoundIfStatement),
    While(BoundWhileStatement),
    DoWhile(BoundDoWhileStatement),
    For(BoundForStatement),
    Label(BoundLabelStatement),
    Goto(BoundGotoStatement),
    ConditionalGoto(BoundConditionalGotoStatement),
    Return(BoundReturnStatement),
    Expression(BoundExpressionStatement),
}

#[derive(Debug, Clone)]
pub struct BoundBlockStatement {
    pub statements: Vec<BoundStatement>,
}

#[derive(Debug, Clone)]
pub struct BoundVariableDeclaration {
    pub variable: Arc<VariableSymbol>,
    pub initializer: BoundExpression,
}

#[derive(Debug, Clone)]
pub struct BoundIfStatement {
    pub condition: BoundExpression,
    pub then_statement: Box<BoundStatement>,
    pub else_statement: Option<Box<BoundStatement>>,
}

#[derive(Debug, Clone)]
pub struct BoundWhileStatement {
    pub condition: BoundExpression,
    pub body: Box<BoundStatement>,
}

#[derive(Debug, Clone)]
pub struct BoundDoWhileStatement {
    pub body: Box<BoundStatement>,
    pub condition: BoundExpression,
}

#[derive(Debug, Clone)]
pub struct BoundForStatement {
    pub variable: Arc<VariableSymbol>,
    pub lower_bound: BoundExpression,
    pub upper_bound: BoundExpression,
    pub body: Box<BoundStatement>,
}

#[derive(Debug, Clone)]
pub struct BoundLabelStatement {
    pub label: BoundLabel,
}

#[derive(Debug, Clone)]
pub struct BoundGotoStatement {
    pub label: BoundLabel,
}

#[derive(Debug, Clone)]
pub struct BoundConditionalGotoStatement {
    pub label: BoundLabel,
    pub condition: BoundExpression,
    /// When true, jump if the condition holds; otherwise jump if it does
    /// not.
    pub jump_if_true: bool,
}

#[derive(Debug, Clone)]
pub struct BoundReturnStatement {
    pub expression: Option<BoundExpression>,
}

#[derive(Debug, Clone)]
pub struct BoundExpressionStatement {
    pub expression: BoundExpression,
}
