//! Static operator tables.
//!
//! Binding an operator means finding the one entry whose syntax kind and
//! operand types match. No match is a type error reported by the binder.

use rill_symbols::TypeSymbol;
use rill_syntax::SyntaxKind;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoundUnaryOperatorKind {
    Identity,
    Negation,
    LogicalNegation,
    OnesComplement,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundUnaryOperator {
    pub syntax_kind: SyntaxKind,
    pub kind: BoundUnaryOperatorKind,
    pub operand_type: TypeSymbol,
    pub result_type: TypeSymbol,
}

impl BoundUnaryOperator {
    const fn new(
        syntax_kind: SyntaxKind,
        kind: BoundUnaryOperatorKind,
        operand_type: TypeSymbol,
        result_type: TypeSymbol,
    ) -> Self {
        Self {
            syntax_kind,
            kind,
            operand_type,
            result_type,
        }
    }

    pub fn bind(syntax_kind: SyntaxKind, operand_type: TypeSymbol) -> Option<&'static Self> {
        UNARY_OPERATORS
            .iter()
            .find(|op| op.syntax_kind == syntax_kind && op.operand_type == operand_type)
    }
}

static UNARY_OPERATORS: &[BoundUnaryOperator] = &[
    BoundUnaryOperator::new(
        SyntaxKind::PlusToken,
        BoundUnaryOperatorKind::Identity,
        TypeSymbol::Int,
        TypeSymbol::Int,
    ),
    BoundUnaryOperator::new(
        SyntaxKind::MinusToken,
        BoundUnaryOperatorKind::Negation,
        TypeSymbol::Int,
        TypeSymbol::Int,
    ),
    BoundUnaryOperator::new(
        SyntaxKind::TildeToken,
        BoundUnaryOperatorKind::OnesComplement,
        TypeSymbol::Int,
        TypeSymbol::Int,
    ),
    BoundUnaryOperator::new(
        SyntaxKind::BangToken,
        BoundUnaryOperatorKind::LogicalNegation,
        TypeSymbol::Bool,
        TypeSymbol::Bool,
    ),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoundBinaryOperatorKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    LogicalAnd,
    LogicalOr,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Equals,
    NotEquals,
    Less,
    LessOrEquals,
    Greater,
    GreaterOrEquals,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundBinaryOperator {
    pub syntax_kind: SyntaxKind,
    pub kind: BoundBinaryOperatorKind,
    pub left_type: TypeSymbol,
    pub right_type: TypeSymbol,
    pub result_type: TypeSymbol,
}

impl BoundBinaryOperator {
    const fn new(
        syntax_kind: SyntaxKind,
        kind: BoundBinaryOperatorKind,
        left_type: TypeSymbol,
        right_type: TypeSymbol,
        result_type: TypeSymbol,
    ) -> Self {
        Self {
            syntax_kind,
            kind,
            left_type,
            right_type,
            result_type,
        }
    }

    const fn arithmetic(syntax_kind: SyntaxKind, kind: BoundBinaryOperatorKind) -> Self {
        Self::new(syntax_kind, kind, TypeSymbol::Int, TypeSymbol::Int, TypeSymbol::Int)
    }

    const fn comparison(syntax_kind: SyntaxKind, kind: BoundBinaryOperatorKind) -> Self {
        Self::new(syntax_kind, kind, TypeSymbol::Int, TypeSymbol::Int, TypeSymbol::Bool)
    }

    const fn logical(syntax_kind: SyntaxKind, kind: BoundBinaryOperatorKind) -> Self {
        Self::new(syntax_kind, kind, TypeSymbol::Bool, TypeSymbol::Bool, TypeSymbol::Bool)
    }

    pub fn bind(
        syntax_kind: SyntaxKind,
        left_type: TypeSymbol,
        right_type: TypeSymbol,
    ) -> Option<&'static Self> {
        BINARY_OPERATORS.iter().find(|op| {
            op.syntax_kind == syntax_kind && op.left_type == left_type && op.right_type == right_type
        })
    }
}

static BINARY_OPERATORS: &[BoundBinaryOperator] = &[
    // Int arithmetic and bitwise
    BoundBinaryOperator::arithmetic(SyntaxKind::PlusToken, BoundBinaryOperatorKind::Addition),
    BoundBinaryOperator::arithmetic(SyntaxKind::MinusToken, BoundBinaryOperatorKind::Subtraction),
    BoundBinaryOperator::arithmetic(SyntaxKind::StarToken, BoundBinaryOperatorKind::Multiplication),
    BoundBinaryOperator::arithmetic(SyntaxKind::SlashToken, BoundBinaryOperatorKind::Division),
    BoundBinaryOperator::arithmetic(SyntaxKind::AmpersandToken, BoundBinaryOperatorKind::BitwiseAnd),
    BoundBinaryOperator::arithmetic(SyntaxKind::PipeToken, BoundBinaryOperatorKind::BitwiseOr),
    BoundBinaryOperator::arithmetic(SyntaxKind::HatToken, BoundBinaryOperatorKind::BitwiseXor),
    // Int comparisons
    BoundBinaryOperator::comparison(SyntaxKind::EqualsEqualsToken, BoundBinaryOperatorKind::Equals),
    BoundBinaryOperator::comparison(SyntaxKind::BangEqualsToken, BoundBinaryOperatorKind::NotEquals),
    BoundBinaryOperator::comparison(SyntaxKind::LessToken, BoundBinaryOperatorKind::Less),
    BoundBinaryOperator::comparison(SyntaxKind::LessOrEqualsToken, BoundBinaryOperatorKind::LessOrEquals),
    BoundBinaryOperator::comparison(SyntaxKind::GreaterToken, BoundBinaryOperatorKind::Greater),
    BoundBinaryOperator::comparison(SyntaxKind::GreaterOrEqualsToken, BoundBinaryOperatorKind::GreaterOrEquals),
    // Bool
    BoundBinaryOperator::logical(SyntaxKind::AmpersandAmpersandToken, BoundBinaryOperatorKind::LogicalAnd),
    BoundBinaryOperator::logical(SyntaxKind::PipePipeToken, BoundBinaryOperatorKind::LogicalOr),
    BoundBinaryOperator::logical(SyntaxKind::AmpersandToken, BoundBinaryOperatorKind::BitwiseAnd),
    BoundBinaryOperator::logical(SyntaxKind::PipeToken, BoundBinaryOperatorKind::BitwiseOr),
    BoundBinaryOperator::logical(SyntaxKind::HatToken, BoundBinaryOperatorKind::BitwiseXor),
    BoundBinaryOperator::logical(SyntaxKind::EqualsEqualsToken, BoundBinaryOperatorKind::Equals),
    BoundBinaryOperator::logical(SyntaxKind::BangEqualsToken, BoundBinaryOperatorKind::NotEquals),
    // String
    BoundBinaryOperator::new(
        SyntaxKind::PlusToken,
        BoundBinaryOperatorKind::Addition,
        TypeSymbol::String,
        TypeSymbol::String,
        TypeSymbol::String,
    ),
    BoundBinaryOperator::new(
        SyntaxKind::EqualsEqualsToken,
        BoundBinaryOperatorKind::Equals,
        TypeSymbol::String,
        TypeSymbol::String,
        TypeSymbol::Bool,
    ),
    BoundBinaryOperator::new(
        SyntaxKind::BangEqualsToken,
        BoundBinaryOperatorKind::NotEquals,
        TypeSymbol::String,
        TypeSymbol::String,
        TypeSymbol::Bool,
    ),
    // Any
    BoundBinaryOperator::new(
        SyntaxKind::EqualsEqualsToken,
        BoundBinaryOperatorKind::Equals,
        TypeSymbol::Any,
        TypeSymbol::Any,
        TypeSymbol::Bool,
    ),
    BoundBinaryOperator::new(
        SyntaxKind::BangEqualsToken,
        BoundBinaryOperatorKind::NotEquals,
        TypeSymbol::Any,
        TypeSymbol::Any,
        TypeSymbol::Bool,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_unary() {
        let op = BoundUnaryOperator::bind(SyntaxKind::MinusToken, TypeSymbol::Int);
        assert_eq!(op.map(|o| o.kind), Some(BoundUnaryOperatorKind::Negation));
        assert!(BoundUnaryOperator::bind(SyntaxKind::MinusToken, TypeSymbol::Bool).is_none());
    }

    #[test]
    fn test_bind_binary_overloads() {
        let int_plus =
            BoundBinaryOperator::bind(SyntaxKind::PlusToken, TypeSymbol::Int, TypeSymbol::Int);
        assert_eq!(int_plus.map(|o| o.result_type), Some(TypeSymbol::Int));

        let concat = BoundBinaryOperator::bind(
            SyntaxKind::PlusToken,
            TypeSymbol::String,
            TypeSymbol::String,
        );
        assert_eq!(concat.map(|o| o.result_type), Some(TypeSymbol::String));

        assert!(
            BoundBinaryOperator::bind(SyntaxKind::StarToken, TypeSymbol::Int, TypeSymbol::Bool)
                .is_none()
        );
    }

    #[test]
    fn test_bool_ampersand_is_bitwise_and() {
        let op = BoundBinaryOperator::bind(
            SyntaxKind::AmpersandToken,
            TypeSymbol::Bool,
            TypeSymbol::Bool,
        );
        assert_eq!(op.map(|o| o.kind), Some(BoundBinaryOperatorKind::BitwiseAnd));
    }
}
