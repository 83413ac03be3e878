//! Token kinds and operator precedence tables.

use std::fmt;

/// The kind of a lexed token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    // Special
    EofToken,
    BadToken,

    // Literals and names
    NumberToken,
    StringToken,
    IdentifierToken,

    // Operators
    PlusToken,
    MinusToken,
    StarToken,
    SlashToken,
    BangToken,
    TildeToken,
    AmpersandToken,
    AmpersandAmpersandToken,
    PipeToken,
    PipePipeToken,
    HatToken,
    EqualsToken,
    EqualsEqualsToken,
    BangEqualsToken,
    LessToken,
    LessOrEqualsToken,
    GreaterToken,
    GreaterOrEqualsToken,

    // Punctuation
    OpenParenToken,
    CloseParenToken,
    OpenBraceToken,
    CloseBraceToken,
    CommaToken,
    ColonToken,

    // Keywords
    TrueKeyword,
    FalseKeyword,
    VarKeyword,
    LetKeyword,
    IfKeyword,
    ElseKeyword,
    WhileKeyword,
    DoKeyword,
    ForKeyword,
    ToKeyword,
    FunctionKeyword,
    ReturnKeyword,
}

impl SyntaxKind {
    /// The keyword kind for an identifier-shaped word, if it is one.
    pub fn keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "true" => Some(SyntaxKind::TrueKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "var" => Some(SyntaxKind::VarKeyword),
            "let" => Some(SyntaxKind::LetKeyword),
            "if" => Some(SyntaxKind::IfKeyword),
            "else" => Some(SyntaxKind::ElseKeyword),
            "while" => Some(SyntaxKind::WhileKeyword),
            "do" => Some(SyntaxKind::DoKeyword),
            "for" => Some(SyntaxKind::ForKeyword),
            "to" => Some(SyntaxKind::ToKeyword),
            "function" => Some(SyntaxKind::FunctionKeyword),
            "return" => Some(SyntaxKind::ReturnKeyword),
            _ => None,
        }
    }

    /// Precedence of this kind as a unary operator; 0 if it is not one.
    pub fn unary_operator_precedence(self) -> u8 {
        match self {
            SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::BangToken
            | SyntaxKind::TildeToken => 6,
            _ => 0,
        }
    }

    /// Precedence of this kind as a binary operator; 0 if it is not one.
    pub fn binary_operator_precedence(self) -> u8 {
        match self {
            SyntaxKind::StarToken | SyntaxKind::SlashToken => 5,
            SyntaxKind::PlusToken | SyntaxKind::MinusToken => 4,
            SyntaxKind::EqualsEqualsToken
            | SyntaxKind::BangEqualsToken
            | SyntaxKind::LessToken
            | SyntaxKind::LessOrEqualsToken
            | SyntaxKind::GreaterToken
            | SyntaxKind::GreaterOrEqualsToken => 3,
            SyntaxKind::AmpersandToken | SyntaxKind::AmpersandAmpersandToken => 2,
            SyntaxKind::PipeToken | SyntaxKind::PipePipeToken | SyntaxKind::HatToken => 1,
            _ => 0,
        }
    }

    /// The fixed source text of this kind, for operators and keywords.
    pub fn fixed_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::StarToken => Some("*"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::BangToken => Some("!"),
            SyntaxKind::TildeToken => Some("~"),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::PipeToken => Some("|"),
            SyntaxKind::PipePipeToken => Some("||"),
            SyntaxKind::HatToken => Some("^"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::BangEqualsToken => Some("!="),
            SyntaxKind::LessToken => Some("<"),
            SyntaxKind::LessOrEqualsToken => Some("<="),
            SyntaxKind::GreaterToken => Some(">"),
            SyntaxKind::GreaterOrEqualsToken => Some(">="),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::WhileKeyword => Some("while"),
            SyntaxKind::DoKeyword => Some("do"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::ToKeyword => Some("to"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::ReturnKeyword => Some("return"),
            _ => None,
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(SyntaxKind::keyword("while"), Some(SyntaxKind::WhileKeyword));
        assert_eq!(SyntaxKind::keyword("loop"), None);
    }

    #[test]
    fn test_precedences_nest_correctly() {
        // Unary binds tighter than any binary operator.
        let unary = SyntaxKind::MinusToken.unary_operator_precedence();
        let strongest_binary = SyntaxKind::StarToken.binary_operator_precedence();
        assert!(unary > strongest_binary);

        // Multiplicative > additive > comparison > and > or.
        assert!(
            SyntaxKind::StarToken.binary_operator_precedence()
                > SyntaxKind::PlusToken.binary_operator_precedence()
        );
        assert!(
            SyntaxKind::PlusToken.binary_operator_precedence()
                > SyntaxKind::EqualsEqualsToken.binary_operator_precedence()
        );
        assert!(
            SyntaxKind::EqualsEqualsToken.binary_operator_precedence()
                > SyntaxKind::AmpersandAmpersandToken.binary_operator_precedence()
        );
        assert!(
            SyntaxKind::AmpersandAmpersandToken.binary_operator_precedence()
                > SyntaxKind::PipePipeToken.binary_operator_precedence()
        );
    }
}
