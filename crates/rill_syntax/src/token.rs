//! Lexed tokens.

use crate::kind::SyntaxKind;
use rill_core::text::TextSpan;
use rill_core::value::Value;

/// A single token produced by the lexer.
#[derive(Debug, Clone)]
pub struct SyntaxToken {
    pub kind: SyntaxKind,
    pub span: TextSpan,
    /// The source text of the token. Empty for manufactured tokens the
    /// parser inserts on error.
    pub text: String,
    /// The literal value, for number and string tokens.
    pub value: Option<Value>,
}

impl SyntaxToken {
    pub fn new(kind: SyntaxKind, span: TextSpan, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
            value: None,
        }
    }

    pub fn with_value(
        kind: SyntaxKind,
        span: TextSpan,
        text: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
            value: Some(value),
        }
    }

    /// Whether the parser manufactured this token to recover from an error.
    pub fn is_missing(&self) -> bool {
        self.text.is_empty() && self.span.length == 0
    }
}
