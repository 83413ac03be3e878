//! The lexer.
//!
//! Scans source text into a token stream. Whitespace is skipped rather
//! than tokenized; bad characters produce a diagnostic and a `BadToken`
//! the parser filters out.

use crate::kind::SyntaxKind;
use crate::token::SyntaxToken;
use rill_core::text::TextSpan;
use rill_core::value::Value;
use rill_diagnostics::DiagnosticBag;

pub struct Lexer<'a> {
    text: &'a str,
    position: usize,
    diagnostics: DiagnosticBag,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            position: 0,
            diagnostics: DiagnosticBag::new(),
        }
    }

    /// Lex the whole input, including the trailing `EofToken`.
    pub fn lex(mut self) -> (Vec<SyntaxToken>, DiagnosticBag) {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == SyntaxKind::EofToken;
            tokens.push(token);
            if done {
                break;
            }
        }
        (tokens, self.diagnostics)
    }

    fn peek(&self, offset: usize) -> u8 {
        *self.text.as_bytes().get(self.position + offset).unwrap_or(&0)
    }

    fn current(&self) -> u8 {
        self.peek(0)
    }

    fn next_token(&mut self) -> SyntaxToken {
        while self.current().is_ascii_whitespace() {
            self.position += 1;
        }

        let start = self.position as u32;

        let (kind, length) = match self.current() {
            0 if self.position >= self.text.len() => (SyntaxKind::EofToken, 0),
            b'0'..=b'9' => return self.lex_number(),
            b'"' => return self.lex_string(),
            c if c.is_ascii_alphabetic() || c == b'_' => return self.lex_identifier_or_keyword(),
            b'+' => (SyntaxKind::PlusToken, 1),
            b'-' => (SyntaxKind::MinusToken, 1),
            b'*' => (SyntaxKind::StarToken, 1),
            b'/' => (SyntaxKind::SlashToken, 1),
            b'~' => (SyntaxKind::TildeToken, 1),
            b'^' => (SyntaxKind::HatToken, 1),
            b'(' => (SyntaxKind::OpenParenToken, 1),
            b')' => (SyntaxKind::CloseParenToken, 1),
            b'{' => (SyntaxKind::OpenBraceToken, 1),
            b'}' => (SyntaxKind::CloseBraceToken, 1),
            b',' => (SyntaxKind::CommaToken, 1),
            b':' => (SyntaxKind::ColonToken, 1),
            b'&' if self.peek(1) == b'&' => (SyntaxKind::AmpersandAmpersandToken, 2),
            b'&' => (SyntaxKind::AmpersandToken, 1),
            b'|' if self.peek(1) == b'|' => (SyntaxKind::PipePipeToken, 2),
            b'|' => (SyntaxKind::PipeToken, 1),
            b'=' if self.peek(1) == b'=' => (SyntaxKind::EqualsEqualsToken, 2),
            b'=' => (SyntaxKind::EqualsToken, 1),
            b'!' if self.peek(1) == b'=' => (SyntaxKind::BangEqualsToken, 2),
            b'!' => (SyntaxKind::BangToken, 1),
            b'<' if self.peek(1) == b'=' => (SyntaxKind::LessOrEqualsToken, 2),
            b'<' => (SyntaxKind::LessToken, 1),
            b'>' if self.peek(1) == b'=' => (SyntaxKind::GreaterOrEqualsToken, 2),
            b'>' => (SyntaxKind::GreaterToken, 1),
            _ => return self.lex_bad_character(),
        };

        self.position += length as usize;
        let span = TextSpan::new(start, length);
        let text = kind.fixed_text().unwrap_or("");
        SyntaxToken::new(kind, span, text)
    }

    fn lex_number(&mut self) -> SyntaxToken {
        let start = self.position;
        while self.current().is_ascii_digit() {
            self.position += 1;
        }
        let text = &self.text[start..self.position];
        let span = TextSpan::from_bounds(start as u32, self.position as u32);

        let value = match text.parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                self.diagnostics.report_invalid_number(span, text, "Int");
                0
            }
        };
        SyntaxToken::with_value(SyntaxKind::NumberToken, span, text, Value::Int(value))
    }

    fn lex_string(&mut self) -> SyntaxToken {
        let start = self.position;
        self.position += 1; // opening quote
        let mut value = String::new();
        loop {
            match self.current() {
                0 | b'\n' | b'\r' => {
                    let span = TextSpan::new(start as u32, 1);
                    self.diagnostics.report_unterminated_string(span);
                    break;
                }
                b'"' if self.peek(1) == b'"' => {
                    // "" escapes a quote inside the literal
                    value.push('"');
                    self.position += 2;
                }
                b'"' => {
                    self.position += 1;
                    break;
                }
                _ => {
                    let rest = &self.text[self.position..];
                    let c = rest.chars().next().unwrap_or('\u{fffd}');
                    value.push(c);
                    self.position += c.len_utf8();
                }
            }
        }
        let span = TextSpan::from_bounds(start as u32, self.position as u32);
        let text = &self.text[start..self.position];
        SyntaxToken::with_value(SyntaxKind::StringToken, span, text, Value::string(value))
    }

    fn lex_identifier_or_keyword(&mut self) -> SyntaxToken {
        let start = self.position;
        while self.current().is_ascii_alphanumeric() || self.current() == b'_' {
            self.position += 1;
        }
        let text = &self.text[start..self.position];
        let span = TextSpan::from_bounds(start as u32, self.position as u32);
        match SyntaxKind::keyword(text) {
            Some(SyntaxKind::TrueKeyword) => {
                SyntaxToken::with_value(SyntaxKind::TrueKeyword, span, text, Value::Bool(true))
            }
            Some(SyntaxKind::FalseKeyword) => {
                SyntaxToken::with_value(SyntaxKind::FalseKeyword, span, text, Value::Bool(false))
            }
            Some(kind) => SyntaxToken::new(kind, span, text),
            None => SyntaxToken::new(SyntaxKind::IdentifierToken, span, text),
        }
    }

    fn lex_bad_character(&mut self) -> SyntaxToken {
        let start = self.position;
        let c = self.text[self.position..].chars().next().unwrap_or('\u{fffd}');
        self.position += c.len_utf8();
        let span = TextSpan::from_bounds(start as u32, self.position as u32);
        self.diagnostics.report_bad_character(span, c);
        SyntaxToken::new(SyntaxKind::BadToken, span, &self.text[start..self.position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_kinds(text: &str) -> Vec<SyntaxKind> {
        let (tokens, diagnostics) = Lexer::new(text).lex();
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_lex_operators() {
        assert_eq!(
            lex_kinds("+ - * / == != <= >="),
            vec![
                SyntaxKind::PlusToken,
                SyntaxKind::MinusToken,
                SyntaxKind::StarToken,
                SyntaxKind::SlashToken,
                SyntaxKind::EqualsEqualsToken,
                SyntaxKind::BangEqualsToken,
                SyntaxKind::LessOrEqualsToken,
                SyntaxKind::GreaterOrEqualsToken,
                SyntaxKind::EofToken,
            ]
        );
    }

    #[test]
    fn test_lex_number_value() {
        let (tokens, _) = Lexer::new("1234").lex();
        assert_eq!(tokens[0].value, Some(Value::Int(1234)));
        assert_eq!(tokens[0].span, TextSpan::new(0, 4));
    }

    #[test]
    fn test_lex_string_with_escaped_quote() {
        let (tokens, diagnostics) = Lexer::new(r#""say ""hi""""#).lex();
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0].value, Some(Value::string("say \"hi\"")));
    }

    #[test]
    fn test_lex_unterminated_string() {
        let (_, diagnostics) = Lexer::new("\"abc").lex();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.diagnostics()[0].message,
            "Unterminated string literal."
        );
    }

    #[test]
    fn test_lex_keywords_and_identifiers() {
        assert_eq!(
            lex_kinds("while going"),
            vec![
                SyntaxKind::WhileKeyword,
                SyntaxKind::IdentifierToken,
                SyntaxKind::EofToken,
            ]
        );
    }

    #[test]
    fn test_lex_bad_character() {
        let (tokens, diagnostics) = Lexer::new("1 @ 2").lex();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.diagnostics()[0].message, "Bad character input: '@'.");
        assert!(tokens.iter().any(|t| t.kind == SyntaxKind::BadToken));
    }

    #[test]
    fn test_lex_too_large_number() {
        let (_, diagnostics) = Lexer::new("99999999999999999999").lex();
        assert_eq!(
            diagnostics.diagnostics()[0].message,
            "The number 99999999999999999999 isn't valid Int."
        );
    }
}
