//! A parsed source text.

use crate::ast::CompilationUnitSyntax;
use crate::parser::Parser;
use rill_core::text::LineMap;
use rill_diagnostics::Diagnostic;
use std::sync::Arc;

/// A parsed source text, its root node, and the diagnostics produced while
/// lexing and parsing it. The text is retained so callers can map spans back
/// to lines and columns.
#[derive(Debug)]
pub struct SyntaxTree {
    text: Arc<str>,
    root: CompilationUnitSyntax,
    diagnostics: Vec<Diagnostic>,
}

impl SyntaxTree {
    pub fn parse(text: impl Into<Arc<str>>) -> Arc<SyntaxTree> {
        let text: Arc<str> = text.into();
        let (root, diagnostics) = Parser::new(&text).parse_compilation_unit();
        Arc::new(SyntaxTree {
            text,
            root,
            diagnostics: diagnostics.into_diagnostics(),
        })
    }

    pub fn text(&self) -> &Arc<str> {
        &self.text
    }

    pub fn root(&self) -> &CompilationUnitSyntax {
        &self.root
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Line map for resolving spans against this tree's text.
    pub fn line_map(&self) -> LineMap {
        LineMap::new(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::MemberSyntax;

    #[test]
    fn test_parse_collects_lexer_and_parser_diagnostics() {
        let tree = SyntaxTree::parse("var x @ =");
        // One bad character from the lexer, at least one unexpected token
        // from the parser.
        assert!(tree.diagnostics().len() >= 2);
        assert!(tree
            .diagnostics()
            .iter()
            .any(|d| d.message == "Bad character input: '@'."));
    }

    #[test]
    fn test_parse_clean_input() {
        let tree = SyntaxTree::parse("var x = 10 x + 1");
        assert!(tree.diagnostics().is_empty());
        assert_eq!(tree.root().members.len(), 2);
        assert!(matches!(
            tree.root().members[0],
            MemberSyntax::GlobalStatement(_)
        ));
    }
}
