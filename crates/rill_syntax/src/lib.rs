//! rill_syntax: Lexer, syntax tree, and recursive-descent parser.
//!
//! This crate is the front-end boundary of the pipeline: it turns source
//! text into a [`tree::SyntaxTree`] whose root exposes the ordered list of
//! top-level members, together with the lexer's and parser's diagnostics.
//! Everything downstream consumes that tree and nothing else.

pub mod ast;
pub mod kind;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod tree;

pub use kind::SyntaxKind;
pub use token::SyntaxToken;
pub use tree::SyntaxTree;
