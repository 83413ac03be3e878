//! Text rendering of bound nodes.
//!
//! Used by `emit_tree` and by the control-flow graph's dot output. The
//! rendering is fully parenthesized so operator structure is unambiguous.

use crate::node::*;
use crate::ops::{BoundBinaryOperatorKind, BoundUnaryOperatorKind};
use rill_core::value::Value;
use std::fmt;
use std::fmt::Write as _;

impl fmt::Display for BoundExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundExpression::Error => f.write_str("?"),
            BoundExpression::Literal(e) => write_literal(f, &e.value),
            BoundExpression::Variable(e) => f.write_str(&e.variable.name),
            BoundExpression::Assignment(e) => {
                write!(f, "{} = {}", e.variable.name, e.expression)
            }
            BoundExpression::Unary(e) => {
                write!(f, "{}{}", unary_text(e.operator.kind), e.operand)
            }
            BoundExpression::Binary(e) => {
                write!(f, "({} {} {})", e.left, binary_text(e.operator.kind), e.right)
            }
            BoundExpression::Call(e) => {
                write!(f, "{}(", e.function.name)?;
                for (i, argument) in e.arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            }
            BoundExpression::Conversion(e) => write!(f, "{}({})", e.ty, e.expression),
        }
    }
}

fn write_literal(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
        other => write!(f, "{other}"),
    }
}

fn unary_text(kind: BoundUnaryOperatorKind) -> &'static str {
    match kind {
        BoundUnaryOperatorKind::Identity => "+",
        BoundUnaryOperatorKind::Negation => "-",
        BoundUnaryOperatorKind::LogicalNegation => "!",
        BoundUnaryOperatorKind::OnesComplement => "~",
    }
}

fn binary_text(kind: BoundBinaryOperatorKind) -> &'static str {
    match kind {
        BoundBinaryOperatorKind::Addition => "+",
        BoundBinaryOperatorKind::Subtraction => "-",
        BoundBinaryOperatorKind::Multiplication => "*",
        BoundBinaryOperatorKind::Division => "/",
        BoundBinaryOperatorKind::LogicalAnd => "&&",
        BoundBinaryOperatorKind::LogicalOr => "||",
        BoundBinaryOperatorKind::BitwiseAnd => "&",
        BoundBinaryOperatorKind::BitwiseOr => "|",
        BoundBinaryOperatorKind::BitwiseXor => "^",
        BoundBinaryOperatorKind::Equals => "==",
        BoundBinaryOperatorKind::NotEquals => "!=",
        BoundBinaryOperatorKind::Less => "<",
        BoundBinaryOperatorKind::LessOrEquals => "<=",
        BoundBinaryOperatorKind::Greater => ">",
        BoundBinaryOperatorKind::GreaterOrEquals => ">=",
    }
}

impl fmt::Display for BoundStatement {
    /// One-line rendering; nested statements are indented by
    /// [`write_statement`] instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundStatement::Block(_) => f.write_str("{ ... }"),
            BoundStatement::VariableDeclaration(s) => {
                let keyword = if s.variable.is_read_only { "let" } else { "var" };
                write!(f, "{} {} = {}", keyword, s.variable.name, s.initializer)
            }
            BoundStatement::If(s) => write!(f, "if {}", s.condition),
            BoundStatement::While(s) => write!(f, "while {}", s.condition),
            BoundStatement::DoWhile(s) => write!(f, "do ... while {}", s.condition),
            BoundStatement::For(s) => {
                write!(f, "for {} = {} to {}", s.variable.name, s.lower_bound, s.upper_bound)
            }
            BoundStatement::Label(s) => write!(f, "{}:", s.label),
            BoundStatement::Goto(s) => write!(f, "goto {}", s.label),
            BoundStatement::ConditionalGoto(s) => {
                let keyword = if s.jump_if_true { "if" } else { "unless" };
                write!(f, "goto {} {} {}", s.label, keyword, s.condition)
            }
            BoundStatement::Return(s) => match &s.expression {
                Some(e) => write!(f, "return {e}"),
                None => f.write_str("return"),
            },
            BoundStatement::Expression(s) => write!(f, "{}", s.expression),
        }
    }
}

/// Render a statement with indentation, recursing into structured bodies.
pub fn write_statement(out: &mut String, statement: &BoundStatement, indent: usize) {
    let pad = "    ".repeat(indent);
    match statement {
        BoundStatement::Block(block) => {
            let _ = writeln!(out, "{pad}{{");
            for s in &block.statements {
                write_statement(out, s, indent + 1);
            }
            let _ = writeln!(out, "{pad}}}");
        }
        BoundStatement::If(s) => {
            let _ = writeln!(out, "{pad}if {}", s.condition);
            write_statement(out, &s.then_statement, indent + 1);
            if let Some(else_statement) = &s.else_statement {
                let _ = writeln!(out, "{pad}else");
                write_statement(out, else_statement, indent + 1);
            }
        }
        BoundStatement::While(s) => {
            let _ = writeln!(out, "{pad}while {}", s.condition);
            write_statement(out, &s.body, indent + 1);
        }
        BoundStatement::DoWhile(s) => {
            let _ = writeln!(out, "{pad}do");
            write_statement(out, &s.body, indent + 1);
            let _ = writeln!(out, "{pad}while {}", s.condition);
        }
        BoundStatement::For(s) => {
            let _ = writeln!(
                out,
                "{pad}for {} = {} to {}",
                s.variable.name, s.lower_bound, s.upper_bound
            );
            write_statement(out, &s.body, indent + 1);
        }
        // Labels outdent one level, like C# switch labels.
        BoundStatement::Label(_) if indent > 0 => {
            let pad = "    ".repeat(indent - 1);
            let _ = writeln!(out, "{pad}{statement}");
        }
        other => {
            let _ = writeln!(out, "{pad}{other}");
        }
    }
}

/// Render a lowered block as the body of a declaration.
pub fn write_block(out: &mut String, block: &BoundBlockStatement) {
    let _ = writeln!(out, "{{");
    for statement in &block.statements {
        write_statement(out, statement, 1);
    }
    let _ = writeln!(out, "}}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::BoundLabel;
    use crate::ops::BoundBinaryOperator;
    use rill_symbols::TypeSymbol;
    use rill_syntax::SyntaxKind;

    #[test]
    fn test_expression_display() {
        let op = BoundBinaryOperator::bind(SyntaxKind::PlusToken, TypeSymbol::Int, TypeSymbol::Int)
            .unwrap();
        let e = BoundExpression::Binary(BoundBinaryExpression {
            left: Box::new(BoundExpression::literal(Value::Int(1))),
            operator: op,
            right: Box::new(BoundExpression::literal(Value::Int(2))),
        });
        assert_eq!(e.to_string(), "(1 + 2)");
    }

    #[test]
    fn test_conditional_goto_display() {
        let s = BoundStatement::ConditionalGoto(BoundConditionalGotoStatement {
            label: BoundLabel(1),
            condition: BoundExpression::literal(Value::Bool(true)),
            jump_if_true: false,
        });
        assert_eq!(s.to_string(), "goto Label1 unless true");
    }

    #[test]
    fn test_string_literal_display_escapes_quotes() {
        let e = BoundExpression::literal(Value::string("a\"b"));
        assert_eq!(e.to_string(), "\"a\"\"b\"");
    }
}
