//! rill_lowering: rewrites structured control flow into goto primitives.
//!
//! After lowering, a body is a flat block containing only variable
//! declarations, expression statements, returns, labels, and gotos. The
//! evaluator and the control-flow graph never see `if`, `while`, `do` or
//! `for`.

use rill_bound::{
    BoundAssignmentExpression, BoundBinaryExpression, BoundBinaryOperator, BoundBlockStatement,
    BoundConditionalGotoStatement, BoundDoWhileStatement, BoundExpression,
    BoundExpressionStatement, BoundForStatement, BoundGotoStatement, BoundIfStatement, BoundLabel,
    BoundLabelStatement, BoundStatement, BoundVariableDeclaration, BoundVariableExpression,
    BoundWhileStatement,
};
use rill_core::value::Value;
use rill_symbols::{TypeSymbol, VariableKind, VariableSymbol};
use rill_syntax::SyntaxKind;
use std::sync::Arc;

pub struct Lowerer {
    label_count: u32,
}

impl Lowerer {
    /// Lower a statement into a flat block of goto primitives. Label
    /// numbers are unique within the returned block.
    pub fn lower(statement: BoundStatement) -> BoundBlockStatement {
        let mut lowerer = Lowerer { label_count: 0 };
        let rewritten = lowerer.rewrite_statement(statement);
        flatten(rewritten)
    }

    fn generate_label(&mut self) -> BoundLabel {
        self.label_count += 1;
        BoundLabel(self.label_count)
    }

    fn rewrite_statement(&mut self, statement: BoundStatement) -> BoundStatement {
        match statement {
            BoundStatement::Block(block) => BoundStatement::Block(BoundBlockStatement {
                statements: block
                    .statements
                    .into_iter()
                    .map(|s| self.rewrite_statement(s))
                    .collect(),
            }),
            BoundStatement::If(s) => self.rewrite_if_statement(s),
            BoundStatement::While(s) => self.rewrite_while_statement(s),
            BoundStatement::DoWhile(s) => self.rewrite_do_while_statement(s),
            BoundStatement::For(s) => self.rewrite_for_statement(s),
            other => other,
        }
    }

    /// ```text
    /// if <condition>              goto end unless <condition>
    ///     <then>          ===>    <then>
    ///                             end:
    /// ```
    ///
    /// ```text
    /// if <condition>              goto else unless <condition>
    ///     <then>                  <then>
    /// else                ===>    goto end
    ///     <else>                  else:
    ///                             <else>
    ///                             end:
    /// ```
    fn rewrite_if_statement(&mut self, s: BoundIfStatement) -> BoundStatement {
        let result = match s.else_statement {
            None => {
                let end_label = self.generate_label();
                block(vec![
                    goto_unless(end_label, s.condition),
                    *s.then_statement,
                    label(end_label),
                ])
            }
            Some(else_statement) => {
                let else_label = self.generate_label();
                let end_label = self.generate_label();
                block(vec![
                    goto_unless(else_label, s.condition),
                    *s.then_statement,
                    goto(end_label),
                    label(else_label),
                    *else_statement,
                    label(end_label),
                ])
            }
        };
        self.rewrite_statement(result)
    }

    /// ```text
    /// while <condition>           goto check
    ///     <body>                  body:
    ///                     ===>    <body>
    ///                             check:
    ///                             goto body if <condition>
    /// ```
    fn rewrite_while_statement(&mut self, s: BoundWhileStatement) -> BoundStatement {
        let body_label = self.generate_label();
        let check_label = self.generate_label();
        let result = block(vec![
            goto(check_label),
            label(body_label),
            *s.body,
            label(check_label),
            goto_if(body_label, s.condition),
        ]);
        self.rewrite_statement(result)
    }

    /// ```text
    /// do                          body:
    ///     <body>          ===>    <body>
    /// while <condition>           goto body if <condition>
    /// ```
    fn rewrite_do_while_statement(&mut self, s: BoundDoWhileStatement) -> BoundStatement {
        let body_label = self.generate_label();
        let result = block(vec![
            label(body_label),
            *s.body,
            goto_if(body_label, s.condition),
        ]);
        self.rewrite_statement(result)
    }

    /// ```text
    /// for <var> = <lo> to <hi>    {
    ///     <body>                      var <var> = <lo>
    ///                     ===>        let upperBound = <hi>
    ///                                 while <var> <= upperBound
    ///                                 {
    ///                                     <body>
    ///                                     <var> = <var> + 1
    ///                                 }
    ///                             }
    /// ```
    ///
    /// The upper bound is captured once, so a bound expression with side
    /// effects evaluates exactly once.
    fn rewrite_for_statement(&mut self, s: BoundForStatement) -> BoundStatement {
        let upper_bound_symbol =
            VariableSymbol::new("upperBound", VariableKind::Local, true, TypeSymbol::Int);

        let counter_declaration = BoundStatement::VariableDeclaration(BoundVariableDeclaration {
            variable: s.variable.clone(),
            initializer: s.lower_bound,
        });
        let upper_bound_declaration =
            BoundStatement::VariableDeclaration(BoundVariableDeclaration {
                variable: upper_bound_symbol.clone(),
                initializer: s.upper_bound,
            });

        let condition = BoundExpression::Binary(BoundBinaryExpression {
            left: Box::new(variable(&s.variable)),
            operator: int_operator(SyntaxKind::LessOrEqualsToken),
            right: Box::new(variable(&upper_bound_symbol)),
        });
        let increment = BoundStatement::Expression(BoundExpressionStatement {
            expression: BoundExpression::Assignment(BoundAssignmentExpression {
                variable: s.variable.clone(),
                expression: Box::new(BoundExpression::Binary(BoundBinaryExpression {
                    left: Box::new(variable(&s.variable)),
                    operator: int_operator(SyntaxKind::PlusToken),
                    right: Box::new(BoundExpression::literal(Value::Int(1))),
                })),
            }),
        });

        let while_statement = BoundStatement::While(BoundWhileStatement {
            condition,
            body: Box::new(block(vec![*s.body, increment])),
        });

        let result = block(vec![
            counter_declaration,
            upper_bound_declaration,
            while_statement,
        ]);
        self.rewrite_statement(result)
    }
}

fn int_operator(kind: SyntaxKind) -> &'static BoundBinaryOperator {
    match BoundBinaryOperator::bind(kind, TypeSymbol::Int, TypeSymbol::Int) {
        Some(operator) => operator,
        None => unreachable!("no Int operator for {kind}"),
    }
}

fn variable(symbol: &Arc<VariableSymbol>) -> BoundExpression {
    BoundExpression::Variable(BoundVariableExpression {
        variable: Arc::clone(symbol),
    })
}

fn block(statements: Vec<BoundStatement>) -> BoundStatement {
    BoundStatement::Block(BoundBlockStatement { statements })
}

fn label(label: BoundLabel) -> BoundStatement {
    BoundStatement::Label(BoundLabelStatement { label })
}

fn goto(label: BoundLabel) -> BoundStatement {
    BoundStatement::Goto(BoundGotoStatement { label })
}

fn goto_if(label: BoundLabel, condition: BoundExpression) -> BoundStatement {
    BoundStatement::ConditionalGoto(BoundConditionalGotoStatement {
        label,
        condition,
        jump_if_true: true,
    })
}

fn goto_unless(label: BoundLabel, condition: BoundExpression) -> BoundStatement {
    BoundStatement::ConditionalGoto(BoundConditionalGotoStatement {
        label,
        condition,
        jump_if_true: false,
    })
}

/// Splice nested blocks into one flat statement list, preserving order.
fn flatten(statement: BoundStatement) -> BoundBlockStatement {
    let mut statements = Vec::new();
    let mut stack = vec![statement];
    while let Some(current) = stack.pop() {
        match current {
            BoundStatement::Block(inner) => {
                stack.extend(inner.statements.into_iter().rev());
            }
            other => statements.push(other),
        }
    }
    BoundBlockStatement { statements }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_structured(statement: &BoundStatement) -> bool {
        matches!(
            statement,
            BoundStatement::Block(_)
                | BoundStatement::If(_)
                | BoundStatement::While(_)
                | BoundStatement::DoWhile(_)
                | BoundStatement::For(_)
        )
    }

    fn literal_bool(value: bool) -> BoundExpression {
        BoundExpression::literal(Value::Bool(value))
    }

    fn nop() -> BoundStatement {
        BoundStatement::Expression(BoundExpressionStatement {
            expression: BoundExpression::literal(Value::Int(0)),
        })
    }

    #[test]
    fn test_lower_if_without_else() {
        let statement = BoundStatement::If(BoundIfStatement {
            condition: literal_bool(true),
            then_statement: Box::new(nop()),
            else_statement: None,
        });
        let lowered = Lowerer::lower(statement);

        assert_eq!(lowered.statements.len(), 3);
        assert!(matches!(
            &lowered.statements[0],
            BoundStatement::ConditionalGoto(g) if !g.jump_if_true
        ));
        assert!(matches!(&lowered.statements[2], BoundStatement::Label(_)));
    }

    #[test]
    fn test_lower_if_with_else() {
        let statement = BoundStatement::If(BoundIfStatement {
            condition: literal_bool(true),
            then_statement: Box::new(nop()),
            else_statement: Some(Box::new(nop())),
        });
        let lowered = Lowerer::lower(statement);

        // gotoFalse, then, goto end, else:, else, end:
        assert_eq!(lowered.statements.len(), 6);
        assert!(matches!(&lowered.statements[2], BoundStatement::Goto(_)));
    }

    #[test]
    fn test_lower_while_checks_condition_first() {
        let statement = BoundStatement::While(BoundWhileStatement {
            condition: literal_bool(false),
            body: Box::new(nop()),
        });
        let lowered = Lowerer::lower(statement);

        // goto check, body:, body, check:, gotoTrue body
        assert_eq!(lowered.statements.len(), 5);
        assert!(matches!(&lowered.statements[0], BoundStatement::Goto(_)));
        assert!(matches!(
            &lowered.statements[4],
            BoundStatement::ConditionalGoto(g) if g.jump_if_true
        ));
    }

    #[test]
    fn test_lower_do_while_runs_body_first() {
        let statement = BoundStatement::DoWhile(BoundDoWhileStatement {
            body: Box::new(nop()),
            condition: literal_bool(false),
        });
        let lowered = Lowerer::lower(statement);

        // body:, body, gotoTrue body
        assert_eq!(lowered.statements.len(), 3);
        assert!(matches!(&lowered.statements[0], BoundStatement::Label(_)));
    }

    #[test]
    fn test_lower_for_snapshots_upper_bound() {
        let counter = VariableSymbol::new("i", VariableKind::Local, true, TypeSymbol::Int);
        let statement = BoundStatement::For(BoundForStatement {
            variable: counter,
            lower_bound: BoundExpression::literal(Value::Int(1)),
            upper_bound: BoundExpression::literal(Value::Int(10)),
            body: Box::new(nop()),
        });
        let lowered = Lowerer::lower(statement);

        // Two declarations up front: the counter and the captured bound.
        let declarations: Vec<_> = lowered
            .statements
            .iter()
            .take(2)
            .filter(|s| matches!(s, BoundStatement::VariableDeclaration(_)))
            .collect();
        assert_eq!(declarations.len(), 2);
        assert!(lowered.statements.iter().all(|s| !is_structured(s)));
    }

    #[test]
    fn test_labels_are_unique() {
        let nested = BoundStatement::If(BoundIfStatement {
            condition: literal_bool(true),
            then_statement: Box::new(BoundStatement::If(BoundIfStatement {
                condition: literal_bool(false),
                then_statement: Box::new(nop()),
                else_statement: None,
            })),
            else_statement: Some(Box::new(nop())),
        });
        let lowered = Lowerer::lower(nested);

        let mut labels: Vec<_> = lowered
            .statements
            .iter()
            .filter_map(|s| match s {
                BoundStatement::Label(l) => Some(l.label),
                _ => None,
            })
            .collect();
        let total = labels.len();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), total);
    }
}
