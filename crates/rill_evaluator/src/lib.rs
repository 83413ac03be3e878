//! rill_evaluator: direct execution of lowered programs.
//!
//! The evaluator walks the flat statement list of a lowered body. Before a
//! body runs, its labels are indexed once, so every goto is an O(1) jump
//! rather than a scan. Global variables live in a map the caller owns and
//! threads through the submission chain; locals live in per-call frames.

use rill_bound::{
    BoundBinaryOperatorKind, BoundBlockStatement, BoundCallExpression, BoundExpression,
    BoundLabel, BoundProgram, BoundStatement, BoundUnaryOperatorKind,
};
use rill_core::value::Value;
use rill_symbols::{builtins, FunctionSymbol, TypeSymbol, VariableKind, VariableSymbol};
use rustc_hash::FxHashMap;
use std::io::BufRead;
use std::sync::Arc;
use thiserror::Error;

/// The shared global variable store, keyed by symbol identity.
pub type Variables = FxHashMap<Arc<VariableSymbol>, Value>;

/// A fault that aborts evaluation. These are runtime errors, not
/// diagnostics; the program was well typed but misbehaved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeFault {
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Cannot convert '{value}' to {target}.")]
    InvalidConversion { value: Value, target: TypeSymbol },
}

pub struct Evaluator<'a> {
    program: &'a BoundProgram,
    globals: &'a mut Variables,
    locals: Vec<FxHashMap<Arc<VariableSymbol>, Value>>,
    last_value: Value,
}

impl<'a> Evaluator<'a> {
    /// Run the program's top-level statement. The result is the value of
    /// the last expression statement, or of an explicit top-level
    /// `return`.
    pub fn evaluate(
        program: &'a BoundProgram,
        globals: &'a mut Variables,
    ) -> Result<Value, RuntimeFault> {
        let mut evaluator = Evaluator {
            program,
            globals,
            // The outermost frame holds synthetic locals the lowerer
            // introduces at the top level.
            locals: vec![FxHashMap::default()],
            last_value: Value::Unit,
        };
        evaluator.evaluate_block(&program.statement)
    }

    fn evaluate_block(&mut self, body: &BoundBlockStatement) -> Result<Value, RuntimeFault> {
        let mut label_targets: FxHashMap<BoundLabel, usize> = FxHashMap::default();
        for (index, statement) in body.statements.iter().enumerate() {
            if let BoundStatement::Label(label_statement) = statement {
                label_targets.insert(label_statement.label, index + 1);
            }
        }

        let mut index = 0;
        while index < body.statements.len() {
            match &body.statements[index] {
                BoundStatement::VariableDeclaration(s) => {
                    let value = self.evaluate_expression(&s.initializer)?;
                    self.last_value = value.clone();
                    self.assign(&s.variable, value);
                    index += 1;
                }
                BoundStatement::Expression(s) => {
                    self.last_value = self.evaluate_expression(&s.expression)?;
                    index += 1;
                }
                BoundStatement::Label(_) => index += 1,
                BoundStatement::Goto(s) => index = label_targets[&s.label],
                BoundStatement::ConditionalGoto(s) => {
                    let condition = as_bool(self.evaluate_expression(&s.condition)?);
                    if condition == s.jump_if_true {
                        index = label_targets[&s.label];
                    } else {
                        index += 1;
                    }
                }
                BoundStatement::Return(s) => {
                    self.last_value = match &s.expression {
                        Some(expression) => self.evaluate_expression(expression)?,
                        None => Value::Unit,
                    };
                    return Ok(self.last_value.clone());
                }
                BoundStatement::Block(_)
                | BoundStatement::If(_)
                | BoundStatement::While(_)
                | BoundStatement::DoWhile(_)
                | BoundStatement::For(_) => {
                    unreachable!("unlowered statement reached the evaluator")
                }
            }
        }
        Ok(self.last_value.clone())
    }

    fn evaluate_expression(
        &mut self,
        expression: &BoundExpression,
    ) -> Result<Value, RuntimeFault> {
        match expression {
            BoundExpression::Error => unreachable!("error expression survived binding"),
            BoundExpression::Literal(e) => Ok(e.value.clone()),
            BoundExpression::Variable(e) => Ok(self.read(&e.variable)),
            BoundExpression::Assignment(e) => {
                let value = self.evaluate_expression(&e.expression)?;
                self.assign(&e.variable, value.clone());
                Ok(value)
            }
            BoundExpression::Unary(e) => {
                let operand = self.evaluate_expression(&e.operand)?;
                Ok(evaluate_unary(e.operator.kind, operand))
            }
            BoundExpression::Binary(e) => self.evaluate_binary(e),
            BoundExpression::Call(e) => self.evaluate_call(e),
            BoundExpression::Conversion(e) => {
                let value = self.evaluate_expression(&e.expression)?;
                convert(value, e.ty)
            }
        }
    }

    fn evaluate_binary(
        &mut self,
        e: &rill_bound::BoundBinaryExpression,
    ) -> Result<Value, RuntimeFault> {
        // && and || short-circuit; everything else is eager.
        match e.operator.kind {
            BoundBinaryOperatorKind::LogicalAnd => {
                if !as_bool(self.evaluate_expression(&e.left)?) {
                    return Ok(Value::Bool(false));
                }
                return self.evaluate_expression(&e.right);
            }
            BoundBinaryOperatorKind::LogicalOr => {
                if as_bool(self.evaluate_expression(&e.left)?) {
                    return Ok(Value::Bool(true));
                }
                return self.evaluate_expression(&e.right);
            }
            _ => {}
        }

        let left = self.evaluate_expression(&e.left)?;
        let right = self.evaluate_expression(&e.right)?;
        evaluate_binary_eager(e.operator.kind, left, right)
    }

    fn evaluate_call(&mut self, e: &BoundCallExpression) -> Result<Value, RuntimeFault> {
        if e.function == *builtins::BUILTIN_PRINT {
            let value = self.evaluate_expression(&e.arguments[0])?;
            println!("{value}");
            return Ok(Value::Unit);
        }
        if e.function == *builtins::BUILTIN_INPUT {
            let mut line = String::new();
            if std::io::stdin().lock().read_line(&mut line).is_err() {
                line.clear();
            }
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            return Ok(Value::string(line));
        }
        if e.function == *builtins::BUILTIN_RND {
            let max = as_int(self.evaluate_expression(&e.arguments[0])?);
            let value = if max > 0 {
                rand::Rng::gen_range(&mut rand::thread_rng(), 0..max)
            } else {
                0
            };
            return Ok(Value::Int(value));
        }

        self.evaluate_function_call(&e.function, &e.arguments)
    }

    fn evaluate_function_call(
        &mut self,
        function: &Arc<FunctionSymbol>,
        arguments: &[BoundExpression],
    ) -> Result<Value, RuntimeFault> {
        // Arguments evaluate in the caller's frame, before the callee's
        // frame exists.
        let mut frame = FxHashMap::default();
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            let value = self.evaluate_expression(argument)?;
            frame.insert(Arc::clone(parameter), value);
        }

        let body = match self.program.function_body(function) {
            Some(body) => body.clone(),
            None => unreachable!("call to a function with no bound body"),
        };

        self.locals.push(frame);
        let result = self.evaluate_block(&body);
        self.locals.pop();

        let value = result?;
        if function.return_type == TypeSymbol::Void {
            Ok(Value::Unit)
        } else {
            Ok(value)
        }
    }

    fn read(&self, variable: &Arc<VariableSymbol>) -> Value {
        let slot = match variable.kind {
            VariableKind::Global => self.globals.get(variable),
            _ => self.locals.last().and_then(|frame| frame.get(variable)),
        };
        match slot {
            Some(value) => value.clone(),
            None => unreachable!("read of unassigned variable '{}'", variable.name),
        }
    }

    fn assign(&mut self, variable: &Arc<VariableSymbol>, value: Value) {
        match variable.kind {
            VariableKind::Global => {
                self.globals.insert(Arc::clone(variable), value);
            }
            _ => match self.locals.last_mut() {
                Some(frame) => {
                    frame.insert(Arc::clone(variable), value);
                }
                None => unreachable!("local assignment without a frame"),
            },
        }
    }
}

fn evaluate_unary(kind: BoundUnaryOperatorKind, operand: Value) -> Value {
    match kind {
        BoundUnaryOperatorKind::Identity => operand,
        BoundUnaryOperatorKind::Negation => Value::Int(as_int(operand).wrapping_neg()),
        BoundUnaryOperatorKind::LogicalNegation => Value::Bool(!as_bool(operand)),
        BoundUnaryOperatorKind::OnesComplement => Value::Int(!as_int(operand)),
    }
}

fn evaluate_binary_eager(
    kind: BoundBinaryOperatorKind,
    left: Value,
    right: Value,
) -> Result<Value, RuntimeFault> {
    use BoundBinaryOperatorKind::*;
    let value = match (kind, left, right) {
        (Addition, Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_add(b)),
        (Addition, Value::String(a), Value::String(b)) => {
            Value::string(format!("{a}{b}"))
        }
        (Subtraction, Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_sub(b)),
        (Multiplication, Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_mul(b)),
        (Division, Value::Int(_), Value::Int(0)) => return Err(RuntimeFault::DivisionByZero),
        (Division, Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_div(b)),
        (BitwiseAnd, Value::Int(a), Value::Int(b)) => Value::Int(a & b),
        (BitwiseOr, Value::Int(a), Value::Int(b)) => Value::Int(a | b),
        (BitwiseXor, Value::Int(a), Value::Int(b)) => Value::Int(a ^ b),
        (BitwiseAnd, Value::Bool(a), Value::Bool(b)) => Value::Bool(a & b),
        (BitwiseOr, Value::Bool(a), Value::Bool(b)) => Value::Bool(a | b),
        (BitwiseXor, Value::Bool(a), Value::Bool(b)) => Value::Bool(a ^ b),
        (Equals, a, b) => Value::Bool(a == b),
        (NotEquals, a, b) => Value::Bool(a != b),
        (Less, Value::Int(a), Value::Int(b)) => Value::Bool(a < b),
        (LessOrEquals, Value::Int(a), Value::Int(b)) => Value::Bool(a <= b),
        (Greater, Value::Int(a), Value::Int(b)) => Value::Bool(a > b),
        (GreaterOrEquals, Value::Int(a), Value::Int(b)) => Value::Bool(a >= b),
        (kind, left, right) => {
            unreachable!("binary operator {kind:?} applied to {left:?} and {right:?}")
        }
    };
    Ok(value)
}

fn convert(value: Value, target: TypeSymbol) -> Result<Value, RuntimeFault> {
    match (target, value) {
        (TypeSymbol::Any, value) => Ok(value),
        (TypeSymbol::Bool, Value::Bool(b)) => Ok(Value::Bool(b)),
        (TypeSymbol::Bool, Value::String(s)) => match s.parse::<bool>() {
            Ok(b) => Ok(Value::Bool(b)),
            Err(_) => Err(RuntimeFault::InvalidConversion {
                value: Value::String(s),
                target,
            }),
        },
        (TypeSymbol::Int, Value::Int(i)) => Ok(Value::Int(i)),
        (TypeSymbol::Int, Value::String(s)) => match s.parse::<i64>() {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Err(RuntimeFault::InvalidConversion {
                value: Value::String(s),
                target,
            }),
        },
        (TypeSymbol::String, Value::String(s)) => Ok(Value::String(s)),
        (TypeSymbol::String, value @ (Value::Int(_) | Value::Bool(_))) => {
            Ok(Value::string(value.to_string()))
        }
        (target, value) => unreachable!("conversion of {value:?} to {target} survived binding"),
    }
}

fn as_bool(value: Value) -> bool {
    match value {
        Value::Bool(b) => b,
        other => unreachable!("expected a boolean, found {other:?}"),
    }
}

fn as_int(value: Value) -> i64 {
    match value {
        Value::Int(i) => i,
        other => unreachable!("expected an integer, found {other:?}"),
    }
}
