//! End-to-end evaluation tests: source text in, value out.

use rill_compiler::Compilation;
use rill_core::value::Value;
use rill_evaluator::{RuntimeFault, Variables};
use rill_syntax::SyntaxTree;

fn evaluate(text: &str) -> Value {
    let tree = SyntaxTree::parse(text);
    let compilation = Compilation::new_script(tree);
    let mut variables = Variables::default();
    let result = compilation
        .evaluate(&mut variables)
        .expect("unexpected runtime fault");
    assert!(
        result.diagnostics.is_empty(),
        "unexpected diagnostics for {text:?}: {:?}",
        result.diagnostics
    );
    result.value.expect("no value produced")
}

#[test]
fn test_literals_and_arithmetic() {
    let cases: &[(&str, i64)] = &[
        ("1", 1),
        ("+1", 1),
        ("-1", -1),
        ("~1", -2),
        ("14 + 12", 26),
        ("12 - 3", 9),
        ("4 * 2", 8),
        ("9 / 3", 3),
        ("(10)", 10),
        ("1 + 2 * 3", 7),
        ("(1 + 2) * 3", 9),
        ("1 | 2", 3),
        ("1 & 3", 1),
        ("1 & 0", 0),
        ("1 ^ 0", 1),
        ("1 ^ 3", 2),
    ];
    for (text, expected) in cases {
        assert_eq!(evaluate(text), Value::Int(*expected), "case: {text}");
    }
}

#[test]
fn test_comparisons_and_logic() {
    let cases: &[(&str, bool)] = &[
        ("12 == 3", false),
        ("3 == 3", true),
        ("12 != 3", true),
        ("3 != 3", false),
        ("3 < 4", true),
        ("5 < 4", false),
        ("4 <= 4", true),
        ("5 <= 4", false),
        ("4 > 3", true),
        ("3 > 4", false),
        ("4 >= 4", true),
        ("3 >= 4", false),
        ("true == true", true),
        ("false == false", true),
        ("true != false", true),
        ("true && true", true),
        ("true && false", false),
        ("false || true", true),
        ("false || false", false),
        ("false | true", true),
        ("true & false", false),
        ("true ^ true", false),
        ("!true", false),
        ("!false", true),
    ];
    for (text, expected) in cases {
        assert_eq!(evaluate(text), Value::Bool(*expected), "case: {text}");
    }
}

#[test]
fn test_strings() {
    assert_eq!(evaluate("\"test\""), Value::string("test"));
    assert_eq!(evaluate("\"te\"\"st\""), Value::string("te\"st"));
    assert_eq!(evaluate("\"a\" + \"b\""), Value::string("ab"));
    assert_eq!(evaluate("\"test\" == \"test\""), Value::Bool(true));
    assert_eq!(evaluate("\"test\" != \"abc\""), Value::Bool(true));
}

#[test]
fn test_explicit_conversions() {
    assert_eq!(evaluate("String(1)"), Value::string("1"));
    assert_eq!(evaluate("String(true)"), Value::string("true"));
    assert_eq!(evaluate("Int(\"42\")"), Value::Int(42));
    assert_eq!(evaluate("Bool(\"true\")"), Value::Bool(true));
    assert_eq!(evaluate("Int(Any(7))"), Value::Int(7));
}

#[test]
fn test_variables_and_assignment() {
    assert_eq!(evaluate("var a = 10"), Value::Int(10));
    assert_eq!(evaluate("{ var a = 10 a * a }"), Value::Int(100));
    assert_eq!(evaluate("{ var a = 0 (a = 10) * a }"), Value::Int(100));
    assert_eq!(evaluate("{ var a = 10 { var a = 100 } a }"), Value::Int(10));
}

#[test]
fn test_if_statement() {
    assert_eq!(evaluate("{ var a = 0 if a == 0 a = 10 a }"), Value::Int(10));
    assert_eq!(evaluate("{ var a = 4 if a == 0 a = 10 a }"), Value::Int(4));
    assert_eq!(
        evaluate("{ var a = 0 if a == 0 a = 10 else a = 5 a }"),
        Value::Int(10)
    );
    assert_eq!(
        evaluate("{ var a = 4 if a == 0 a = 10 else a = 5 a }"),
        Value::Int(5)
    );
}

#[test]
fn test_while_statement() {
    assert_eq!(
        evaluate("{ var i = 10 var result = 0 while i > 0 { result = result + i i = i - 1 } result }"),
        Value::Int(55)
    );
    // A false condition skips the body entirely.
    assert_eq!(
        evaluate("{ var touched = false while false { touched = true } touched }"),
        Value::Bool(false)
    );
}

#[test]
fn test_do_while_statement() {
    assert_eq!(
        evaluate("{ var a = 0 do a = a + 1 while a < 10 a }"),
        Value::Int(10)
    );
    // The body always runs at least once.
    assert_eq!(
        evaluate("{ var a = 0 do a = a + 1 while false a }"),
        Value::Int(1)
    );
}

#[test]
fn test_for_statement() {
    assert_eq!(
        evaluate("{ var result = 0 for i = 1 to 10 { result = result + i } result }"),
        Value::Int(55)
    );
    // An empty range runs zero iterations.
    assert_eq!(
        evaluate("{ var result = 0 for i = 5 to 4 { result = result + 1 } result }"),
        Value::Int(0)
    );
}

#[test]
fn test_for_upper_bound_evaluates_once() {
    // The bound expression mutates its own input; capturing it once keeps
    // the loop finite and the count exact.
    assert_eq!(
        evaluate("{ var n = 3 var count = 0 for i = 1 to (n = n + 1) { count = count + 1 } count }"),
        Value::Int(4)
    );
}

#[test]
fn test_short_circuit_evaluation() {
    assert_eq!(
        evaluate("{ var a = 0 false && (a = 1) == 1 a }"),
        Value::Int(0)
    );
    assert_eq!(
        evaluate("{ var a = 0 true || (a = 1) == 1 a }"),
        Value::Int(0)
    );
    assert_eq!(
        evaluate("{ var a = 0 true && (a = 1) == 1 a }"),
        Value::Int(1)
    );
}

#[test]
fn test_functions() {
    assert_eq!(
        evaluate("function add(a: Int, b: Int): Int { return a + b } add(2, 3)"),
        Value::Int(5)
    );
    assert_eq!(
        evaluate(
            "function fib(n: Int): Int { if n <= 1 { return n } return fib(n - 1) + fib(n - 2) } fib(10)"
        ),
        Value::Int(55)
    );
    assert_eq!(
        evaluate(
            "function even(n: Int): Bool { if n == 0 { return true } return odd(n - 1) } \
             function odd(n: Int): Bool { if n == 0 { return false } return even(n - 1) } \
             even(10)"
        ),
        Value::Bool(true)
    );
}

#[test]
fn test_void_function_call_has_unit_value() {
    assert_eq!(evaluate("function ping() { var a = 1 } ping()"), Value::Unit);
}

#[test]
fn test_parameters_shadow_nothing_outside_the_call() {
    assert_eq!(
        evaluate("var a = 1 function bump(a: Int): Int { return a + 1 } bump(41) + a"),
        Value::Int(43)
    );
}

#[test]
fn test_top_level_return() {
    assert_eq!(evaluate("{ var a = 5 return a }"), Value::Int(5));
    assert_eq!(evaluate("return"), Value::Unit);
}

#[test]
fn test_division_by_zero_fault() {
    let tree = SyntaxTree::parse("1 / 0");
    let compilation = Compilation::new_script(tree);
    let mut variables = Variables::default();
    assert_eq!(
        compilation.evaluate(&mut variables),
        Err(RuntimeFault::DivisionByZero)
    );
}

#[test]
fn test_invalid_runtime_conversion_fault() {
    let tree = SyntaxTree::parse("Int(\"not a number\")");
    let compilation = Compilation::new_script(tree);
    let mut variables = Variables::default();
    match compilation.evaluate(&mut variables) {
        Err(RuntimeFault::InvalidConversion { .. }) => {}
        other => panic!("expected a conversion fault, got {other:?}"),
    }
}

#[test]
fn test_emit_tree_is_fully_lowered() {
    let tree = SyntaxTree::parse(
        "function count(n: Int): Int { var total = 0 for i = 1 to n { total = total + i } return total } count(3)",
    );
    let compilation = Compilation::new_script(tree);
    let emitted = compilation.emit_tree();
    assert!(emitted.contains("goto"));
    assert!(emitted.contains("Label"));
    assert!(!emitted.contains("for "));
    assert!(!emitted.contains("while "));
}
