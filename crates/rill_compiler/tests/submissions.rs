//! Incremental script sessions: submission chains built with
//! `continue_with`, sharing one global variable store.

use rill_compiler::Compilation;
use rill_core::value::Value;
use rill_evaluator::Variables;
use rill_syntax::SyntaxTree;
use std::sync::Arc;

struct Session {
    compilation: Option<Arc<Compilation>>,
    variables: Variables,
}

impl Session {
    fn new() -> Self {
        Self {
            compilation: None,
            variables: Variables::default(),
        }
    }

    fn submit(&mut self, text: &str) -> Option<Value> {
        let tree = SyntaxTree::parse(text);
        let compilation = match &self.compilation {
            Some(previous) => previous.continue_with(tree),
            None => Compilation::new_script(tree),
        };
        let result = compilation
            .evaluate(&mut self.variables)
            .expect("unexpected runtime fault");
        assert!(
            result.diagnostics.is_empty(),
            "unexpected diagnostics for {text:?}: {:?}",
            result.diagnostics
        );
        self.compilation = Some(compilation);
        result.value
    }

    fn submit_messages(&mut self, text: &str) -> Vec<String> {
        let tree = SyntaxTree::parse(text);
        let compilation = match &self.compilation {
            Some(previous) => previous.continue_with(tree),
            None => Compilation::new_script(tree),
        };
        let result = compilation
            .evaluate(&mut self.variables)
            .expect("unexpected runtime fault");
        // A failed submission is not chained, mirroring an interactive
        // session that rejects bad input.
        result.diagnostics.into_iter().map(|d| d.message).collect()
    }
}

#[test]
fn test_variables_persist_across_submissions() {
    let mut session = Session::new();
    assert_eq!(session.submit("var x = 10"), Some(Value::Int(10)));
    assert_eq!(session.submit("x + 1"), Some(Value::Int(11)));
    assert_eq!(session.submit("x = x * 2"), Some(Value::Int(20)));
    assert_eq!(session.submit("x"), Some(Value::Int(20)));
}

#[test]
fn test_redeclaration_shadows_previous_submission() {
    let mut session = Session::new();
    session.submit("var x = 10");
    // A later submission may redeclare the name, even at another type.
    assert_eq!(session.submit("var x = \"hi\""), Some(Value::string("hi")));
    assert_eq!(session.submit("x + \"!\""), Some(Value::string("hi!")));
}

#[test]
fn test_functions_survive_across_submissions() {
    let mut session = Session::new();
    session.submit("function add(a: Int, b: Int): Int { return a + b }");
    assert_eq!(session.submit("add(1, 2)"), Some(Value::Int(3)));
    assert_eq!(session.submit("add(add(1, 2), 4)"), Some(Value::Int(7)));
}

#[test]
fn test_later_functions_see_earlier_globals() {
    let mut session = Session::new();
    session.submit("var base = 100");
    session.submit("function offset(n: Int): Int { return base + n }");
    assert_eq!(session.submit("offset(5)"), Some(Value::Int(105)));
    session.submit("base = 200");
    assert_eq!(session.submit("offset(5)"), Some(Value::Int(205)));
}

#[test]
fn test_read_only_survives_chaining() {
    let mut session = Session::new();
    session.submit("let fixed = 1");
    assert_eq!(
        session.submit_messages("fixed = 2"),
        vec!["Variable 'fixed' is read-only and cannot be assigned to."]
    );
}

#[test]
fn test_undefined_name_does_not_poison_session() {
    let mut session = Session::new();
    session.submit("var x = 1");
    assert_eq!(
        session.submit_messages("nope"),
        vec!["Variable 'nope' does not exist."]
    );
    // The session continues from the last good submission.
    assert_eq!(session.submit("x"), Some(Value::Int(1)));
}

#[test]
fn test_global_scope_is_computed_once() {
    let tree = SyntaxTree::parse("var x = 1");
    let compilation = Compilation::new_script(tree);
    let first = Arc::as_ptr(compilation.global_scope());
    let second = Arc::as_ptr(compilation.global_scope());
    assert_eq!(first, second);
}

#[test]
fn test_chain_accessors() {
    let mut session = Session::new();
    session.submit("var x = 1");
    session.submit("var y = 2");
    let compilation = session.compilation.as_ref().unwrap();
    assert_eq!(compilation.variables().len(), 1);
    assert!(compilation.previous().is_some());
    assert!(compilation.previous().unwrap().previous().is_none());
}
