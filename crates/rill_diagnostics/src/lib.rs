//! rill_diagnostics: Diagnostic records and the diagnostic bag.
//!
//! Every recoverable error in the pipeline is reported through a
//! [`DiagnosticBag`]; the reporting stage keeps going so that one pass
//! surfaces as many independent problems as possible. Fatal runtime
//! faults do not go through this module.

use rill_core::text::TextSpan;
use std::fmt;

/// A diagnostic: a message anchored to a span of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The source text span where this diagnostic occurred.
    pub span: TextSpan,
    /// The resolved message text.
    pub message: String,
}

impl Diagnostic {
    pub fn new(span: TextSpan, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}): {}", self.span.start, self.message)
    }
}

/// A collection of diagnostics accumulated during one compilation stage.
///
/// One `report_*` method exists per error the pipeline can produce, so
/// every message is phrased in exactly one place.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    fn report(&mut self, span: TextSpan, message: String) {
        self.diagnostics.push(Diagnostic::new(span, message));
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, other: DiagnosticBag) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn extend_from_slice(&mut self, diagnostics: &[Diagnostic]) {
        self.diagnostics.extend_from_slice(diagnostics);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Sort diagnostics into canonical display order: span start, then
    /// span length. Callers group by source file before sorting.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by_key(|d| (d.span.start, d.span.length));
    }

    // ========================================================================
    // Lexer errors
    // ========================================================================

    pub fn report_bad_character(&mut self, span: TextSpan, character: char) {
        self.report(span, format!("Bad character input: '{character}'."));
    }

    pub fn report_unterminated_string(&mut self, span: TextSpan) {
        self.report(span, "Unterminated string literal.".to_string());
    }

    pub fn report_invalid_number(&mut self, span: TextSpan, text: &str, ty: impl fmt::Display) {
        self.report(span, format!("The number {text} isn't valid {ty}."));
    }

    // ========================================================================
    // Parser errors
    // ========================================================================

    pub fn report_unexpected_token(
        &mut self,
        span: TextSpan,
        actual: impl fmt::Display,
        expected: impl fmt::Display,
    ) {
        self.report(
            span,
            format!("Unexpected token <{actual}>, expected <{expected}>."),
        );
    }

    // ========================================================================
    // Binding errors
    // ========================================================================

    pub fn report_undefined_unary_operator(
        &mut self,
        span: TextSpan,
        operator: &str,
        operand_type: impl fmt::Display,
    ) {
        self.report(
            span,
            format!("Unary operator '{operator}' is not defined for type '{operand_type}'."),
        );
    }

    pub fn report_undefined_binary_operator(
        &mut self,
        span: TextSpan,
        operator: &str,
        left_type: impl fmt::Display,
        right_type: impl fmt::Display,
    ) {
        self.report(
            span,
            format!(
                "Binary operator '{operator}' is not defined for types '{left_type}' and '{right_type}'."
            ),
        );
    }

    pub fn report_undefined_variable(&mut self, span: TextSpan, name: &str) {
        self.report(span, format!("Variable '{name}' does not exist."));
    }

    pub fn report_not_a_variable(&mut self, span: TextSpan, name: &str) {
        self.report(span, format!("'{name}' is not a variable."));
    }

    pub fn report_not_a_function(&mut self, span: TextSpan, name: &str) {
        self.report(span, format!("'{name}' is not a function."));
    }

    pub fn report_undefined_function(&mut self, span: TextSpan, name: &str) {
        self.report(span, format!("Function '{name}' does not exist."));
    }

    pub fn report_undefined_type(&mut self, span: TextSpan, name: &str) {
        self.report(span, format!("Type '{name}' doesn't exist."));
    }

    pub fn report_variable_already_declared(&mut self, span: TextSpan, name: &str) {
        self.report(span, format!("Variable '{name}' is already declared."));
    }

    pub fn report_function_already_declared(&mut self, span: TextSpan, name: &str) {
        self.report(span, format!("Function '{name}' is already declared."));
    }

    pub fn report_parameter_already_declared(&mut self, span: TextSpan, name: &str) {
        self.report(
            span,
            format!("A parameter with the name '{name}' already exists."),
        );
    }

    pub fn report_cannot_assign(&mut self, span: TextSpan, name: &str) {
        self.report(
            span,
            format!("Variable '{name}' is read-only and cannot be assigned to."),
        );
    }

    pub fn report_cannot_convert(
        &mut self,
        span: TextSpan,
        from_type: impl fmt::Display,
        to_type: impl fmt::Display,
    ) {
        self.report(
            span,
            format!("Cannot convert type '{from_type}' to '{to_type}'."),
        );
    }

    pub fn report_wrong_argument_count(
        &mut self,
        span: TextSpan,
        name: &str,
        expected: usize,
        actual: usize,
    ) {
        self.report(
            span,
            format!("Function '{name}' requires {expected} arguments but was given {actual}."),
        );
    }

    pub fn report_expression_must_have_value(&mut self, span: TextSpan) {
        self.report(span, "Expression must have a value.".to_string());
    }

    pub fn report_all_paths_must_return(&mut self, span: TextSpan) {
        self.report(span, "All paths must return a value.".to_string());
    }

    pub fn report_invalid_return(&mut self, span: TextSpan) {
        self.report(
            span,
            "The 'return' keyword can only be used inside of functions.".to_string(),
        );
    }

    pub fn report_invalid_return_expression(&mut self, span: TextSpan, function_name: &str) {
        self.report(
            span,
            format!(
                "Since the function '{function_name}' does not return a value the 'return' keyword cannot be followed by an expression."
            ),
        );
    }

    pub fn report_missing_return_expression(&mut self, span: TextSpan, ty: impl fmt::Display) {
        self.report(span, format!("An expression of type '{ty}' is expected."));
    }
}

impl IntoIterator for DiagnosticBag {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_and_sort() {
        let mut bag = DiagnosticBag::new();
        bag.report_undefined_variable(TextSpan::new(10, 1), "b");
        bag.report_undefined_variable(TextSpan::new(2, 1), "a");
        bag.sort();

        let messages: Vec<_> = bag.diagnostics().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Variable 'a' does not exist.",
                "Variable 'b' does not exist.",
            ]
        );
        assert_eq!(bag.diagnostics()[0].span.start, 2);
    }

    #[test]
    fn test_message_wording() {
        let mut bag = DiagnosticBag::new();
        bag.report_undefined_binary_operator(TextSpan::new(0, 1), "*", "Int", "Bool");
        assert_eq!(
            bag.diagnostics()[0].message,
            "Binary operator '*' is not defined for types 'Int' and 'Bool'."
        );
    }
}
