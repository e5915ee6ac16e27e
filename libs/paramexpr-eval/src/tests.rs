//! # Evaluator Tests

use crate::{evaluate_str, Bindings, ErrorCategory, EvalError, Expression};
use std::f64::consts::PI;

#[test]
fn test_evaluate_helix_components() {
    let bindings = Bindings::single("t", PI);
    assert_eq!(evaluate_str("cos(t)", &bindings).unwrap(), -1.0);
    assert_eq!(evaluate_str("t/(2*pi)", &bindings).unwrap(), 0.5);
}

#[test]
fn test_evaluate_str_wraps_parse_errors() {
    let err = evaluate_str("sin(1,2)", &Bindings::new()).unwrap_err();
    assert!(matches!(err, EvalError::Parse(_)));
    assert_eq!(err.category(), ErrorCategory::Syntax);
}

#[test]
fn test_unknown_function_category() {
    let err = evaluate_str("foo(1)", &Bindings::new()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::UnknownFunction);
}

#[test]
fn test_unbound_category() {
    let err = evaluate_str("t", &Bindings::new()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::UnboundVariable);
    assert_eq!(err.to_string(), "Unbound variable 't'");
}

#[test]
fn test_bindings_are_case_insensitive() {
    let bindings = Bindings::single("T", 2.0);
    assert_eq!(evaluate_str("t * T", &bindings).unwrap(), 4.0);
}

#[test]
fn test_expression_reused_across_samples() {
    let expr = Expression::parse("t ^ 2").unwrap();
    let mut bindings = Bindings::single("t", 0.0);
    let mut values = Vec::new();
    for k in 0..4 {
        bindings.set("t", k as f64);
        values.push(expr.eval(&bindings).unwrap());
    }
    assert_eq!(values, [0.0, 1.0, 4.0, 9.0]);
}
