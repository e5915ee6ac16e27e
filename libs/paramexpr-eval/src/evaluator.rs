//! # Expression Evaluation
//!
//! Evaluates expression trees to `f64` values.
//!
//! ## Responsibilities
//!
//! - Literal evaluation
//! - Constant and variable lookup (constants first, never shadowed)
//! - Binary and unary operations with IEEE-754 semantics
//! - Built-in function calls
//!
//! Evaluation is pure: the tree is only read, so one tree can be evaluated
//! from many threads with different bindings.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_eval::{evaluate, Bindings};
//! use paramexpr_parser::parse;
//!
//! let expr = parse("2 * t + 1").unwrap();
//! assert_eq!(evaluate(&expr, &Bindings::single("t", 3.0)).unwrap(), 7.0);
//! ```

use crate::bindings::{Bindings, Lookup};
use crate::error::EvalError;
use crate::functions;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use paramexpr_parser::{BinaryOp, Constant, Expr, Function, UnaryOp};
use stacker::maybe_grow;

// =============================================================================
// EXPRESSION EVALUATION
// =============================================================================

/// Evaluate an expression with the given bindings.
///
/// ## Parameters
///
/// - `expr`: Expression tree
/// - `bindings`: Variable values
///
/// ## Returns
///
/// The value, or [`EvalError::UnboundVariable`] for a variable that is
/// neither a constant nor bound
pub fn evaluate(expr: &Expr, bindings: &Bindings) -> Result<f64, EvalError> {
    evaluate_with(expr, bindings)
}

/// Evaluate an expression against any [`Lookup`].
///
/// ## Example
///
/// ```rust
/// use paramexpr_eval::evaluate_with;
/// use paramexpr_parser::parse;
///
/// let expr = parse("s * 10").unwrap();
/// assert_eq!(evaluate_with(&expr, &("s", 0.5)).unwrap(), 5.0);
/// ```
///
/// Parsed trees are depth limited; hand-built trees of any depth are walked
/// on a stack grown by `stacker` as needed.
pub fn evaluate_with<L: Lookup + ?Sized>(expr: &Expr, scope: &L) -> Result<f64, EvalError> {
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
        eval_node(expr, scope)
    })
}

fn eval_node<L: Lookup + ?Sized>(expr: &Expr, scope: &L) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Variable(name) => eval_variable(scope, name),
        Expr::Unary { op, operand } => {
            let value = evaluate_with(operand, scope)?;
            Ok(eval_unary_op(*op, value))
        }
        Expr::Binary { op, left, right } => {
            let l = evaluate_with(left, scope)?;
            let r = evaluate_with(right, scope)?;
            Ok(eval_binary_op(*op, l, r))
        }
        Expr::Call { function, args } => eval_call(scope, *function, args),
    }
}

// =============================================================================
// VARIABLE EVALUATION
// =============================================================================

/// Resolve a name: constants win over bindings.
fn eval_variable<L: Lookup + ?Sized>(scope: &L, name: &str) -> Result<f64, EvalError> {
    if let Some(constant) = Constant::from_name(name) {
        return Ok(constant.value());
    }
    scope.lookup(name).ok_or_else(|| EvalError::unbound(name))
}

// =============================================================================
// OPERATORS
// =============================================================================

/// Evaluate a unary operation.
fn eval_unary_op(op: UnaryOp, value: f64) -> f64 {
    match op {
        UnaryOp::Neg => -value,
        UnaryOp::Plus => value,
    }
}

/// Evaluate a binary operation.
///
/// Division by zero yields ±inf or NaN; a negative base with a
/// non-integer exponent yields NaN.
fn eval_binary_op(op: BinaryOp, l: f64, r: f64) -> f64 {
    match op {
        BinaryOp::Add => l + r,
        BinaryOp::Sub => l - r,
        BinaryOp::Mul => l * r,
        BinaryOp::Div => l / r,
        BinaryOp::Pow => l.powf(r),
    }
}

// =============================================================================
// BUILT-IN FUNCTIONS
// =============================================================================

/// Evaluate a function call.
///
/// Arguments are evaluated left to right, so the first unbound variable
/// reported is the leftmost one.
fn eval_call<L: Lookup + ?Sized>(
    scope: &L,
    function: Function,
    args: &[Expr],
) -> Result<f64, EvalError> {
    if args.len() != function.arity() {
        return Err(EvalError::WrongArgumentCount {
            function: function.name().to_string(),
            expected: function.arity(),
            found: args.len(),
        });
    }

    let mut values = [0.0; 2];
    for (slot, arg) in values.iter_mut().zip(args) {
        *slot = evaluate_with(arg, scope)?;
    }
    Ok(functions::apply(function, values[0], values[1]))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use paramexpr_parser::parse;
    use std::f64::consts::{E, PI, TAU};

    fn eval(source: &str, bindings: &Bindings) -> Result<f64, EvalError> {
        evaluate(&parse(source).unwrap(), bindings)
    }

    fn eval_const(source: &str) -> f64 {
        eval(source, &Bindings::new()).unwrap()
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval_const("1 + 2 * 3"), 7.0);
        assert_eq!(eval_const("(1 + 2) * 3"), 9.0);
        assert_eq!(eval_const("2 - 3 - 1"), -2.0);
        assert_eq!(eval_const("8 / 4 / 2"), 1.0);
    }

    #[test]
    fn test_power_rules() {
        assert_eq!(eval_const("2 ^ 3 ^ 2"), 512.0);
        assert_eq!(eval_const("-2 ^ 2"), -4.0);
        assert_eq!(eval_const("2 ^ -1"), 0.5);
        assert_eq!(eval_const("(-2) ^ 2"), 4.0);
    }

    #[test]
    fn test_constants() {
        assert_eq!(eval_const("pi"), PI);
        assert_eq!(eval_const("e"), E);
        assert_eq!(eval_const("tau"), TAU);
    }

    #[test]
    fn test_constants_are_not_shadowed() {
        let bindings = Bindings::new().with("pi", 3.0).with("e", 0.0);
        assert_eq!(eval("pi", &bindings).unwrap(), PI);
        assert_eq!(eval("e", &bindings).unwrap(), E);
    }

    #[test]
    fn test_variable_lookup() {
        let bindings = Bindings::new().with("u", 2.0).with("v", 5.0);
        assert_eq!(eval("u * v", &bindings).unwrap(), 10.0);
    }

    #[test]
    fn test_unbound_variable() {
        let err = eval("t + 1", &Bindings::new()).unwrap_err();
        assert_eq!(err, EvalError::unbound("t"));
    }

    #[test]
    fn test_leftmost_unbound_is_reported() {
        let err = eval("max(a, b)", &Bindings::new()).unwrap_err();
        assert_eq!(err, EvalError::unbound("a"));
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        assert_eq!(eval_const("1 / 0"), f64::INFINITY);
        assert_eq!(eval_const("-1 / 0"), f64::NEG_INFINITY);
        assert!(eval_const("0 / 0").is_nan());
    }

    #[test]
    fn test_nan_propagates() {
        assert!(eval_const("sqrt(-1) + 1").is_nan());
        assert!(eval_const("(-8) ^ 0.5").is_nan());
    }

    #[test]
    fn test_functions() {
        assert_eq!(eval_const("mod(-1, 3)"), 2.0);
        assert_relative_eq!(eval_const("log(8, 2)"), 3.0, epsilon = 1e-12);
        assert_eq!(eval_const("pow(2, 10)"), 1024.0);
        assert_eq!(eval_const("floor(-0.5) + ceil(0.5)"), 0.0);
        assert_relative_eq!(eval_const("sin(pi / 6)"), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unary_plus() {
        assert_eq!(eval_const("+3"), 3.0);
        assert_eq!(eval_const("-+3"), -3.0);
    }

    #[test]
    fn test_hand_built_call_with_wrong_arity() {
        let expr = Expr::call(Function::Max, vec![Expr::Number(1.0)]);
        let err = evaluate(&expr, &Bindings::new()).unwrap_err();
        assert!(matches!(
            err,
            EvalError::WrongArgumentCount { expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn test_hand_built_uppercase_variable() {
        // Bindings match names case-insensitively
        let expr = Expr::Variable("T".into());
        assert_eq!(evaluate(&expr, &Bindings::single("t", 1.5)).unwrap(), 1.5);
    }

    #[test]
    fn test_deep_hand_built_tree() {
        let mut expr = Expr::variable("t");
        for _ in 0..50_000 {
            expr = Expr::unary(UnaryOp::Neg, expr);
        }
        assert_eq!(evaluate(&expr, &Bindings::single("t", 2.0)).unwrap(), 2.0);

        // unwind by hand so the drop does not recurse
        while let Expr::Unary { operand, .. } = expr {
            expr = *operand;
        }
    }
}
