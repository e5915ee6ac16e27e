//! Property-based tests for evaluation invariants using the `proptest` crate.

use proptest::prelude::*;

use paramexpr_eval::{evaluate, evaluate_str, Bindings, Expression};
use paramexpr_parser::parse;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Non-negative literal that prints without exponent notation.
fn arb_literal() -> impl Strategy<Value = f64> {
    0.0f64..1000.0
}

/// Arbitrary parameter value.
fn arb_param() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

/// Source text for a handful of expression shapes over `t`.
fn arb_source() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("cos(t)".to_string()),
        Just("sin(t) * t ^ 2 - 1 / t".to_string()),
        Just("mod(t, 3) + frac(t)".to_string()),
        Just("-t ^ 2 + log(abs(t) + 2, 2)".to_string()),
        Just("max(min(t, 1), -1) * pi".to_string()),
    ]
}

const TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// 1. Same tree, same bindings, bit-identical result
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn evaluation_is_deterministic(source in arb_source(), t in arb_param()) {
        let expr = parse(&source).unwrap();
        let bindings = Bindings::single("t", t);
        let a = evaluate(&expr, &bindings).unwrap();
        let b = evaluate(&expr, &bindings).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }
}

// ---------------------------------------------------------------------------
// 2. Subtraction groups to the left
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn subtraction_chain_groups_left(a in arb_literal(), b in arb_literal(), c in arb_literal()) {
        let source = format!("{} - {} - {}", a, b, c);
        let value = evaluate_str(&source, &Bindings::new()).unwrap();
        prop_assert_eq!(value.to_bits(), ((a - b) - c).to_bits());
    }
}

// ---------------------------------------------------------------------------
// 3. mod result lies between zero and the divisor
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn floor_mod_range(a in arb_param(), b in 0.5f64..50.0) {
        let bindings = Bindings::new().with("a", a).with("b", b);
        let m = evaluate_str("mod(a, b)", &bindings).unwrap();
        prop_assert!(m >= -TOL && m <= b + TOL, "mod({}, {}) = {}", a, b, m);

        let negative = evaluate_str("mod(a, -b)", &bindings).unwrap();
        prop_assert!(negative <= TOL && negative >= -b - TOL, "mod({}, {}) = {}", a, -b, negative);
    }
}

// ---------------------------------------------------------------------------
// 4. frac is in [0, 1]
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn frac_range(a in arb_param()) {
        let f = Expression::parse("frac(a)").unwrap().eval_with("a", a).unwrap();
        prop_assert!((0.0..=1.0).contains(&f), "frac({}) = {}", a, f);
    }
}

// ---------------------------------------------------------------------------
// 5. Printed trees parse back to the same tree
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn printed_tree_reparses(source in arb_source()) {
        let expr = parse(&source).unwrap();
        let reparsed = parse(&expr.to_string()).unwrap();
        prop_assert_eq!(reparsed, expr);
    }
}

// ---------------------------------------------------------------------------
// 6. Literals survive tokenizing
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn literal_round_trip(a in arb_literal()) {
        let value = evaluate_str(&format!("{}", a), &Bindings::new()).unwrap();
        prop_assert_eq!(value.to_bits(), a.to_bits());
    }
}
