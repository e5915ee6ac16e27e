//! # Built-in Functions
//!
//! Numeric implementations of the registry functions. Every function is
//! total over `f64`: out-of-domain inputs give NaN or an infinity, never an
//! error.

use paramexpr_parser::Function;

/// Apply a built-in function.
///
/// ## Parameters
///
/// - `function`: Function to apply
/// - `a`: First argument
/// - `b`: Second argument; ignored by one-argument functions
///
/// ## Example
///
/// ```rust
/// use paramexpr_eval::functions::apply;
/// use paramexpr_parser::Function;
///
/// assert_eq!(apply(Function::Mod, -1.0, 3.0), 2.0);
/// assert_eq!(apply(Function::Log, 8.0, 2.0), 3.0);
/// ```
pub fn apply(function: Function, a: f64, b: f64) -> f64 {
    match function {
        Function::Sin => a.sin(),
        Function::Cos => a.cos(),
        Function::Tan => a.tan(),
        Function::Asin => a.asin(),
        Function::Acos => a.acos(),
        Function::Atan => a.atan(),
        Function::Sqrt => a.sqrt(),
        Function::Abs => a.abs(),
        Function::Exp => a.exp(),
        Function::Ln => a.ln(),
        Function::Floor => a.floor(),
        Function::Ceil => a.ceil(),
        Function::Frac => a - a.floor(),
        Function::Pow => a.powf(b),
        Function::Log => log(a, b),
        Function::Min => a.min(b),
        Function::Max => a.max(b),
        Function::Mod => floor_mod(a, b),
    }
}

/// Logarithm of `a` in base `b`.
///
/// NaN when `a <= 0`, `b <= 0` or `b == 1`.
fn log(a: f64, b: f64) -> f64 {
    if a <= 0.0 || b <= 0.0 || b == 1.0 {
        return f64::NAN;
    }
    a.ln() / b.ln()
}

/// Floor-mod: the result has the sign of `b`. `b == 0` gives NaN.
fn floor_mod(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

// =============================================================================
// TESTS
// =============================================================================
