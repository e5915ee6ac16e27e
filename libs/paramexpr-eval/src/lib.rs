//! # Parametric Expression Eval
//!
//! Evaluates parsed expressions over variable bindings.
//!
//! ## Architecture
//!
//! ```text
//! Source → paramexpr-parser (Expr) → paramexpr-eval (f64) → paramexpr-mesh
//! ```
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_eval::{evaluate_str, Bindings};
//!
//! let value = evaluate_str("mod(t, 1)", &Bindings::single("t", -0.25)).unwrap();
//! assert_eq!(value, 0.75);
//! ```

pub mod bindings;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod functions;

// Re-export public API
pub use bindings::{Bindings, Lookup};
pub use error::{ErrorCategory, EvalError};
pub use evaluator::{evaluate, evaluate_with};
pub use expression::Expression;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse and evaluate expression text in one step.
///
/// For repeated evaluation parse once with [`Expression::parse`] instead.
///
/// ## Parameters
///
/// - `source`: Expression text
/// - `bindings`: Variable values
///
/// ## Returns
///
/// `Result<f64, EvalError>` - parse errors are wrapped in [`EvalError::Parse`]
pub fn evaluate_str(source: &str, bindings: &Bindings) -> Result<f64, EvalError> {
    let expr = paramexpr_parser::parse(source)?;
    evaluate(&expr, bindings)
}

#[cfg(test)]
mod tests;
