//! # Compiled Expression
//!
//! An expression parsed once and evaluated many times. Samplers hold one
//! `Expression` per component and evaluate it at every sample; the text is
//! never re-parsed inside a loop.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_eval::Expression;
//!
//! let x: Expression = "cos(t)".parse().unwrap();
//! let samples: Vec<f64> = (0..4)
//!     .map(|k| x.eval_with("t", k as f64).unwrap())
//!     .collect();
//! assert_eq!(samples[0], 1.0);
//! ```

use crate::bindings::{Bindings, Lookup};
use crate::error::EvalError;
use crate::evaluator::evaluate_with;
use paramexpr_parser::{parse, Constant, Expr, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source text together with its parsed tree.
///
/// Serializes as the source text; deserializing parses it again, so an
/// invalid string fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Expression {
    source: String,
    tree: Expr,
}

impl Expression {
    /// Parse an expression.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tree = parse(source)?;
        Ok(Self {
            source: source.to_string(),
            tree,
        })
    }

    /// Expression that evaluates to `value`.
    ///
    /// The tree is the one the source text parses to, so the expression
    /// survives a round trip through its text. Negative values are a
    /// negated literal; non-finite values are spelled as divisions
    /// (`0 / 0`, `1 / 0`, `-1 / 0`).
    pub fn constant(value: f64) -> Self {
        let tree = literal_tree(value);
        Self {
            source: tree.to_string(),
            tree,
        }
    }

    /// Source text as given to [`Expression::parse`].
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed tree.
    pub fn tree(&self) -> &Expr {
        &self.tree
    }

    /// Evaluate with a set of bindings.
    pub fn eval(&self, bindings: &Bindings) -> Result<f64, EvalError> {
        evaluate_with(&self.tree, bindings)
    }

    /// Evaluate with a single variable bound, without allocating.
    pub fn eval_with(&self, name: &str, value: f64) -> Result<f64, EvalError> {
        evaluate_with(&self.tree, &(name, value))
    }

    /// Evaluate against any [`Lookup`].
    pub fn eval_in<L: Lookup + ?Sized>(&self, scope: &L) -> Result<f64, EvalError> {
        evaluate_with(&self.tree, scope)
    }

    /// Variables the expression needs bound, excluding constants; sorted.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use paramexpr_eval::Expression;
    ///
    /// let expr = Expression::parse("cos(u) * r + pi").unwrap();
    /// assert_eq!(expr.free_variables(), ["r", "u"]);
    /// ```
    pub fn free_variables(&self) -> Vec<&str> {
        self.tree
            .variables()
            .into_iter()
            .filter(|name| Constant::from_name(name).is_none())
            .collect()
    }

    /// Check that every free variable is in `allowed`.
    ///
    /// ## Returns
    ///
    /// [`EvalError::UnboundVariable`] naming the first (alphabetical)
    /// variable outside `allowed`
    pub fn check_scope(&self, allowed: &[&str]) -> Result<(), EvalError> {
        match self
            .free_variables()
            .into_iter()
            .find(|name| !allowed.iter().any(|a| a.eq_ignore_ascii_case(name)))
        {
            Some(name) => Err(EvalError::unbound(name)),
            None => Ok(()),
        }
    }

    /// True if the expression uses no variables.
    pub fn is_constant(&self) -> bool {
        self.free_variables().is_empty()
    }
}

/// Tree the parser produces for the spelling of `value`.
fn literal_tree(value: f64) -> Expr {
    use paramexpr_parser::{BinaryOp, UnaryOp};

    if value.is_nan() {
        return Expr::binary(BinaryOp::Div, Expr::Number(0.0), Expr::Number(0.0));
    }
    if value.is_infinite() {
        let one = if value > 0.0 {
            Expr::Number(1.0)
        } else {
            Expr::unary(UnaryOp::Neg, Expr::Number(1.0))
        };
        return Expr::binary(BinaryOp::Div, one, Expr::Number(0.0));
    }
    if value.is_sign_negative() {
        return Expr::unary(UnaryOp::Neg, Expr::Number(-value));
    }
    Expr::Number(value)
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Expression {
    type Error = ParseError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        let tree = parse(&source)?;
        Ok(Self { source, tree })
    }
}

impl From<Expression> for String {
    fn from(expr: Expression) -> Self {
        expr.source
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// =============================================================================
// TESTS
// =============================================================================
