//! # Evaluation Errors
//!
//! Error types for expression parsing and evaluation.

use paramexpr_parser::ParseError;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while preparing or evaluating an expression.
///
/// Numeric anomalies (division by zero, `sqrt(-1)`, overflow) are not
/// errors; they produce IEEE-754 infinities and NaN.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Tokenize or parse error from earlier stage.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Variable that is neither a constant nor bound.
    #[error("Unbound variable '{name}'")]
    UnboundVariable {
        /// Variable name.
        name: String,
    },

    /// Hand-built call node whose argument count does not match the
    /// function. Parsed trees never produce this.
    #[error("Wrong number of arguments for {function}: expected {expected}, got {found}")]
    WrongArgumentCount {
        /// Function name.
        function: String,
        /// Declared arity.
        expected: usize,
        /// Arguments present in the node.
        found: usize,
    },
}

impl EvalError {
    /// Create unbound variable error.
    pub fn unbound(name: &str) -> Self {
        Self::UnboundVariable {
            name: name.to_string(),
        }
    }

    /// Coarse classification for reporting to a user.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use paramexpr_eval::{Expression, ErrorCategory};
    ///
    /// let error = Expression::parse("foo(t)").unwrap_err();
    /// assert_eq!(paramexpr_eval::EvalError::from(error).category(), ErrorCategory::UnknownFunction);
    /// ```
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(e) if e.is_unknown_function() => ErrorCategory::UnknownFunction,
            Self::Parse(_) | Self::WrongArgumentCount { .. } => ErrorCategory::Syntax,
            Self::UnboundVariable { .. } => ErrorCategory::UnboundVariable,
        }
    }
}

/// Error classes a host shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed text or wrong argument count.
    Syntax,
    /// Call to a function outside the registry.
    UnknownFunction,
    /// Variable with no value.
    UnboundVariable,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Syntax => "syntax error",
            Self::UnknownFunction => "unknown function",
            Self::UnboundVariable => "unbound variable",
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
