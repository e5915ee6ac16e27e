//! # Parse Errors
//!
//! Error types for the expression tokenizer and parser. Every error carries
//! the span of the offending character or token so a host can highlight it.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_parser::parse;
//!
//! let error = parse("sin(t").unwrap_err();
//! println!("{}", error);
//! ```

use crate::span::Span;
use std::fmt;
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create unexpected token error.
    ///
    /// ## Parameters
    ///
    /// - `found`: Token that was found
    /// - `expected`: Description of expected token
    pub fn unexpected_token(found: &str, expected: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            span,
        )
    }

    /// Create unexpected end-of-input error.
    pub fn unexpected_end(expected: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEnd {
                expected: expected.to_string(),
            },
            span,
        )
    }

    /// True for an identifier called as a function that has no implementation.
    pub fn is_unknown_function(&self) -> bool {
        matches!(self.kind, ParseErrorKind::UnknownFunction { .. })
    }

    /// True for grammar violations, including wrong argument counts.
    pub fn is_syntax(&self) -> bool {
        !self.is_unknown_function()
    }

    /// Character column where the problem starts.
    pub fn column(&self) -> usize {
        self.span.start.column
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at column {}", self.kind, self.span.start.column)
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Character the tokenizer does not recognize, e.g. `t % 2`.
    #[error("unexpected character '{character}'")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },

    /// Found unexpected token, e.g. a missing operand in `1 + * 2`.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        /// Token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Input ended while more was expected, e.g. `2 *`.
    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd {
        /// Description of what was expected.
        expected: String,
    },

    /// Opening parenthesis without a matching `)`.
    #[error("unclosed '('")]
    UnclosedParen,

    /// `)` without a matching opening parenthesis.
    #[error("unmatched ')'")]
    UnmatchedParen,

    /// Complete expression followed by more tokens, e.g. `t t`.
    #[error("unexpected {found} after end of expression")]
    TrailingInput {
        /// Token that was found.
        found: String,
    },

    /// Nothing but whitespace.
    #[error("expression is empty")]
    EmptyExpression,

    /// Number literal that does not fit an `f64`.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Operators, exponents or groups nested deeper than the parser allows.
    #[error("expression nested too deeply (limit {limit})")]
    NestingTooDeep {
        /// Maximum nesting depth.
        limit: usize,
    },

    /// Identifier used as a function call with no known implementation.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// Function name as written.
        name: String,
    },

    /// Known function called with the wrong number of arguments.
    #[error("function '{function}' expects {expected} argument{}, got {found}", plural_suffix(.expected))]
    WrongArgumentCount {
        /// Function name.
        function: String,
        /// Declared arity.
        expected: usize,
        /// Arguments supplied.
        found: usize,
    },
}

fn plural_suffix(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

// =============================================================================
// TESTS
// =============================================================================
