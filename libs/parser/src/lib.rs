//! # Parametric Expression Parser
//!
//! Tokenizer and parser for the scalar formulas that drive parametric
//! curves, surfaces and transformation matrices, such as `cos(t)` or
//! `sin(u) * v`.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Expr
//! ```
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_parser::parse;
//!
//! let expr = parse("t / (2 * pi)").unwrap();
//! assert_eq!(expr.to_string(), "t / (2 * pi)");
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the pipeline:
//!
//! ```text
//! paramexpr-parser → paramexpr-eval → paramexpr-mesh
//! ```

pub mod ast;
pub mod error;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod span;

// Re-export public API
pub use ast::{BinaryOp, Expr, UnaryOp};
pub use error::{ParseError, ParseErrorKind};
pub use functions::{Constant, Function, CONSTANTS, FUNCTIONS};
pub use span::{Position, Span, Spanned};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse an expression string into an expression tree.
///
/// This is the main entry point for the parser.
///
/// ## Parameters
///
/// - `source`: Expression text
///
/// ## Returns
///
/// The tree, or the first tokenize/parse error with its position
///
/// ## Example
///
/// ```rust
/// use paramexpr_parser::parse;
///
/// let expr = parse("2 ^ 3 ^ 2").unwrap();
/// assert_eq!(expr.node_count(), 5);
///
/// let error = parse("sin(1, 2)").unwrap_err();
/// assert!(error.is_syntax());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize()?;
    parser::Parser::new(tokens).parse()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Default helix components parse.
    #[test]
    fn test_parse_helix() {
        for source in ["cos(t)", "sin(t)", "t/(2*pi)"] {
            assert!(parse(source).is_ok(), "failed on {}", source);
        }
    }

    /// Tokenizer errors come through `parse`.
    #[test]
    fn test_tokenizer_error() {
        let err = parse("t # 2").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter { character: '#' });
    }

    /// Printing then re-parsing gives the same tree.
    #[test]
    fn test_display_reparses() {
        for source in ["-2^2", "(1 - t) * (1 + t)", "2^-s", "-(t - 1) / 2", "log(8, 2)"] {
            let expr = parse(source).unwrap();
            let reparsed = parse(&expr.to_string()).unwrap();
            assert_eq!(reparsed, expr, "{} printed as {}", source, expr);
        }
    }

    /// Columns count characters, not bytes.
    #[test]
    fn test_error_column_after_non_ascii_whitespace() {
        // U+00A0 is whitespace and two bytes long
        let err = parse("t\u{a0}$").unwrap_err();
        assert_eq!(err.span.start.column, 2);
        assert_eq!(err.span.start.byte, 3);
    }
}
