//! # Expression Parsing
//!
//! Facade module for parsing expressions.
//!
//! ## Module Structure
//!
//! - `operators` - Binary and unary operators with precedence, powers
//! - `primaries` - Numbers, variables, calls and parenthesized groups
//!
//! ## Grammar
//!
//! ```text
//! expression = term
//! term       = factor (("+" | "-") factor)*
//! factor     = unary (("*" | "/") unary)*
//! unary      = ("-" | "+") unary | power
//! power      = primary ("^" unary)?
//! primary    = number | identifier | call | "(" expression ")"
//! call       = identifier "(" expression ("," expression)* ")"
//! ```

use super::operators::Precedence;
use super::Parser;
use crate::ast::Expr;
use crate::error::ParseError;

impl Parser {
    /// Parse an expression.
    ///
    /// Entry point for expression parsing, also used for call arguments and
    /// parenthesized groups.
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_precedence(Precedence::Term)
    }
}

// =============================================================================
// TESTS
// =============================================================================
