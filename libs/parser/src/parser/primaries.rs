//! # Primary Expression Parsing
//!
//! Parses primary expressions: numbers, variables, function calls and
//! parenthesized expressions.
//!
//! ## Responsibilities
//!
//! - Number literals: `42`, `3.14`
//! - Variables and constants: `t`, `pi`
//! - Calls to built-in functions: `sin(t)`, `mod(s, 1)`
//! - Parenthesized expressions: `(1 + 2)`
//!
//! Function names are resolved against the registry here, so unknown
//! functions and wrong argument counts are parse errors.

use super::Parser;
use crate::ast::Expr;
use crate::error::{ParseError, ParseErrorKind};
use crate::functions::Function;
use crate::lexer::{Token, TokenKind};

impl Parser {
    /// Parse primary expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// primary = number | identifier | call | "(" expression ")"
    /// ```
    pub(super) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind() {
            TokenKind::Number => {
                let token = self.advance();
                parse_number(&token)
            }

            // An identifier followed by `(` is a call; a bare function name
            // is just a variable and fails at evaluation if unbound.
            TokenKind::Identifier if self.peek_next_kind() == TokenKind::LParen => {
                self.parse_call()
            }
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expr::variable(&token.text))
            }

            TokenKind::LParen => {
                let open = self.advance().span;
                let expr = self.parse_expression()?;
                self.expect_closing(open, "')'")?;
                Ok(expr)
            }

            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parse a function call.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// call = identifier "(" expression ("," expression)* ")"
    /// ```
    ///
    /// The name is checked before the arguments, so `foo(` reports the
    /// unknown function rather than the missing `)`.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let name = self.advance();
        let function = Function::from_name(&name.text).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnknownFunction {
                    name: name.text.clone(),
                },
                name.span,
            )
        })?;

        let open = self.advance().span; // (
        let mut args = Vec::with_capacity(function.arity());

        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_closing(open, "',' or ')'")?;

        if args.len() != function.arity() {
            return Err(ParseError::new(
                ParseErrorKind::WrongArgumentCount {
                    function: function.name().to_string(),
                    expected: function.arity(),
                    found: args.len(),
                },
                name.span,
            ));
        }

        Ok(Expr::call(function, args))
    }
}

/// Convert a number token to its value.
fn parse_number(token: &Token) -> Result<Expr, ParseError> {
    let invalid = || {
        ParseError::new(
            ParseErrorKind::InvalidNumber {
                text: token.text.clone(),
            },
            token.span,
        )
    };
    let value: f64 = token.text.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(Expr::Number(value))
}

// =============================================================================
// TESTS
// =============================================================================
