//! # Expression Parser
//!
//! Recursive descent parser for parametric math expressions.
//! Produces an [`Expr`] tree or the first [`ParseError`].
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_parser::parser::Parser;
//! use paramexpr_parser::lexer::Lexer;
//!
//! let tokens = Lexer::new("cos(t) * 2").tokenize().unwrap();
//! let expr = Parser::new(tokens).parse().unwrap();
//! assert_eq!(expr.to_string(), "cos(t) * 2");
//! ```

mod expressions;
mod operators;
mod primaries;

use crate::ast::Expr;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser over a token stream.
///
/// The parser stops at the first error; an expression field is either fully
/// valid or rejected, so there is no recovery.
pub struct Parser {
    /// Token stream, always terminated by EOF.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Nesting level of the unary expression being parsed.
    depth: usize,
}

impl Parser {
    /// Create a new parser.
    ///
    /// ## Parameters
    ///
    /// - `tokens`: Tokens from lexer; an EOF token is appended if missing
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens.last().map(|t| t.span.end).unwrap_or_default();
            tokens.push(Token::new(TokenKind::Eof, Span::new(end, end), String::new()));
        }
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parse the whole token stream as one expression.
    ///
    /// ## Returns
    ///
    /// The expression tree, or the first error found. Empty input gives
    /// [`ParseErrorKind::EmptyExpression`]; tokens left over after a
    /// complete expression give [`ParseErrorKind::TrailingInput`], or
    /// [`ParseErrorKind::UnmatchedParen`] when the leftover is `)`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use paramexpr_parser::{parse, ParseErrorKind};
    ///
    /// assert_eq!(parse("  ").unwrap_err().kind, ParseErrorKind::EmptyExpression);
    /// assert_eq!(parse("t)").unwrap_err().kind, ParseErrorKind::UnmatchedParen);
    /// ```
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        if self.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyExpression,
                self.peek().span,
            ));
        }

        let expr = self.parse_expression()?;

        let token = self.peek();
        match token.kind {
            TokenKind::Eof => Ok(expr),
            TokenKind::RParen => Err(ParseError::new(ParseErrorKind::UnmatchedParen, token.span)),
            _ => Err(ParseError::new(
                ParseErrorKind::TrailingInput {
                    found: describe(token),
                },
                token.span,
            )),
        }
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&self) -> &Token {
        // `new` guarantees a trailing EOF, and `advance` never moves past it
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Get current token kind.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Get the kind of the token after the current one.
    fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.current + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Check if current token matches kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Check if at end of input.
    fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Advance to next token.
    ///
    /// ## Returns
    ///
    /// The token that was consumed
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Try to consume token if it matches.
    ///
    /// ## Returns
    ///
    /// true if token was consumed, false otherwise
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the `)` closing the group opened at `open`.
    ///
    /// Running out of input reports the opening parenthesis as unclosed;
    /// any other token is unexpected.
    fn expect_closing(&mut self, open: Span, expected: &str) -> Result<(), ParseError> {
        match self.peek_kind() {
            TokenKind::RParen => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Err(ParseError::new(ParseErrorKind::UnclosedParen, open)),
            _ => Err(self.unexpected(expected)),
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Error for the current token when `expected` was wanted.
    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        if token.is_eof() {
            ParseError::unexpected_end(expected, token.span)
        } else {
            ParseError::unexpected_token(&describe(token), expected, token.span)
        }
    }
}

/// Describe a token for an error message, quoting its text where the kind
/// alone is not enough.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Number | TokenKind::Identifier => {
            format!("{} '{}'", token.kind.display(), token.text)
        }
        kind => kind.display().to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
