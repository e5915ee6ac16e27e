//! # Operator Parsing
//!
//! Parses binary and unary operators using precedence climbing.
//!
//! ## Operator Precedence
//!
//! | Precedence | Operators | Associativity |
//! |------------|-----------|---------------|
//! | 1 | + - | Left |
//! | 2 | * / | Left |
//! | 3 | - + (unary) | Right |
//! | 4 | ^ | Right |
//!
//! `^` binds tighter than unary minus on its left but takes a unary
//! expression on its right, so `-2^2` is `-(2^2)` and `2^-1` is `2^(-1)`.
//!
//! ## Example
//!
//! ```rust,ignore
//! let expr = parser.parse_precedence(Precedence::Term)?;
//! ```

use super::Parser;
use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use config::constants::{MAX_NESTING_DEPTH, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

// =============================================================================
// PRECEDENCE
// =============================================================================

/// Binary operator precedence levels.
///
/// Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// Addition/subtraction: `+ -`
    Term = 1,
    /// Multiplication/division: `* /`
    Factor = 2,
    /// Operand of a factor: prefix operators and powers
    Unary = 3,
}

impl Precedence {
    /// Get precedence for a left-associative binary operator.
    ///
    /// ## Returns
    ///
    /// Precedence level if token is `+ - * /`, None otherwise. `^` is
    /// handled by [`Parser::parse_power`].
    pub(super) fn of_binary(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus | TokenKind::Minus => Some(Self::Term),
            TokenKind::Star | TokenKind::Slash => Some(Self::Factor),
            _ => None,
        }
    }

    /// Get next higher precedence level.
    ///
    /// Used for the right operand of left-associative operators.
    pub(super) fn next(self) -> Self {
        match self {
            Self::Term => Self::Factor,
            Self::Factor | Self::Unary => Self::Unary,
        }
    }
}

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        _ => None,
    }
}

// =============================================================================
// OPERATOR PARSING
// =============================================================================

impl Parser {
    /// Parse expression with minimum precedence.
    ///
    /// ## Parameters
    ///
    /// - `min_prec`: Minimum precedence level to parse
    pub(super) fn parse_precedence(&mut self, min_prec: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(prec) = Precedence::of_binary(self.peek_kind()) {
            if prec < min_prec {
                break;
            }
            let Some(op) = binary_op(self.advance().kind) else {
                break;
            };
            let right = self.parse_precedence(prec.next())?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix operators.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// unary = ("-" | "+") unary | power
    /// ```
    ///
    /// Every recursive path (prefix chains, exponents, groups and call
    /// arguments) passes through here, so this is where depth is limited.
    pub(super) fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.peek().span,
            ));
        }
        self.depth += 1;
        let result = maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.parse_unary_inner()
        });
        self.depth -= 1;
        result
    }

    fn parse_unary_inner(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            _ => return self.parse_power(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expr::unary(op, operand))
    }

    /// Parse an optional power.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// power = primary ("^" unary)?
    /// ```
    ///
    /// The exponent is a unary expression, which itself may be a power, so
    /// `2^3^2` nests to the right.
    pub(super) fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;

        if self.match_token(TokenKind::Caret) {
            let exponent = self.parse_unary()?;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }

        Ok(base)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use crate::lexer::Lexer;

    fn parse(source: &str) -> Result<Expr, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Parser::new(tokens).parse()
    }

    fn num(n: f64) -> Expr {
        Expr::Number(n)
    }

    #[test]
    fn test_precedence_order() {
        assert!(Precedence::Term < Precedence::Factor);
        assert!(Precedence::Factor < Precedence::Unary);
        assert_eq!(Precedence::Term.next(), Precedence::Factor);
        assert_eq!(Precedence::Factor.next(), Precedence::Unary);
    }

    #[test]
    fn test_caret_is_not_a_climbing_operator() {
        assert_eq!(Precedence::of_binary(TokenKind::Caret), None);
        assert_eq!(Precedence::of_binary(TokenKind::Slash), Some(Precedence::Factor));
    }

    #[test]
    fn test_mul_binds_tighter_than_add() {
        let expr = parse("1 + 2 * 3").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Add,
                num(1.0),
                Expr::binary(BinaryOp::Mul, num(2.0), num(3.0)),
            )
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let expr = parse("2 - 3 - 1").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Sub,
                Expr::binary(BinaryOp::Sub, num(2.0), num(3.0)),
                num(1.0),
            )
        );
    }

    #[test]
    fn test_division_is_left_associative() {
        let expr = parse("8 / 4 / 2").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Div,
                Expr::binary(BinaryOp::Div, num(8.0), num(4.0)),
                num(2.0),
            )
        );
    }

    #[test]
    fn test_power_is_right_associative() {
        let expr = parse("2 ^ 3 ^ 2").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Pow,
                num(2.0),
                Expr::binary(BinaryOp::Pow, num(3.0), num(2.0)),
            )
        );
    }

    #[test]
    fn test_negation_applies_after_power() {
        let expr = parse("-2 ^ 2").unwrap();
        assert_eq!(
            expr,
            Expr::unary(
                UnaryOp::Neg,
                Expr::binary(BinaryOp::Pow, num(2.0), num(2.0)),
            )
        );
    }

    #[test]
    fn test_negative_exponent() {
        let expr = parse("2 ^ -1").unwrap();
        assert_eq!(
            expr,
            Expr::binary(BinaryOp::Pow, num(2.0), Expr::unary(UnaryOp::Neg, num(1.0)))
        );
    }

    #[test]
    fn test_unary_plus_and_double_negation() {
        let expr = parse("+-t").unwrap();
        assert_eq!(
            expr,
            Expr::unary(UnaryOp::Plus, Expr::unary(UnaryOp::Neg, Expr::variable("t")))
        );
    }

    #[test]
    fn test_negated_factor_operand() {
        let expr = parse("2 * -t").unwrap();
        assert_eq!(
            expr,
            Expr::binary(BinaryOp::Mul, num(2.0), Expr::unary(UnaryOp::Neg, Expr::variable("t")))
        );
    }

    #[test]
    fn test_missing_right_operand() {
        let err = parse("2 *").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEnd { .. }));
        assert_eq!(err.column(), 3);
    }

    #[test]
    fn test_doubled_binary_operator() {
        let err = parse("1 + * 2").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                found: "'*'".into(),
                expected: "expression".into(),
            }
        );
        assert_eq!(err.column(), 4);
    }

    #[test]
    fn test_dangling_caret() {
        let err = parse("t ^").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_prefix_chain_depth_limit() {
        let within = format!("{}t", "-".repeat(MAX_NESTING_DEPTH - 1));
        assert!(parse(&within).is_ok());

        let too_deep = format!("{}t", "-".repeat(MAX_NESTING_DEPTH));
        let err = parse(&too_deep).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::NestingTooDeep {
                limit: MAX_NESTING_DEPTH
            }
        );
        assert_eq!(err.column(), MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_power_chain_depth_limit() {
        let within = format!("{}2", "2^".repeat(MAX_NESTING_DEPTH - 1));
        assert!(parse(&within).is_ok());

        let too_deep = format!("{}2", "2^".repeat(MAX_NESTING_DEPTH));
        assert!(matches!(
            parse(&too_deep).unwrap_err().kind,
            ParseErrorKind::NestingTooDeep { .. }
        ));
    }
}
