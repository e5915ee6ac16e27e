//! # Expression Lexer
//!
//! Tokenizes expression text such as `sin(u)*v` into tokens.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("cos(t)").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::{ParseError, ParseErrorKind};
use crate::span::{Position, Span};

// =============================================================================
// LEXER
// =============================================================================

/// Expression lexer.
///
/// Converts source text into a stream of tokens terminated by
/// [`TokenKind::Eof`]. Whitespace separates tokens and is otherwise ignored.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens including the EOF token, or the first unrecognized
    /// character as a [`ParseErrorKind::UnexpectedCharacter`] error.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use paramexpr_parser::lexer::{Lexer, TokenKind};
    ///
    /// let tokens = Lexer::new("2 ^ t").tokenize().unwrap();
    /// assert!(tokens.last().map(|t| t.kind == TokenKind::Eof).unwrap_or(false));
    /// ```
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        loop {
            self.cursor.advance_while(char::is_whitespace);
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        let eof_pos = self.cursor.position();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(eof_pos, eof_pos),
            String::new(),
        ));

        Ok(self.tokens)
    }

    /// Scan a single token.
    fn scan_token(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.position();
        let c = match self.cursor.advance() {
            Some(c) => c,
            None => return Ok(()),
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,

            '0'..='9' => {
                self.scan_number();
                TokenKind::Number
            }

            'a'..='z' | 'A'..='Z' | '_' => {
                self.cursor
                    .advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
                TokenKind::Identifier
            }

            other => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedCharacter { character: other },
                    Span::new(start, self.cursor.position()),
                ));
            }
        };

        self.push(kind, start);
        Ok(())
    }

    /// Scan the rest of a number literal (first digit already consumed).
    ///
    /// Accepts `digits ('.' digits)?`; there is no exponent notation. A dot
    /// that is not followed by a digit is left for the next token, where it
    /// is reported as an unexpected character.
    fn scan_number(&mut self) {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        let fraction_follows = self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit());
        if fraction_follows {
            self.cursor.advance(); // .
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }
    }

    fn push(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        let text = self.cursor.slice_from(start);
        self.tokens
            .push(Token::new(kind, Span::new(start, end), text.to_string()));
    }
}

/// Tokenize `source` in one call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source).tokenize()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_call() {
        let tokens = tokenize("sin(t)").unwrap();

        // sin, (, t, ), EOF = 5 tokens
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "sin");
        assert_eq!(tokens[1].kind, TokenKind::LParen);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].text, "t");
        assert_eq!(tokens[3].kind, TokenKind::RParen);
        assert_eq!(tokens[4].kind, TokenKind::Eof);
    }

    #[test]
    fn test_tokenize_operators() {
        assert_eq!(
            kinds("+ - * / ^ ,"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Caret,
                TokenKind::Comma,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenize_float() {
        let tokens = tokenize("3.14").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "3.14");
    }

    #[test]
    fn test_whitespace_does_not_join_tokens() {
        let tokens = tokenize("  2 \t3\n").unwrap();
        assert_eq!(tokens[0].text, "2");
        assert_eq!(tokens[1].text, "3");
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_identifier_with_digits_and_underscore() {
        let tokens = tokenize("m03 + _k2").unwrap();
        assert_eq!(tokens[0].text, "m03");
        assert_eq!(tokens[2].text, "_k2");
    }

    #[test]
    fn test_number_then_identifier() {
        // "2t" lexes as number then identifier; the parser rejects the pair
        assert_eq!(
            kinds("2t"),
            vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_minus_is_single_token_kind() {
        assert_eq!(
            kinds("-t - 1"),
            vec![
                TokenKind::Minus,
                TokenKind::Identifier,
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("t % 2").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter { character: '%' });
        assert_eq!(err.span.start.column, 2);
    }

    #[test]
    fn test_trailing_dot_is_rejected() {
        let err = tokenize("1.").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter { character: '.' });
        assert_eq!(err.span.start.byte, 1);
    }

    #[test]
    fn test_no_exponent_notation() {
        // "1e5" is the number 1 followed by the identifier e5
        let tokens = tokenize("1e5").unwrap();
        assert_eq!(tokens[0].text, "1");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "e5");
    }

    #[test]
    fn test_eof_position_after_trailing_space() {
        let tokens = tokenize("t  ").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Eof);
        assert_eq!(tokens[1].span.start.byte, 3);
    }
}
