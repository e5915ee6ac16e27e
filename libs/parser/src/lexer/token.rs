//! # Tokens
//!
//! Token types for the expression lexer.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_parser::lexer::{Token, TokenKind};
//! use paramexpr_parser::Span;
//!
//! let token = Token::new(TokenKind::Number, Span::from_bytes(0, 2), "10".to_string());
//! assert_eq!(token.kind, TokenKind::Number);
//! ```

use crate::span::{Span, Spanned};

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text as written.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// Check if token is the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Number literal like `10` or `3.14`
    Number,
    /// Identifier like `t`, `sin` or `pi`
    Identifier,

    // Operators
    /// `+`
    Plus,
    /// `-` (unary or binary, resolved by the parser)
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,

    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Check if this is an arithmetic operator token.
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Caret)
    }

    /// Human-readable description used in error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Caret => "'^'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Comma => "','",
            Self::Eof => "end of expression",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
