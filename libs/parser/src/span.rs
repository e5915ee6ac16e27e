//! # Source Span
//!
//! Locations inside an expression string, used to highlight errors in the
//! text field the expression was typed into.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_parser::{Position, Span};
//!
//! let span = Span::new(Position::new(4, 4), Position::new(7, 7));
//! assert_eq!(span.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// POSITION
// =============================================================================

/// A point in the source text.
///
/// `byte` indexes the UTF-8 string, `column` counts characters, which is what
/// a text widget uses to place a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset (0-indexed).
    pub byte: usize,
    /// Character column (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, column: usize) -> Self {
        Self { byte, column }
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A half-open range `[start, end)` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a span between two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from byte offsets, for ASCII input where bytes and
    /// columns coincide.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use paramexpr_parser::Span;
    ///
    /// let span = Span::from_bytes(2, 5);
    /// assert_eq!(span.start.column, 2);
    /// ```
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, start),
            end: Position::new(end, end),
        }
    }

    /// Zero-width span at the start of the text.
    pub const fn zero() -> Self {
        Self::from_bytes(0, 0)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// True if the span covers no text (e.g. the end-of-input marker).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Trait for values that carry a source span.
pub trait Spanned {
    /// Get the source span.
    fn span(&self) -> Span;
}

// =============================================================================
// TESTS
// =============================================================================
