// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Source positions and the span algebra used by every AST assembler.
//!
//! A [`Span`] is a pair of [`Position`]s taken from the lexer. Spans of
//! composite nodes are never invented: they are always the union of the
//! spans of the node's first and last constituents, computed with the
//! helpers in this module at the moment the node is built.
//!
//! ```
//! use tugtool_python_ast::{cover, Position, Span};
//!
//! let f = Span::new(Position::new(0, 1, 0), Position::new(1, 1, 1));
//! let rpar = Span::new(Position::new(3, 1, 3), Position::new(4, 1, 4));
//! let call = cover(&f, &rpar);
//! assert_eq!(call.start.offset, 0);
//! assert_eq!(call.end.offset, 4);
//! ```

use serde::Serialize;
use std::fmt;

/// A single point in the source text.
///
/// `offset` is a byte offset into the UTF-8 source. `line` is 1-indexed and
/// `column` is 0-indexed, matching the lexer that produces tokens.
///
/// Positions order by byte offset first, so comparisons between positions
/// taken from the same source are always consistent with their line/column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open source range `[start, end)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    /// Panics in debug builds if `start` lies after `end`.
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start <= end,
            "Span start ({}) must be <= end ({})",
            start.offset,
            end.offset
        );
        Span { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Check if this span contains another span entirely.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The smallest span covering both `self` and `other`.
    ///
    /// Operand order does not matter.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Byte range of the span, for slicing the source text.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Anything that occupies a range of source text.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl<T: Spanned + ?Sized> Spanned for &T {
    fn span(&self) -> Span {
        (**self).span()
    }
}

impl<T: Spanned + ?Sized> Spanned for Box<T> {
    fn span(&self) -> Span {
        (**self).span()
    }
}

/// Span from the start of `first` through the end of `last`.
pub fn cover<A: Spanned + ?Sized, B: Spanned + ?Sized>(first: &A, last: &B) -> Span {
    first.span().cover(last.span())
}

/// Like [`cover`], but an absent `last` contributes nothing.
pub fn cover_opt<A: Spanned + ?Sized, B: Spanned>(first: &A, last: Option<&B>) -> Span {
    match last {
        Some(last) => cover(first, last),
        None => first.span(),
    }
}

/// Span over an ordered sequence: the union of its first and last items.
///
/// Returns `None` for an empty slice.
pub fn cover_all<T: Spanned>(items: &[T]) -> Option<Span> {
    match (items.first(), items.last()) {
        (Some(first), Some(last)) => Some(cover(first, last)),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) fn test_span(start: usize, end: usize) -> Span {
    Span::new(
        Position::new(start, 1, start as u32),
        Position::new(end, 1, end as u32),
    )
}
