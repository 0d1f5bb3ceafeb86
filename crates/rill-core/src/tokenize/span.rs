// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! Tokens and diagnostics carry a [`Span`] of byte offsets into the source
//! text. A recognized token additionally carries a [`SourceInfo`], which
//! records the trivia on either side of it; consecutive tokens' source
//! infos partition the consumed input exactly.

use std::ops::Range;

/// A span of source code, represented as a byte offset range.
///
/// # Examples
///
/// ```
/// use rill_core::tokenize::Span;
///
/// let span = Span::new(0, 10);
/// assert_eq!(span.start(), 0);
/// assert_eq!(span.end(), 10);
/// assert_eq!(span.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: u32,
    end: u32,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at the given offset.
    #[must_use]
    pub const fn empty_at(offset: u32) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the start byte offset.
    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Returns the end byte offset (exclusive).
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Creates a span that covers both `self` and `other`.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Converts to a `Range<usize>` for indexing into source text.
    #[must_use]
    pub const fn as_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Range<u32>> for Span {
    fn from(range: Range<u32>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Range<usize>> for Span {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start as u32, range.end as u32)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.as_range()
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start as usize, span.len() as usize).into()
    }
}

/// The source ranges surrounding a recognized token.
///
/// `leading` covers the trivia scanned before the token, `token` the token
/// text itself, and `trailing` the trivia scanned after it. The three spans
/// are always adjacent: `leading.end() == token.start()` and
/// `token.end() == trailing.start()`. Across consecutive tokens, one
/// token's `trailing.end()` equals the next token's `leading.start()`, so
/// trivia is never shared, duplicated, or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceInfo {
    leading: Span,
    token: Span,
    trailing: Span,
}

impl SourceInfo {
    /// Creates source info from three adjacent spans.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the spans are not adjacent.
    #[must_use]
    pub fn new(leading: Span, token: Span, trailing: Span) -> Self {
        debug_assert_eq!(leading.end(), token.start());
        debug_assert_eq!(token.end(), trailing.start());
        Self {
            leading,
            token,
            trailing,
        }
    }

    /// Returns the span of the leading trivia.
    #[must_use]
    pub const fn leading(self) -> Span {
        self.leading
    }

    /// Returns the span of the token text.
    #[must_use]
    pub const fn token(self) -> Span {
        self.token
    }

    /// Returns the span of the trailing trivia.
    #[must_use]
    pub const fn trailing(self) -> Span {
        self.trailing
    }

    /// Returns the full span from the start of the leading trivia to the
    /// end of the trailing trivia.
    #[must_use]
    pub const fn full(self) -> Span {
        Span::new(self.leading.start(), self.trailing.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_new_and_accessors() {
        let span = Span::new(5, 15);
        assert_eq!(span.start(), 5);
        assert_eq!(span.end(), 15);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn span_empty() {
        let span = Span::empty_at(5);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn span_merge() {
        let a = Span::new(5, 10);
        let b = Span::new(15, 20);
        let merged = a.merge(b);
        assert_eq!(merged.start(), 5);
        assert_eq!(merged.end(), 20);
    }

    #[test]
    fn span_from_range() {
        let span: Span = (0u32..10u32).into();
        assert_eq!(span.start(), 0);
        assert_eq!(span.end(), 10);

        let span: Span = (0usize..10usize).into();
        assert_eq!(span.start(), 0);
        assert_eq!(span.end(), 10);
    }

    #[test]
    fn source_info_accessors() {
        let info = SourceInfo::new(Span::new(0, 2), Span::new(2, 5), Span::new(5, 6));
        assert_eq!(info.leading(), Span::new(0, 2));
        assert_eq!(info.token(), Span::new(2, 5));
        assert_eq!(info.trailing(), Span::new(5, 6));
        assert_eq!(info.full(), Span::new(0, 6));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "assertion")]
    fn source_info_rejects_gaps() {
        let _ = SourceInfo::new(Span::new(0, 2), Span::new(3, 5), Span::new(5, 6));
    }
}
