//! Byte spans of tokens within a scanned name.

use std::fmt;
use std::ops::Range;

/// Error when building a [`TokenSpan`] from offsets that cannot describe a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Start offset lies after end offset.
    #[error("token span start {start} is past its end {end}")]
    Inverted { start: usize, end: usize },
    /// Start and end coincide; tokens always cover at least one character.
    #[error("token span at {at} is empty")]
    Empty { at: usize },
}

/// Half-open byte range `[start, end)` of one token in the scanned text.
///
/// Spans produced by [`token_spans`](crate::token_spans) are never empty,
/// never overlap, and both offsets fall on `char` boundaries.
///
/// Fields are private so every span goes through [`TokenSpan::try_new`]:
///
/// ```compile_fail
/// let span = prom_name_split::TokenSpan { start: 5, end: 2 };
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TokenSpan {
    start: usize,
    end: usize,
}

impl TokenSpan {
    /// Create a span the caller already knows is non-empty and ordered.
    #[inline]
    pub(crate) fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "token span {start}..{end} must be non-empty");
        TokenSpan { start, end }
    }

    /// Try to create a token span from raw offsets.
    #[inline]
    pub fn try_new(start: usize, end: usize) -> Result<Self, SpanError> {
        match start.cmp(&end) {
            std::cmp::Ordering::Less => Ok(TokenSpan { start, end }),
            std::cmp::Ordering::Equal => Err(SpanError::Empty { at: start }),
            std::cmp::Ordering::Greater => Err(SpanError::Inverted { start, end }),
        }
    }

    /// Byte offset of the first character of the token.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the token.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false`; kept alongside [`TokenSpan::len`].
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Byte range of the gap between this span and a later one.
    ///
    /// `next` must start at or after `self.end`.
    #[inline]
    pub(crate) fn gap_to(&self, next: TokenSpan) -> Range<usize> {
        debug_assert!(self.end <= next.start, "spans {self}, {next} out of order");
        self.end..next.start
    }

    /// Slice the token out of the text it was scanned from.
    ///
    /// Returns `None` if the span does not fit `text` or does not sit on
    /// `char` boundaries.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.to_range())
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl TryFrom<Range<usize>> for TokenSpan {
    type Error = SpanError;

    fn try_from(range: Range<usize>) -> Result<Self, Self::Error> {
        TokenSpan::try_new(range.start, range.end)
    }
}

impl fmt::Debug for TokenSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
