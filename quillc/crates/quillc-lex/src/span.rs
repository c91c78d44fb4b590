//! Byte ranges of tokens in the source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the scanned source.
///
/// # Examples
///
/// ```
/// use quillc_lex::Span;
///
/// let source = "let x";
/// let span = Span::new(0, 3);
/// assert_eq!(span.slice(source), Some("let"));
/// assert_eq!(span.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a span from byte offsets.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at `offset`.
    #[inline]
    pub const fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Number of bytes covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the text this span covers in `source`.
    ///
    /// Returns `None` if the span is out of bounds or does not fall on
    /// character boundaries.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}
