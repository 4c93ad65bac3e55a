use crate::error::Mismatch;
use crate::parsed::Parsed;
use crate::parser::Parser;
use std::fmt;

/// Positioned, read-only view over the text being parsed
///
/// An `Input` pairs the full source with a byte offset. Derived views share
/// the same underlying source and never copy or mutate it, so handing cursors
/// around is free. Two inputs compare equal when their remaining content is
/// equal, regardless of where in their sources they sit.
#[derive(Debug, Clone, Copy)]
pub struct Input<'src> {
    source: &'src str,
    offset: usize,
}

impl<'src> Input<'src> {
    /// Create a cursor at position zero over the full content
    pub fn new(source: &'src str) -> Self {
        Input { source, offset: 0 }
    }

    /// The content still ahead of the cursor
    pub fn remaining(&self) -> &'src str {
        &self.source[self.offset..]
    }

    /// Byte offset of the cursor within the original source
    pub fn position(&self) -> usize {
        self.offset
    }

    /// True when nothing remains to be parsed
    pub fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Number of bytes remaining
    pub fn len(&self) -> usize {
        self.source.len() - self.offset
    }

    /// Derived view `bytes` further into the same source
    ///
    /// `bytes` must land on a character boundary of the remaining content.
    pub fn advance(self, bytes: usize) -> Self {
        debug_assert!(self.source.is_char_boundary(self.offset + bytes));
        Input {
            source: self.source,
            offset: self.offset + bytes,
        }
    }

    /// Split off the next element (one `char`), returning the matched slice
    /// and the view after it, or `None` at end of input
    pub fn split_first(&self) -> Option<(&'src str, Input<'src>)> {
        let first = self.remaining().chars().next()?;
        let width = first.len_utf8();
        Some((&self.remaining()[..width], self.advance(width)))
    }

    /// The slice consumed between this cursor and a later cursor over the
    /// same source
    pub fn span_until(&self, later: Input<'src>) -> &'src str {
        debug_assert!(std::ptr::eq(self.source, later.source));
        debug_assert!(later.offset >= self.offset);
        &self.source[self.offset..later.offset]
    }

    /// Apply a parser at the current position, advancing on success
    ///
    /// This is the match primitive hand-written composite parsers sequence
    /// through. On success the parsed value is unwrapped and the cursor moves
    /// to the remainder (or to end of input for a complete match), so a
    /// subsequent `apply` on the same cursor continues from there. On failure
    /// the mismatch is returned and the cursor's position is untouched: no
    /// partial consumption ever leaks out of a failed match.
    pub fn apply<P>(&mut self, parser: &P) -> Result<P::Output, Mismatch>
    where
        P: Parser<'src>,
    {
        match parser.attempt(*self)? {
            Parsed::Complete(value) => {
                self.offset = self.source.len();
                Ok(value)
            }
            Parsed::Partial { value, remainder } => {
                *self = remainder;
                Ok(value)
            }
        }
    }
}

impl PartialEq for Input<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining()
    }
}

impl Eq for Input<'_> {}

impl PartialEq<&str> for Input<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.remaining() == *other
    }
}

impl PartialEq<str> for Input<'_> {
    fn eq(&self, other: &str) -> bool {
        self.remaining() == other
    }
}

impl fmt::Display for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.remaining())
    }
}
