//! Unconsumed-input cursor.

use crate::{Error, Expected, Result};

/// Remaining input of one pattern, tracked as a byte offset.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Next unconsumed character.
    pub fn peek(&self) -> Result<char> {
        self.rest()
            .chars()
            .next()
            .ok_or(Error::EmptyInputAtToken { offset: self.pos })
    }

    /// Advance past `expected`, or fail if the next character differs.
    pub fn consume_expected(&mut self, expected: char) -> Result<()> {
        match self.rest().chars().next() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            found => Err(Error::UnexpectedCharacter {
                expected: Expected::Char(expected),
                found,
                offset: self.pos,
            }),
        }
    }

    /// Return the next character and advance past it.
    pub fn consume_next(&mut self) -> Result<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Ok(c)
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.source.len()
    }

    /// True if input remains and the next character is `c`.
    pub fn next_is(&self, c: char) -> bool {
        self.rest().starts_with(c)
    }

    /// Byte offset of the next unconsumed character.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }
}
