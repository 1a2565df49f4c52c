//! Forward cursor over a decoder's entries.

use std::iter::FusedIterator;

use crate::entry::FormEntry;
use crate::error::{Error, Result};

/// Restartable forward cursor over a decoder's entry sequence.
///
/// Each call to [`WwwFormUrlDecoder::first`](crate::WwwFormUrlDecoder::first)
/// produces a fresh cursor positioned before the first entry; cursors
/// over the same decoder never affect each other. The decoder is
/// immutable, so a cursor never observes concurrent modification.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    entries: &'a [FormEntry],
    cursor: usize,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(entries: &'a [FormEntry]) -> Self {
        Self { entries, cursor: 0 }
    }

    /// True while entries remain. Pure predicate, callable any number of
    /// times without moving the cursor.
    pub fn has_next(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Returns the entry under the cursor and advances.
    ///
    /// Fails with [`Error::IteratorExhausted`] once [`has_next`] is
    /// false; the std [`Iterator`] impl is the infallible equivalent.
    ///
    /// [`has_next`]: Entries::has_next
    pub fn try_next(&mut self) -> Result<&'a FormEntry> {
        self.next().ok_or(Error::IteratorExhausted)
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a FormEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.cursor)?;
        self.cursor += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}
