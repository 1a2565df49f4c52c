//! WWW-form query-string decoder with vector-view access.

use std::ops::Index;

use tracing::{debug, trace};

use crate::entry::FormEntry;
use crate::error::{Error, Result};
use crate::iter::Entries;
use crate::percent::decode_component;

/// Ordered, read-only collection of name/value pairs decoded from an
/// `application/x-www-form-urlencoded` query string.
///
/// Parsing is eager and atomic: construction either yields a fully
/// decoded collection or fails, never a partial one. The collection is
/// immutable afterwards, so every read operation takes `&self` and the
/// type is safe to share across threads without locking.
#[derive(Debug, Clone)]
pub struct WwwFormUrlDecoder {
    entries: Vec<FormEntry>,
}

/// Shifts escape-error offsets from component-relative to query-relative.
fn offset_error(e: Error, base: usize) -> Error {
    match e {
        Error::InvalidEscape { index } => Error::InvalidEscape { index: base + index },
        Error::TruncatedEscape { index } => Error::TruncatedEscape { index: base + index },
        other => other,
    }
}

impl WwwFormUrlDecoder {
    /// Parses `query` into an ordered entry sequence.
    ///
    /// Tokens are split on `&` (empty tokens between adjacent delimiters
    /// produce no entry), each token is split at its FIRST `=` only (a
    /// value may legally contain further `=`), and a token with no `=`
    /// becomes an entry with an empty-string value. Name and value are
    /// percent-decoded independently.
    ///
    /// Fails with [`Error::InvalidEscape`] or [`Error::TruncatedEscape`]
    /// on a malformed `%XX` escape; the offset reported is relative to
    /// `query`. An empty `query` yields an empty decoder.
    pub fn new(query: &str) -> Result<Self> {
        let pair_count = query.matches('&').count() + 1;
        let mut entries = Vec::with_capacity(pair_count.min(16));

        for token in query.split('&') {
            if token.is_empty() {
                continue;
            }
            let base = token.as_ptr() as usize - query.as_ptr() as usize;

            let (name, value) = match token.find('=') {
                Some(pos) => (&token[..pos], &token[pos + 1..]),
                None => (token, ""),
            };
            let value_base = base + name.len() + 1;

            let name = decode_component(name).map_err(|e| offset_error(e, base))?;
            let value = decode_component(value).map_err(|e| offset_error(e, value_base))?;
            trace!("decoded pair: {}={}", name, value);
            entries.push(FormEntry::new(name, value));
        }

        debug!("decoded query string: {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Number of decoded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as a slice, in source order.
    pub fn entries(&self) -> &[FormEntry] {
        &self.entries
    }

    /// Zero-based positional access.
    ///
    /// Fails with [`Error::OutOfRange`] when `index >= len()`. The
    /// [`Index`] impl is the panicking equivalent.
    pub fn get_at(&self, index: usize) -> Result<&FormEntry> {
        self.entries.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Value of the first entry whose name matches exactly
    /// (case-sensitive), scanning in insertion order.
    ///
    /// `None` is a valid negative result, not an error.
    pub fn first_value_by_name(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.value())
    }

    /// Index of the first entry structurally equal to `entry`
    /// (full name AND value match, unlike [`first_value_by_name`]).
    ///
    /// [`first_value_by_name`]: WwwFormUrlDecoder::first_value_by_name
    pub fn index_of(&self, entry: &FormEntry) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }

    /// Clones up to `buf.len()` entries starting at `start` into `buf`,
    /// returning the count copied. A `start` at or past the end yields 0
    /// ("no more"), not an error.
    pub fn get_many(&self, start: usize, buf: &mut [FormEntry]) -> usize {
        if start >= self.entries.len() {
            return 0;
        }
        let n = buf.len().min(self.entries.len() - start);
        buf[..n].clone_from_slice(&self.entries[start..start + n]);
        n
    }

    /// Fresh cursor positioned before the first entry.
    ///
    /// Cursors are independent: advancing one never moves another.
    pub fn first(&self) -> Entries<'_> {
        Entries::new(&self.entries)
    }
}

impl Index<usize> for WwwFormUrlDecoder {
    type Output = FormEntry;

    fn index(&self, index: usize) -> &FormEntry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a WwwFormUrlDecoder {
    type Item = &'a FormEntry;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Entries<'a> {
        self.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // parsing tests
    // ========================================

    #[test]
    fn test_parse_basic_pairs_in_order() {
        let d = WwwFormUrlDecoder::new("a=1&b=2&c=3").unwrap();
        assert_eq!(d.len(), 3);
        assert_eq!(d.get_at(0).unwrap().name(), "a");
        assert_eq!(d.get_at(1).unwrap().value(), "2");
        assert_eq!(d.get_at(2).unwrap().name(), "c");
    }

    #[test]
    fn test_parse_empty_query() {
        let d = WwwFormUrlDecoder::new("").unwrap();
        assert_eq!(d.len(), 0);
        assert!(d.is_empty());
    }

    #[test]
    fn test_parse_skips_empty_tokens() {
        let d = WwwFormUrlDecoder::new("a=1&&b=2&").unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.get_at(1).unwrap().name(), "b");
    }

    #[test]
    fn test_parse_bare_key_and_empty_value() {
        let d = WwwFormUrlDecoder::new("k1&k2=&k3=v").unwrap();
        assert_eq!(d.len(), 3);
        assert_eq!(d.get_at(0).unwrap().value(), "");
        assert_eq!(d.get_at(1).unwrap().value(), "");
        assert_eq!(d.get_at(2).unwrap().value(), "v");
    }

    #[test]
    fn test_parse_splits_on_first_equals_only() {
        let d = WwwFormUrlDecoder::new("expr=a=b=c").unwrap();
        assert_eq!(d.get_at(0).unwrap().name(), "expr");
        assert_eq!(d.get_at(0).unwrap().value(), "a=b=c");
    }

    #[test]
    fn test_parse_empty_name_token() {
        let d = WwwFormUrlDecoder::new("=v").unwrap();
        assert_eq!(d.len(), 1);
        assert_eq!(d.get_at(0).unwrap().name(), "");
        assert_eq!(d.get_at(0).unwrap().value(), "v");
    }

    #[test]
    fn test_parse_decodes_name_and_value() {
        let d = WwwFormUrlDecoder::new("full+name=a%2Bb+c").unwrap();
        assert_eq!(d.get_at(0).unwrap().name(), "full name");
        assert_eq!(d.get_at(0).unwrap().value(), "a+b c");
    }

    #[test]
    fn test_parse_truncated_escape_fails() {
        assert_eq!(
            WwwFormUrlDecoder::new("a=%2").unwrap_err(),
            Error::TruncatedEscape { index: 2 }
        );
    }

    #[test]
    fn test_parse_invalid_escape_offset_is_query_relative() {
        // The bad escape sits in the second token's value.
        assert_eq!(
            WwwFormUrlDecoder::new("a=1&b=%gg").unwrap_err(),
            Error::InvalidEscape { index: 6 }
        );
    }

    // ========================================
    // access and search tests
    // ========================================

    #[test]
    fn test_get_at_out_of_range() {
        let d = WwwFormUrlDecoder::new("a=1").unwrap();
        assert_eq!(
            d.get_at(1).unwrap_err(),
            Error::OutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn test_index_trait_access() {
        let d = WwwFormUrlDecoder::new("a=1&b=2").unwrap();
        assert_eq!(d[1].value(), "2");
    }

    #[test]
    fn test_first_value_by_name_first_match_wins() {
        let d = WwwFormUrlDecoder::new("a=1&a=2").unwrap();
        assert_eq!(d.first_value_by_name("a"), Some("1"));
        // positional access still sees the duplicate
        assert_eq!(d.get_at(1).unwrap().value(), "2");
    }

    #[test]
    fn test_first_value_by_name_case_sensitive() {
        let d = WwwFormUrlDecoder::new("Key=1").unwrap();
        assert_eq!(d.first_value_by_name("key"), None);
        assert_eq!(d.first_value_by_name("Key"), Some("1"));
    }

    #[test]
    fn test_index_of_matches_full_pair() {
        let d = WwwFormUrlDecoder::new("a=1&b=2&a=3").unwrap();
        assert_eq!(d.index_of(&FormEntry::new("a", "3")), Some(2));
        assert_eq!(d.index_of(&FormEntry::new("a", "1")), Some(0));
        // name-only match is not enough
        assert_eq!(d.index_of(&FormEntry::new("b", "9")), None);
    }

    #[test]
    fn test_get_many_bounded_copy() {
        let d = WwwFormUrlDecoder::new("a=1&b=2&c=3").unwrap();
        let mut buf = vec![FormEntry::new("", ""); 2];

        assert_eq!(d.get_many(1, &mut buf), 2);
        assert_eq!(buf[0].name(), "b");
        assert_eq!(buf[1].name(), "c");

        // fewer remain than the buffer holds
        assert_eq!(d.get_many(2, &mut buf), 1);
        assert_eq!(buf[0].name(), "c");

        // at the end: "no more", not an error
        assert_eq!(d.get_many(3, &mut buf), 0);
        assert_eq!(d.get_many(100, &mut buf), 0);
    }

    // ========================================
    // iteration tests
    // ========================================

    #[test]
    fn test_independent_cursors() {
        let d = WwwFormUrlDecoder::new("a=1&b=2").unwrap();
        let mut first = d.first();
        let mut second = d.first();

        assert_eq!(first.try_next().unwrap().name(), "a");
        assert_eq!(first.try_next().unwrap().name(), "b");
        // the second cursor has not moved
        assert!(second.has_next());
        assert_eq!(second.try_next().unwrap().name(), "a");
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let d = WwwFormUrlDecoder::new("a=1&b=2&c=3").unwrap();
        let names: Vec<&str> = (&d).into_iter().map(|e| e.name()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
