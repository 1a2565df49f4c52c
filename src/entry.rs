//! Decoded name/value pair.

use serde::{Deserialize, Serialize};

/// One decoded name/value pair from a query string.
///
/// Both fields are fully percent-decoded and immutable after
/// construction. A bare key (`k` with no `=`) decodes to an empty-string
/// value, never to an absent one. Equality is structural on
/// `(name, value)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormEntry {
    name: String,
    value: String,
}

impl FormEntry {
    /// Builds an entry from already-decoded strings.
    ///
    /// Useful for constructing probe entries for
    /// [`WwwFormUrlDecoder::index_of`](crate::WwwFormUrlDecoder::index_of).
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Decoded key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decoded value (empty string if the pair had no `=`).
    pub fn value(&self) -> &str {
        &self.value
    }
}
