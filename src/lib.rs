//! wwwform - Strict `application/x-www-form-urlencoded` decoder.
//!
//! This crate parses a URL query string into an ordered, read-only
//! collection of name/value pairs and exposes it via random access,
//! linear search, and restartable forward cursors.
//!
//! # Features
//!
//! - **Strict decoding**: Malformed `%XX` escapes fail construction
//!   with a byte offset instead of being silently dropped
//! - **Order-preserving**: Entries keep the left-to-right order of the
//!   source string, duplicates included
//! - **Vector-view access**: Indexed get, bounded bulk copy, linear
//!   search by name or by full pair
//! - **Lock-free sharing**: The decoder is immutable after construction
//!   and safe for unsynchronized concurrent reads
//! - **Round-trips**: Form encoding of name/value pairs back into a
//!   query string
//!
//! # Example
//!
//! ```rust
//! use wwwform::WwwFormUrlDecoder;
//!
//! let decoder = WwwFormUrlDecoder::new("q=rust+lang&page=2")?;
//! assert_eq!(decoder.len(), 2);
//! assert_eq!(decoder.first_value_by_name("q"), Some("rust lang"));
//! for entry in &decoder {
//!     println!("{} = {}", entry.name(), entry.value());
//! }
//! # Ok::<(), wwwform::Error>(())
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod decoder;
pub mod entry;
pub mod error;
pub mod iter;
pub mod percent;

// Re-exports for convenience
pub use decoder::WwwFormUrlDecoder;
pub use entry::FormEntry;
pub use error::{Error, Result};
pub use iter::Entries;
