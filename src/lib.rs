//! A path-compressed binary trie for longest-prefix-match (LPM) lookup over
//! 32-bit keys — the data structure underlying an IPv4 forwarding table.
//!
//! Callers insert `(key, prefix_length, value)` bindings and look up the
//! value of the longest stored prefix covering a 32-bit probe. The trie is
//! single-owner (no internal concurrency) and keeps the tree path-compressed:
//! runs of single-child internal nodes are collapsed into one node whose
//! recorded branch bit may skip any number of positions.
//!
//! ```
//! use pctrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert(0x0A000000, 8, "ten-slash-eight").unwrap();
//! trie.insert(0x0A0B0000, 16, "ten-eleven-slash-sixteen").unwrap();
//!
//! assert_eq!(trie.lookup(0x0A0B0C0D), Some(&"ten-eleven-slash-sixteen"));
//! assert_eq!(trie.lookup(0x0A0C0000), Some(&"ten-slash-eight"));
//! assert_eq!(trie.lookup(0x0B000000), None);
//! ```
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/pctrie/0.1.0")]

mod bits;
pub mod error;
mod node;
pub mod parse;
mod trie;

pub use crate::{
	error::TrieError,
	trie::Trie,
};
