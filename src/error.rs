//! Errors returned by [`crate::Trie`] methods.

use std::fmt;

/// Possible errors returned by [`crate::Trie::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
	/// A binding for this exact `(key-prefix, prefix_length)` already exists.
	/// Retrying with a different value requires an explicit `remove` first.
	Duplicate,
	/// Node allocation failed.
	///
	/// Modeled for parity with the C API this crate's algorithm is drawn
	/// from, where `malloc` failure is a first-class error. Rust's global
	/// allocator aborts the process on allocation failure instead of
	/// returning an error, so this variant is unreachable in practice.
	AllocationFailure,
}

impl fmt::Display for TrieError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			TrieError::Duplicate => {
				write!(f, "a binding for this exact prefix already exists")
			},
			TrieError::AllocationFailure => {
				write!(f, "node allocation failed")
			},
		}
	}
}

impl std::error::Error for TrieError {}
