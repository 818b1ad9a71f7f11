//! Parse routing-table dump lines into `(key, prefix_length, next_hop)` triples.
//!
//! Each line has the form `A.B.C.D/L  E.F.G.H`: a dotted-quad prefix with its
//! length, whitespace, then a dotted-quad next-hop address. This is the
//! ingestion format of the BGP routing-table dumps the original trie's test
//! harness loaded; it is not part of the trie's core API, just the glue code
//! a caller uses to get real-world prefixes into a [`crate::Trie`].

use std::{
	fmt,
	net::Ipv4Addr,
	str::FromStr,
};

/// A single parsed routing-table line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
	/// Prefix, as a 32-bit key (lower bits beyond `prefix_length` are zero).
	pub key: u32,
	/// Number of significant high-order bits of `key`.
	pub prefix_length: u8,
	/// Next-hop address, as a 32-bit value.
	pub next_hop: u32,
}

/// Error parsing a single routing-table dump line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	/// The line didn't split into a `prefix/len` field and a next-hop field.
	MissingFields,
	/// The prefix field wasn't `A.B.C.D/L`.
	BadPrefix,
	/// The prefix length wasn't a decimal number in `0..=32`.
	BadPrefixLength,
	/// The next-hop field wasn't a valid dotted-quad address.
	BadNextHop,
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ParseError::MissingFields => {
				write!(f, "expected \"A.B.C.D/L E.F.G.H\", line is missing a field")
			},
			ParseError::BadPrefix => write!(f, "prefix field is not a valid dotted-quad address"),
			ParseError::BadPrefixLength => {
				write!(f, "prefix length is not a decimal number in 0..=32")
			},
			ParseError::BadNextHop => write!(f, "next-hop field is not a valid dotted-quad address"),
		}
	}
}

impl std::error::Error for ParseError {}

/// Parse one line of the form `A.B.C.D/L  E.F.G.H`.
pub fn parse_line(line: &str) -> Result<Entry, ParseError> {
	let mut fields = line.split_whitespace();
	let prefix_field = fields.next().ok_or(ParseError::MissingFields)?;
	let next_hop_field = fields.next().ok_or(ParseError::MissingFields)?;

	let (addr_part, len_part) = prefix_field.split_once('/').ok_or(ParseError::BadPrefix)?;
	let addr = Ipv4Addr::from_str(addr_part).map_err(|_| ParseError::BadPrefix)?;
	let prefix_length: u8 = len_part.parse().map_err(|_| ParseError::BadPrefixLength)?;
	if prefix_length > 32 {
		return Err(ParseError::BadPrefixLength);
	}

	let next_hop = Ipv4Addr::from_str(next_hop_field).map_err(|_| ParseError::BadNextHop)?;

	Ok(Entry {
		key: u32::from(addr),
		prefix_length,
		next_hop: u32::from(next_hop),
	})
}
