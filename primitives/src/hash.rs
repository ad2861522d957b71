//! Fixed-size hashes

use std::{fmt, ops, str};
use crate::hex::{ToHex, FromHex, FromHexError};

/// 32-byte hash, stored in internal (little-endian) byte order.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct H256([u8; 32]);

impl From<[u8; 32]> for H256 {
	fn from(h: [u8; 32]) -> Self {
		H256(h)
	}
}

impl From<H256> for [u8; 32] {
	fn from(h: H256) -> Self {
		h.0
	}
}

impl From<u8> for H256 {
	fn from(v: u8) -> Self {
		let mut result = Self::default();
		result.0[0] = v;
		result
	}
}

impl str::FromStr for H256 {
	type Err = FromHexError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let vec: Vec<u8> = s.from_hex()?;
		match vec.len() {
			32 => {
				let mut result = [0u8; 32];
				result.copy_from_slice(&vec);
				Ok(H256(result))
			},
			_ => Err(FromHexError::InvalidHexLength),
		}
	}
}

impl fmt::Debug for H256 {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.0.to_hex::<String>())
	}
}

impl fmt::Display for H256 {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.0.to_hex::<String>())
	}
}

impl ops::Deref for H256 {
	type Target = [u8; 32];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl ops::DerefMut for H256 {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl H256 {
	pub fn reversed(&self) -> Self {
		let mut result = *self;
		result.0.reverse();
		result
	}

	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|b| *b == 0)
	}

	/// Parses a hash written in the usual block-explorer (reversed) order.
	pub fn from_reversed_str(s: &str) -> Result<Self, FromHexError> {
		s.parse::<H256>().map(|h| h.reversed())
	}

	pub fn to_reversed_str(&self) -> String {
		self.reversed().to_string()
	}
}
