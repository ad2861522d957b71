//! Fixed-width unsigned integers.
//!
//! Targets are `U256`. Retargeting multiplies a target by factors derived from
//! block spacing before dividing, so intermediate values are kept in `U512`.

use uint::construct_uint;

construct_uint! {
	/// 256-bit unsigned integer.
	pub struct U256(4);
}

construct_uint! {
	/// 512-bit unsigned integer.
	pub struct U512(8);
}

impl From<U256> for U512 {
	fn from(value: U256) -> Self {
		let U256(ref words) = value;
		let mut result = [0u64; 8];
		result[..4].copy_from_slice(words);
		U512(result)
	}
}

impl U512 {
	/// Narrows to `U256`, or `None` if any of the upper 256 bits is set.
	pub fn to_u256(&self) -> Option<U256> {
		let U512(ref words) = *self;
		if words[4..].iter().any(|w| *w != 0) {
			return None;
		}

		let mut result = [0u64; 4];
		result.copy_from_slice(&words[..4]);
		Some(U256(result))
	}
}
