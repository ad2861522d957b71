//! Compact representation of `U256`

use std::{cmp, fmt};
use crate::bigint::U256;

/// Compact representation of `U256`
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Compact(u32);

impl From<u32> for Compact {
	fn from(u: u32) -> Self {
		Compact(u)
	}
}

impl From<Compact> for u32 {
	fn from(c: Compact) -> Self {
		c.0
	}
}

impl From<U256> for Compact {
	fn from(u: U256) -> Self {
		Compact::from_u256(u)
	}
}

impl From<Compact> for U256 {
	fn from(c: Compact) -> Self {
		// the sign bit is ignored: targets are unsigned magnitudes
		c.to_u256().unwrap_or_else(|x| x)
	}
}

impl fmt::Display for Compact {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:#010x}", self.0)
	}
}

impl Compact {
	pub fn new(u: u32) -> Self {
		Compact(u)
	}

	/// Size byte: number of significant bytes of the encoded target
	pub fn exponent(&self) -> u32 {
		self.0 >> 24
	}

	/// Number of low-order bytes the 3-byte mantissa cannot represent.
	/// Negative for targets shorter than the mantissa.
	pub fn accuracy_bytes(&self) -> i32 {
		self.exponent() as i32 - 3
	}

	/// Mask selecting exactly the bits of a target this compact value can carry
	pub fn precision_mask(&self) -> U256 {
		let mantissa = U256::from(0x00ff_ffffu64);
		let accuracy = self.accuracy_bytes();
		if accuracy >= 0 {
			let shift = accuracy as usize * 8;
			if shift >= 256 {
				U256::zero()
			} else {
				mantissa << shift
			}
		} else {
			mantissa >> (-accuracy as usize * 8)
		}
	}

	/// Computes the target [0, T] that a blockhash must land in to be valid
	/// Returns value in error, if there is an overflow or its negative value
	pub fn to_u256(&self) -> Result<U256, U256> {
		let size = self.0 >> 24;
		let mut word = self.0 & 0x007fffff;

		let result = if size <= 3 {
			word >>= 8 * (3 - size as usize);
			word.into()
		} else {
			U256::from(word) << (8 * (size as usize - 3))
		};

		let is_negative = word != 0 && (self.0 & 0x00800000) != 0;
		let is_overflow = (word != 0 && size > 34) ||
				(word > 0xff && size > 33) ||
				(word > 0xffff && size > 32);

		if is_negative || is_overflow {
			Err(result)
		} else {
			Ok(result)
		}
	}

	/// Encodes `val`. Zero takes one size byte and encodes as `0x01000000`.
	pub fn from_u256(val: U256) -> Self {
		let mut size = cmp::max((val.bits() + 7) / 8, 1);
		let mut compact = if size <= 3 {
			(val.low_u64() << (8 * (3 - size))) as u32
		} else {
			let bn = val >> (8 * (size - 3));
			bn.low_u32()
		};

		if (compact & 0x00800000) != 0 {
			compact >>= 8;
			size += 1;
		}

		assert!((compact & !0x007fffff) == 0);
		assert!(size < 256);
		Compact(compact | (size << 24) as u32)
	}
}
