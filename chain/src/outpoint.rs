use crate::hash::H256;

/// Reference to a transaction output. Qtum headers carry the outpoint of the
/// staked coin; proof-of-work headers carry the null outpoint.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OutPoint {
	pub hash: H256,
	pub index: u32,
}

impl OutPoint {
	pub fn null() -> Self {
		OutPoint {
			hash: H256::default(),
			index: u32::max_value(),
		}
	}

	pub fn is_null(&self) -> bool {
		self.hash.is_zero() && self.index == u32::max_value()
	}
}

impl Default for OutPoint {
	fn default() -> Self {
		OutPoint::null()
	}
}
