use std::fmt;
use crypto::dhash256;
use crate::compact::Compact;
use crate::hash::H256;
use crate::outpoint::OutPoint;

#[derive(PartialEq, Clone)]
pub struct BlockHeader {
	pub version: u32,
	pub previous_header_hash: H256,
	pub merkle_root_hash: H256,
	pub time: u32,
	pub bits: Compact,
	pub nonce: u32,
	/// Staked output for proof-of-stake blocks, null for proof-of-work blocks.
	pub prevout_stake: OutPoint,
}

impl BlockHeader {
	pub fn is_proof_of_stake(&self) -> bool {
		!self.prevout_stake.is_null()
	}

	pub fn hash(&self) -> H256 {
		dhash256(&self.identity_bytes())
	}

	fn identity_bytes(&self) -> Vec<u8> {
		let mut bytes = Vec::with_capacity(4 + 32 + 32 + 4 + 4 + 4 + 36);
		let bits: u32 = self.bits.into();
		bytes.extend_from_slice(&self.version.to_le_bytes());
		bytes.extend_from_slice(&*self.previous_header_hash);
		bytes.extend_from_slice(&*self.merkle_root_hash);
		bytes.extend_from_slice(&self.time.to_le_bytes());
		bytes.extend_from_slice(&bits.to_le_bytes());
		bytes.extend_from_slice(&self.nonce.to_le_bytes());
		bytes.extend_from_slice(&*self.prevout_stake.hash);
		bytes.extend_from_slice(&self.prevout_stake.index.to_le_bytes());
		bytes
	}
}

impl fmt::Debug for BlockHeader {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("BlockHeader")
			.field("version", &self.version)
			.field("previous_header_hash", &self.previous_header_hash.reversed())
			.field("merkle_root_hash", &self.merkle_root_hash.reversed())
			.field("time", &self.time)
			.field("bits", &self.bits)
			.field("nonce", &self.nonce)
			.field("proof_of_stake", &self.is_proof_of_stake())
			.finish()
	}
}
