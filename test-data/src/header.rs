//! Block header builder

use chain::{BlockHeader, OutPoint};
use primitives::hash::H256;
use crate::invoke::{Invoke, Identity};

pub struct BlockHeaderBuilder<F=Identity> {
	callback: F,
	version: u32,
	parent: H256,
	time: u32,
	nbits: u32,
	nonce: u32,
	prevout_stake: OutPoint,
}

impl BlockHeaderBuilder {
	pub fn new() -> Self {
		BlockHeaderBuilder::with_callback(Identity)
	}
}

impl<F> BlockHeaderBuilder<F> where F: Invoke<BlockHeader> {
	pub fn with_callback(callback: F) -> Self {
		BlockHeaderBuilder {
			callback: callback,
			version: 1,
			parent: H256::default(),
			time: 0,
			nbits: 0,
			nonce: 0,
			prevout_stake: OutPoint::null(),
		}
	}

	pub fn parent(mut self, parent: H256) -> Self {
		self.parent = parent;
		self
	}

	pub fn time(mut self, time: u32) -> Self {
		self.time = time;
		self
	}

	pub fn nbits(mut self, nbits: u32) -> Self {
		self.nbits = nbits;
		self
	}

	pub fn nonce(mut self, nonce: u32) -> Self {
		self.nonce = nonce;
		self
	}

	/// Marks header as proof-of-stake by pointing it at a staked output.
	pub fn stake(mut self, prevout: OutPoint) -> Self {
		self.prevout_stake = prevout;
		self
	}

	/// Marks header as proof-of-stake or proof-of-work.
	pub fn proof_of_stake(self, is_pos: bool) -> Self {
		if is_pos {
			let prevout = OutPoint {
				hash: H256::from(1),
				index: self.nonce,
			};
			self.stake(prevout)
		} else {
			self.stake(OutPoint::null())
		}
	}

	pub fn build(self) -> F::Result {
		self.callback.invoke(
			BlockHeader {
				version: self.version,
				previous_header_hash: self.parent,
				merkle_root_hash: H256::default(),
				time: self.time,
				bits: self.nbits.into(),
				nonce: self.nonce,
				prevout_stake: self.prevout_stake,
			}
		)
	}
}
