use std::{cmp, fmt};
use crate::block_header::BlockHeader;
use crate::hash::H256;

/// Header together with its hash and its height in the chain.
#[derive(Clone)]
pub struct IndexedBlockHeader {
	pub hash: H256,
	pub height: u32,
	pub raw: BlockHeader,
}

impl fmt::Debug for IndexedBlockHeader {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("IndexedBlockHeader")
			.field("hash", &self.hash.reversed())
			.field("height", &self.height)
			.field("raw", &self.raw)
			.finish()
	}
}

impl IndexedBlockHeader {
	pub fn new(hash: H256, height: u32, header: BlockHeader) -> Self {
		IndexedBlockHeader {
			hash: hash,
			height: height,
			raw: header,
		}
	}

	/// Explicit conversion of the raw BlockHeader into IndexedBlockHeader.
	///
	/// Hashes the contents of block header.
	pub fn from_raw(height: u32, header: BlockHeader) -> Self {
		IndexedBlockHeader::new(header.hash(), height, header)
	}

	pub fn is_genesis(&self) -> bool {
		self.height == 0
	}
}

impl cmp::PartialEq for IndexedBlockHeader {
	fn eq(&self, other: &Self) -> bool {
		self.hash == other.hash
	}
}
