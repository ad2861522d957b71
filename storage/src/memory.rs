use std::collections::{BTreeMap, HashMap};
use chain::{BlockHeader, IndexedBlockHeader};
use crate::hash::H256;
use crate::{BlockHeaderProvider, BlockRef, Error};

/// In-memory header store.
///
/// Headers are appended on top of a known parent, so every stored header
/// except the first (genesis or checkpoint) has its parent stored as well.
#[derive(Default)]
pub struct MemoryBlockHeaderProvider {
	by_hash: HashMap<H256, IndexedBlockHeader>,
	by_height: BTreeMap<u32, H256>,
}

impl MemoryBlockHeaderProvider {
	/// Creates store with a single genesis header.
	pub fn with_genesis(genesis: BlockHeader) -> Self {
		let mut store = MemoryBlockHeaderProvider::default();
		store.insert_checkpoint(0, genesis);
		store
	}

	/// Inserts header on top of its parent and returns it indexed.
	/// The first header inserted into an empty store becomes genesis.
	pub fn insert(&mut self, header: BlockHeader) -> Result<IndexedBlockHeader, Error> {
		if self.by_hash.is_empty() {
			return Ok(self.insert_checkpoint(0, header));
		}

		let height = match self.by_hash.get(&header.previous_header_hash) {
			Some(parent) => parent.height.checked_add(1).ok_or(Error::HeightOverflow(parent.hash))?,
			None => return Err(Error::UnknownParent(header.previous_header_hash)),
		};

		let header = IndexedBlockHeader::from_raw(height, header);
		if self.by_hash.contains_key(&header.hash) {
			return Err(Error::DuplicateBlock(header.hash));
		}

		Ok(self.insert_indexed(header))
	}

	/// Inserts header at given height without requiring its parent.
	/// Used to start a store from a trusted point deep in the chain.
	pub fn insert_checkpoint(&mut self, height: u32, header: BlockHeader) -> IndexedBlockHeader {
		self.insert_indexed(IndexedBlockHeader::from_raw(height, header))
	}

	/// Inserts already indexed header as is. Height and parent are not checked.
	pub fn insert_indexed(&mut self, header: IndexedBlockHeader) -> IndexedBlockHeader {
		trace!(target: "storage", "Inserting header {} at height {}", header.hash.to_reversed_str(), header.height);
		self.by_height.insert(header.height, header.hash);
		self.by_hash.insert(header.hash, header.clone());
		header
	}

	/// Header with the greatest height.
	pub fn best_header(&self) -> Option<IndexedBlockHeader> {
		self.by_height.values().next_back().and_then(|hash| self.by_hash.get(hash)).cloned()
	}

	pub fn len(&self) -> usize {
		self.by_hash.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_hash.is_empty()
	}
}

impl BlockHeaderProvider for MemoryBlockHeaderProvider {
	fn block_header(&self, block_ref: BlockRef) -> Option<IndexedBlockHeader> {
		match block_ref {
			BlockRef::Hash(ref hash) => self.by_hash.get(hash).cloned(),
			BlockRef::Number(height) => self.by_height.get(&height).and_then(|hash| self.by_hash.get(hash)).cloned(),
		}
	}
}
