use chain::IndexedBlockHeader;
use crate::{BlockRef, BlockHeaderProvider};

/// Iterates over a header and all of its stored ancestors, newest first.
/// Stops at genesis or at the first parent the store does not know.
pub struct BlockAncestors<'a> {
	block: Option<BlockRef>,
	headers: &'a dyn BlockHeaderProvider,
}

impl<'a> BlockAncestors<'a> {
	pub fn new(block: BlockRef, headers: &'a dyn BlockHeaderProvider) -> Self {
		BlockAncestors {
			block: Some(block),
			headers: headers,
		}
	}
}

impl<'a> Iterator for BlockAncestors<'a> {
	type Item = IndexedBlockHeader;

	fn next(&mut self) -> Option<Self::Item> {
		let result = self.block.take().and_then(|block| self.headers.block_header(block));
		self.block = match result {
			Some(ref header) if !header.is_genesis() => Some(BlockRef::Hash(header.raw.previous_header_hash)),
			_ => None,
		};
		result
	}
}
