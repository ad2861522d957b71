use chain::IndexedBlockHeader;
use crate::BlockRef;

/// Read-only view of the header chain.
///
/// Implementations must present a consistent snapshot for the duration of a
/// single lookup sequence; parent links are not expected to change mid-walk.
pub trait BlockHeaderProvider {
	/// resolves header by block reference (number/hash)
	fn block_header(&self, block_ref: BlockRef) -> Option<IndexedBlockHeader>;

	/// returns true if store contains given block
	fn contains_block(&self, block_ref: BlockRef) -> bool {
		self.block_header(block_ref).is_some()
	}
}
