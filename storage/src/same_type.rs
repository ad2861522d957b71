use chain::IndexedBlockHeader;
use crate::{BlockHeaderProvider, BlockRef, Error};

/// Returns parent of the given header.
///
/// Fails if the parent is missing or if the store reports it at a height other
/// than `header.height - 1`. Must not be called for genesis.
pub fn parent_header(header: &IndexedBlockHeader, store: &dyn BlockHeaderProvider) -> Result<IndexedBlockHeader, Error> {
	let parent_hash = header.raw.previous_header_hash;
	let parent = store.block_header(BlockRef::Hash(parent_hash))
		.ok_or(Error::UnknownParent(parent_hash))?;

	if parent.height.checked_add(1) != Some(header.height) {
		return Err(Error::InconsistentParent(parent_hash));
	}

	Ok(parent)
}

/// Returns the closest ancestor of `header` (the header itself included)
/// whose type is `is_pos`. Returns genesis if there is no such ancestor.
pub fn last_same_type_header(header: &IndexedBlockHeader, is_pos: bool, store: &dyn BlockHeaderProvider) -> Result<IndexedBlockHeader, Error> {
	let mut current = header.clone();
	while !current.is_genesis() && current.raw.is_proof_of_stake() != is_pos {
		current = parent_header(&current, store)?;
	}

	trace!(target: "storage", "Last {} header before {} is {} at height {}",
		if is_pos { "PoS" } else { "PoW" },
		header.height,
		current.hash.to_reversed_str(),
		current.height,
	);

	Ok(current)
}
