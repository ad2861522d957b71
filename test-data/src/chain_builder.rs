use chain::{BlockHeader, IndexedBlockHeader};
use storage::{BlockHeaderProvider, MemoryBlockHeaderProvider};
use crate::header::BlockHeaderBuilder;
use crate::invoke::Invoke;

/// Builds a header chain in memory, one header on top of another.
///
/// Header times are given as spacings from the current tip, so a negative
/// spacing produces a header older than its parent.
#[derive(Default)]
pub struct ChainBuilder {
	store: MemoryBlockHeaderProvider,
	tip: Option<IndexedBlockHeader>,
}

impl ChainBuilder {
	pub fn new() -> Self {
		ChainBuilder::default()
	}

	/// Starts chain with proof-of-work genesis.
	pub fn genesis(time: u32, nbits: u32) -> Self {
		ChainBuilder::new().header().time(time).nbits(nbits).build()
	}

	/// Starts chain at given height. Ancestors of the checkpoint are unknown.
	pub fn checkpoint(height: u32, time: u32, nbits: u32, is_pos: bool) -> Self {
		let header = BlockHeaderBuilder::new()
			.time(time)
			.nbits(nbits)
			.nonce(height)
			.proof_of_stake(is_pos)
			.build();

		let mut builder = ChainBuilder::new();
		builder.tip = Some(builder.store.insert_checkpoint(height, header));
		builder
	}

	/// Returns builder of the header on top of the current tip.
	pub fn header(self) -> BlockHeaderBuilder<Self> {
		let (parent, height) = match self.tip {
			Some(ref tip) => (tip.hash, tip.height + 1),
			None => (Default::default(), 0),
		};

		BlockHeaderBuilder::with_callback(self)
			.parent(parent)
			.nonce(height)
	}

	/// Appends header of given type `spacing` seconds after the tip.
	pub fn push(self, is_pos: bool, spacing: i64, nbits: u32) -> Self {
		let header = self.candidate(is_pos, spacing, nbits);
		self.invoke(header)
	}

	pub fn pow(self, spacing: i64, nbits: u32) -> Self {
		self.push(false, spacing, nbits)
	}

	pub fn pos(self, spacing: i64, nbits: u32) -> Self {
		self.push(true, spacing, nbits)
	}

	/// Returns header that would be appended by `push`, without appending it.
	pub fn candidate(&self, is_pos: bool, spacing: i64, nbits: u32) -> BlockHeader {
		let tip = self.tip();
		let time = tip.raw.time as i64 + spacing;
		assert!(time >= 0 && time <= u32::max_value() as i64, "header time out of range");

		BlockHeaderBuilder::new()
			.parent(tip.hash)
			.time(time as u32)
			.nbits(nbits)
			.nonce(tip.height + 1)
			.proof_of_stake(is_pos)
			.build()
	}

	pub fn tip(&self) -> IndexedBlockHeader {
		self.tip.clone().expect("chain is supposed to have at least one header")
	}

	pub fn at(&self, height: u32) -> IndexedBlockHeader {
		self.store.block_header(height.into()).expect("header is supposed to be in the chain")
	}

	pub fn store(&self) -> &MemoryBlockHeaderProvider {
		&self.store
	}
}

impl Invoke<BlockHeader> for ChainBuilder {
	type Result = Self;

	fn invoke(mut self, header: BlockHeader) -> Self {
		let header = self.store.insert(header).expect("header is supposed to extend the tip");
		self.tip = Some(header);
		self
	}
}
