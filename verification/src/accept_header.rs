use chain::{BlockHeader, IndexedBlockHeader};
use network::ConsensusParams;
use storage::BlockHeaderProvider;
use crate::compact::Compact;
use crate::error::Error;
use crate::work::work_required;

/// Checks that header declares the difficulty required on top of its parent.
///
/// The required target is compared at the precision of the declared `bits`:
/// it is masked to the three mantissa bytes selected by the declared exponent
/// and then encoded.
pub struct HeaderWork<'a> {
	header: &'a BlockHeader,
	parent: &'a IndexedBlockHeader,
	store: &'a dyn BlockHeaderProvider,
	consensus: &'a ConsensusParams,
}

impl<'a> HeaderWork<'a> {
	pub fn new(header: &'a BlockHeader, parent: &'a IndexedBlockHeader, store: &'a dyn BlockHeaderProvider, consensus: &'a ConsensusParams) -> Self {
		HeaderWork {
			header: header,
			parent: parent,
			store: store,
			consensus: consensus,
		}
	}

	pub fn check(&self) -> Result<(), Error> {
		let is_pos = self.header.is_proof_of_stake();
		let work = work_required(self.parent, is_pos, self.store, self.consensus)?;

		let actual = self.header.bits;
		let expected = Compact::from_u256(work & actual.precision_mask());
		if expected == actual {
			Ok(())
		} else {
			warn!(target: "verification", "Rejected {} header at height {}: expected bits {}, got {}",
				if is_pos { "PoS" } else { "PoW" },
				self.parent.height.saturating_add(1),
				expected,
				actual,
			);
			Err(Error::Difficulty { expected: expected, actual: actual })
		}
	}
}
