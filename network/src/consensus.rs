use crate::bigint::U256;
use crate::compact::Compact;
use crate::network::{Magic, Network};

/// Blocks between two block subsidy halvings.
pub const REWARD_HALVING_INTERVAL: u32 = 985500;

const TARGET_SPACING: u32 = 128;
const TARGET_TIMESPAN: u32 = 16 * 60;
const TARGET_TIMESPAN_V2: u32 = 4000;
const REDUCED_BLOCKTIME_TARGET_SPACING: u32 = 32;
const REDUCED_BLOCKTIME_TIMESPAN: u32 = 1000;
const STAKE_TIMESTAMP_MASK: u32 = 15;
const REDUCED_BLOCKTIME_STAKE_TIMESTAMP_MASK: u32 = 3;

lazy_static! {
	static ref POS_MAX_TARGET_MAINNET: U256 = Compact::new(0x1d00ffff).into();
	static ref POS_MAX_TARGET_TESTNET: U256 = Compact::new(0x1f00ffff).into();
	static ref QIP9_POS_MAX_TARGET: U256 = Compact::new(0x1a1fffff).into();
	static ref REDUCED_BLOCKTIME_POS_MAX_TARGET: U256 = Compact::new(0x1a3fffff).into();
}

/// Consensus parameter set active at a given height.
///
/// Transition heights belong to the newer epoch.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Epoch {
	/// Linear retargeting over `target_timespan`.
	Original,
	/// QIP9: exponential retargeting over `target_timespan_v2`.
	Qip9,
	/// Exponential retargeting with 32 seconds block spacing.
	ReducedBlockTime,
}

#[derive(Debug, Clone)]
/// Parameters that influence chain consensus.
pub struct ConsensusParams {
	/// Network.
	pub network: Network,
	/// Block height at which QIP9 becomes active.
	pub qip9_height: u32,
	/// Block height at which reduced block time becomes active.
	pub reduce_blocktime_height: u32,
	/// Expected seconds between two blocks.
	pub target_spacing: u32,
	/// Expected seconds between two blocks after reduced block time activation.
	pub reduced_blocktime_target_spacing: u32,
	/// Retargeting timespan before QIP9.
	pub target_timespan: u32,
	/// Retargeting timespan after QIP9.
	pub target_timespan_v2: u32,
	/// Retargeting timespan after reduced block time activation.
	pub reduced_blocktime_timespan: u32,
	/// Stake kernel timestamps must have these bits unset.
	pub stake_timestamp_mask: u32,
	pub reduced_blocktime_stake_timestamp_mask: u32,
	/// Proof of work target limit. Does not change between epochs.
	pub max_target: U256,
	/// Proof of stake target limit before QIP9.
	pub pos_max_target: U256,
	pub qip9_pos_max_target: U256,
	pub reduced_blocktime_pos_max_target: U256,
	/// Proof of work difficulty never changes.
	pub pow_no_retargeting: bool,
	/// Proof of stake difficulty never changes.
	pub pos_no_retargeting: bool,
	/// Confirmations required before coinbase and coinstake outputs can be spent.
	pub spendable_coinbase_depth: u32,
	pub reduced_blocktime_spendable_coinbase_depth: u32,
	/// Blocks between subsidy decreases.
	pub subsidy_decrease_block_count: u32,
}

impl ConsensusParams {
	pub fn new(network: Network) -> Self {
		match network {
			Network::Mainnet => ConsensusParams::mainnet(),
			Network::Testnet => ConsensusParams::testnet(),
			Network::Regtest => ConsensusParams::regtest(),
			Network::Unitest => ConsensusParams::unitest(),
		}
	}

	pub fn mainnet() -> Self {
		ConsensusParams {
			network: Network::Mainnet,
			qip9_height: 466600,
			reduce_blocktime_height: 845000,
			target_spacing: TARGET_SPACING,
			reduced_blocktime_target_spacing: REDUCED_BLOCKTIME_TARGET_SPACING,
			target_timespan: TARGET_TIMESPAN,
			target_timespan_v2: TARGET_TIMESPAN_V2,
			reduced_blocktime_timespan: REDUCED_BLOCKTIME_TIMESPAN,
			stake_timestamp_mask: STAKE_TIMESTAMP_MASK,
			reduced_blocktime_stake_timestamp_mask: REDUCED_BLOCKTIME_STAKE_TIMESTAMP_MASK,
			max_target: Network::Mainnet.max_target(),
			pos_max_target: POS_MAX_TARGET_MAINNET.clone(),
			qip9_pos_max_target: QIP9_POS_MAX_TARGET.clone(),
			reduced_blocktime_pos_max_target: REDUCED_BLOCKTIME_POS_MAX_TARGET.clone(),
			pow_no_retargeting: true,
			pos_no_retargeting: false,
			spendable_coinbase_depth: 500,
			reduced_blocktime_spendable_coinbase_depth: 2000,
			subsidy_decrease_block_count: REWARD_HALVING_INTERVAL,
		}
	}

	pub fn testnet() -> Self {
		ConsensusParams {
			network: Network::Testnet,
			qip9_height: 446320,
			reduce_blocktime_height: 806600,
			max_target: Network::Testnet.max_target(),
			pos_max_target: POS_MAX_TARGET_TESTNET.clone(),
			..ConsensusParams::mainnet()
		}
	}

	pub fn regtest() -> Self {
		let max_target = Network::Regtest.max_target();
		ConsensusParams {
			network: Network::Regtest,
			qip9_height: 0,
			reduce_blocktime_height: 0,
			max_target: max_target,
			pos_max_target: max_target,
			qip9_pos_max_target: max_target,
			reduced_blocktime_pos_max_target: max_target,
			pos_no_retargeting: true,
			subsidy_decrease_block_count: 150,
			..ConsensusParams::mainnet()
		}
	}

	pub fn unitest() -> Self {
		ConsensusParams {
			network: Network::Unitest,
			max_target: Network::Unitest.max_target(),
			spendable_coinbase_depth: 5,
			reduced_blocktime_spendable_coinbase_depth: 5,
			subsidy_decrease_block_count: 100,
			..ConsensusParams::testnet()
		}
	}

	pub fn magic(&self) -> Magic {
		self.network.magic()
	}

	pub fn epoch(&self, height: u32) -> Epoch {
		if height < self.qip9_height {
			Epoch::Original
		} else if height < self.reduce_blocktime_height {
			Epoch::Qip9
		} else {
			Epoch::ReducedBlockTime
		}
	}

	/// Exponential retargeting is used from this height on.
	pub fn is_qip9(&self, height: u32) -> bool {
		height >= self.qip9_height
	}

	fn is_reduced_blocktime(&self, height: u32) -> bool {
		height >= self.reduce_blocktime_height
	}

	pub fn target_spacing(&self, height: u32) -> u32 {
		if self.is_reduced_blocktime(height) {
			self.reduced_blocktime_target_spacing
		} else {
			self.target_spacing
		}
	}

	pub fn timespan(&self, height: u32) -> u32 {
		match self.epoch(height) {
			Epoch::Original => self.target_timespan,
			Epoch::Qip9 => self.target_timespan_v2,
			Epoch::ReducedBlockTime => self.reduced_blocktime_timespan,
		}
	}

	/// Number of blocks in retargeting timespan.
	pub fn interval(&self, height: u32) -> u32 {
		self.timespan(height) / self.target_spacing(height)
	}

	pub fn stake_timestamp_mask(&self, height: u32) -> u32 {
		if self.is_reduced_blocktime(height) {
			self.reduced_blocktime_stake_timestamp_mask
		} else {
			self.stake_timestamp_mask
		}
	}

	/// Easiest target allowed for a block of given type at given height.
	pub fn max_target(&self, height: u32, is_pos: bool) -> U256 {
		if !is_pos {
			return self.max_target;
		}

		match self.epoch(height) {
			Epoch::Original => self.pos_max_target,
			Epoch::Qip9 => self.qip9_pos_max_target,
			Epoch::ReducedBlockTime => self.reduced_blocktime_pos_max_target,
		}
	}

	pub fn no_retargeting(&self, is_pos: bool) -> bool {
		if is_pos {
			self.pos_no_retargeting
		} else {
			self.pow_no_retargeting
		}
	}

	pub fn spendable_coinbase_depth(&self, height: u32) -> u32 {
		if self.is_reduced_blocktime(height) {
			self.reduced_blocktime_spendable_coinbase_depth
		} else {
			self.spendable_coinbase_depth
		}
	}

	/// Returns true if block following the block at `height` halves the subsidy.
	/// The halving interval is the same on every network.
	pub fn is_reward_halving_point(&self, height: u32) -> bool {
		(height as u64 + 1) % REWARD_HALVING_INTERVAL as u64 == 0
	}
}
