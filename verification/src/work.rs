use std::cmp;
use primitives::bigint::{U256, U512};
use chain::IndexedBlockHeader;
use network::ConsensusParams;
use storage::{BlockHeaderProvider, last_same_type_header, parent_header};
use crate::constants::{MAX_SPACING_MULTIPLIER, QIP9_MAX_SPACING_MULTIPLIER, MUL_EXP_MAX_ITERATIONS};
use crate::error::Error;

/// Returns constrained number of seconds between two blocks of the same type.
///
/// Negative spacing is replaced with the target spacing.
pub fn constrain_spacing(actual_spacing: i64, target_spacing: i64, max_multiplier: i64) -> i64 {
	if actual_spacing < 0 {
		return target_spacing;
	}

	cmp::min(actual_spacing, target_spacing * max_multiplier)
}

/// Linear retarget used before QIP9:
///
/// `target * ((interval - 1) * spacing + 2 * actual) / ((interval + 1) * spacing)`
pub fn retarget_linear(target: U256, actual_spacing: i64, target_spacing: i64, interval: i64) -> U512 {
	let numerator = (interval - 1) * target_spacing + 2 * actual_spacing;
	let denominator = (interval + 1) * target_spacing;
	if numerator <= 0 || denominator <= 0 {
		return U512::zero();
	}

	// multiplication must happen first, dividing first loses precision
	U512::from(target) * U512::from(numerator as u64) / U512::from(denominator as u64)
}

/// Exponential retarget used from QIP9 on: `target * exp(p / q)` where
///
/// `p = 2 * (actual - spacing) / (mask + 1)`
/// `q = (interval + 1) * spacing / (mask + 1)`
pub fn retarget_exponential(target: U256, actual_spacing: i64, target_spacing: i64, interval: i64, stake_timestamp_mask: i64) -> Result<U512, Error> {
	let granularity = stake_timestamp_mask + 1;
	let p = 2 * (actual_spacing - target_spacing) / granularity;
	let q = (interval + 1) * target_spacing / granularity;
	mul_exp(target, p, q)
}

/// Approximates `a * exp(p / q)` by summing the Taylor series
/// `a + a*p/q + (a*p/q)*p/(2q) + ...` until a term truncates to zero.
///
/// Every term is truncated toward zero. A negative sum is returned as zero.
pub fn mul_exp(a: U256, p: i64, q: i64) -> Result<U512, Error> {
	if q <= 0 {
		return Err(Error::MulExp { p, q });
	}

	let p_abs = U512::from(p.unsigned_abs());
	let q_wide = U512::from(q as u64);

	let mut positive = U512::from(a);
	let mut negative = U512::zero();
	let mut term = U512::from(a);
	let mut term_is_negative = false;

	for n in 1..=MUL_EXP_MAX_ITERATIONS {
		let divisor = q_wide * U512::from(n);
		term = match term.checked_mul(p_abs) {
			Some(product) => product / divisor,
			None => break,
		};

		if term.is_zero() {
			trace!(target: "verification", "mul_exp converged after {} iterations", n);
			return Ok(positive.checked_sub(negative).unwrap_or_else(U512::zero));
		}

		term_is_negative ^= p < 0;
		let sum = if term_is_negative { &mut negative } else { &mut positive };
		*sum = match sum.checked_add(term) {
			Some(total) => total,
			None => break,
		};
	}

	Err(Error::MulExp { p, q })
}

/// Clamps computed target to `(0, max_target]`.
fn limit_target(target: U512, max_target: U256, height: u32, is_pos: bool) -> U256 {
	match target.to_u256() {
		Some(target) if !target.is_zero() && target <= max_target => target,
		_ => {
			info!(target: "verification", "Difficulty hit limit for {} block at height {}: {:x}", if is_pos { "PoS" } else { "PoW" }, height, target);
			max_target
		},
	}
}

/// Returns the target a block of given type placed on top of `parent` must meet
pub fn work_required(parent: &IndexedBlockHeader, is_pos: bool, store: &dyn BlockHeaderProvider, consensus: &ConsensusParams) -> Result<U256, Error> {
	let height = parent.height.saturating_add(1);
	let max_target = consensus.max_target(height, is_pos);

	let prev = last_same_type_header(parent, is_pos, store)?;
	if prev.is_genesis() {
		return Ok(max_target);
	}

	let prev_prev = last_same_type_header(&parent_header(&prev, store)?, is_pos, store)?;
	if prev_prev.is_genesis() {
		return Ok(max_target);
	}

	let prev_target: U256 = prev.raw.bits.into();
	if consensus.no_retargeting(is_pos) {
		return Ok(prev_target);
	}

	// subtract unsigned 32 bit numbers in signed 64 bit space
	let actual_spacing = prev.raw.time as i64 - prev_prev.raw.time as i64;
	let target_spacing = consensus.target_spacing(height) as i64;
	let interval = consensus.interval(height) as i64;

	let new_target = if consensus.is_qip9(height) {
		let actual_spacing = constrain_spacing(actual_spacing, target_spacing, QIP9_MAX_SPACING_MULTIPLIER);
		let stake_timestamp_mask = consensus.stake_timestamp_mask(height) as i64;
		retarget_exponential(prev_target, actual_spacing, target_spacing, interval, stake_timestamp_mask)?
	} else {
		let actual_spacing = constrain_spacing(actual_spacing, target_spacing, MAX_SPACING_MULTIPLIER);
		retarget_linear(prev_target, actual_spacing, target_spacing, interval)
	};

	let new_target = limit_target(new_target, max_target, height, is_pos);
	debug!(target: "verification", "Work required for {} block at height {}: {:x}", if is_pos { "PoS" } else { "PoW" }, height, new_target);
	Ok(new_target)
}

#[cfg(test)]
mod tests {
	use primitives::bigint::{U256, U512};
	use primitives::compact::Compact;
	use network::{ConsensusParams, Network};
	use storage::Error as DBError;
	use test_data::ChainBuilder;
	use crate::error::Error;
	use super::{work_required, mul_exp, retarget_linear, constrain_spacing};

	fn compact(target: U256) -> u32 {
		Compact::from_u256(target).into()
	}

	fn target(bits: u32) -> U256 {
		Compact::new(bits).into()
	}

	/// Two proof-of-stake headers `spacing` seconds apart, the newer one
	/// carrying `bits`, such that the next block has height `height`.
	fn pos_pair(height: u32, spacing: i64, bits: u32) -> ChainBuilder {
		ChainBuilder::checkpoint(height - 2, 1_000_000, 0x1a0a3d1c, true)
			.pos(spacing, bits)
	}

	fn next_pos_work(chain: &ChainBuilder, consensus: &ConsensusParams) -> Result<U256, Error> {
		work_required(&chain.tip(), true, chain.store(), consensus)
	}

	#[test]
	fn test_constrain_spacing() {
		assert_eq!(constrain_spacing(-1, 128, 10), 128);
		assert_eq!(constrain_spacing(0, 128, 10), 0);
		assert_eq!(constrain_spacing(1280, 128, 10), 1280);
		assert_eq!(constrain_spacing(1281, 128, 10), 1280);
		assert_eq!(constrain_spacing(100_000, 128, 20), 2560);
	}

	#[test]
	fn test_mul_exp() {
		let a = target(0x1a0a3d1c);
		let expected = U512::from_dec_str("16582012451114784262406326747614123305688481898112094974606943").unwrap();
		assert_eq!(mul_exp(a, 2, 256), Ok(expected));

		let expected = U512::from_dec_str("16324932176501824039779634247209823447858832738339524457529761").unwrap();
		assert_eq!(mul_exp(a, -2, 256), Ok(expected));

		assert_eq!(mul_exp(a, 0, 256), Ok(U512::from(a)));
		assert_eq!(mul_exp(U256::zero(), 5, 1), Ok(U512::zero()));
	}

	#[test]
	fn test_mul_exp_rejects_invalid_denominator() {
		assert_eq!(mul_exp(U256::one(), 2, 0), Err(Error::MulExp { p: 2, q: 0 }));
		assert_eq!(mul_exp(U256::one(), 2, -1), Err(Error::MulExp { p: 2, q: -1 }));
	}

	#[test]
	fn test_mul_exp_slow_convergence() {
		// exp(350) takes 947 terms, the largest ratio whose terms fit in 512 bits
		let expected = U512::from_dec_str("100709083924474204420875266714418368106102862944698681952999597353838337218974424019971289203826246039415739290083592294767142590737860338129523076835016").unwrap();
		assert_eq!(mul_exp(U256::one(), 350, 1), Ok(expected));
		assert_eq!(mul_exp(U256::one(), -350, 1), Ok(U512::zero()));
		assert_eq!(mul_exp(U256::one(), 353, 1), Err(Error::MulExp { p: 353, q: 1 }));
	}

	#[test]
	fn test_mul_exp_divergence_is_an_error() {
		assert_eq!(mul_exp(U256::max_value(), 1_000_000, 1), Err(Error::MulExp { p: 1_000_000, q: 1 }));
	}

	#[test]
	fn test_retarget_linear_multiplies_before_dividing() {
		// interval 1, spacing 600, actual 7: 1193047 * 14 / 1200
		let result = retarget_linear(U256::from(1193047u64), 7, 600, 1);
		assert_eq!(result, U512::from(13918u64));
		// dividing first would give 1193047 / 1200 * 14 = 13916
		assert!(result != U512::from(13916u64));
	}

	#[test]
	fn test_retarget_linear_non_positive_numerator() {
		assert_eq!(retarget_linear(U256::from(1000u64), 0, 600, 0), U512::zero());
	}

	#[test]
	fn test_work_required_qip9_vectors() {
		let testnet = ConsensusParams::new(Network::Testnet);

		let chain = pos_pair(500010, 144, 0x1a0a3d1c);
		let work = next_pos_work(&chain, &testnet).unwrap();
		assert_eq!(work, U256::from_dec_str("16582012451114784262406326747614123305688481898112094974606943").unwrap());
		assert_eq!(compact(work), 0x1a0a51aa);

		let chain = pos_pair(500010, 64, 0x1a0a3d1c);
		let work = next_pos_work(&chain, &testnet).unwrap();
		assert_eq!(work, U256::from_dec_str("15946765529941229788148793651858135673733919587899992469691869").unwrap());
		assert_eq!(compact(work), 0x1a09ec77);

		let chain = pos_pair(500010, 128, 0x1a0a3d1c);
		assert_eq!(next_pos_work(&chain, &testnet), Ok(target(0x1a0a3d1c)));
	}

	#[test]
	fn test_work_required_reduced_block_time_vector() {
		let testnet = ConsensusParams::new(Network::Testnet);
		let chain = pos_pair(900010, 48, 0x1a2b3c4d);
		let work = next_pos_work(&chain, &testnet).unwrap();
		assert_eq!(work, U256::from_dec_str("71682282004395960140020106724676737716272451856274589223045642").unwrap());
		assert_eq!(compact(work), 0x1a2c9ba5);
	}

	#[test]
	fn test_work_required_linear_vectors() {
		let mainnet = ConsensusParams::new(Network::Mainnet);

		let chain = ChainBuilder::genesis(1000, 0x1f00ffff)
			.pos(0, 0x1c0f1e2d)
			.pos(200, 0x1c0f1e2d);
		let work = next_pos_work(&chain, &mainnet).unwrap();
		assert_eq!(work, U256::from_dec_str("1815986748651232351958675645102228336090897856044847473017466388480").unwrap());
		assert_eq!(compact(work), 0x1c113e6b);

		// spacing is capped at 10 target spacings
		let capped = ChainBuilder::genesis(1000, 0x1f00ffff)
			.pos(0, 0x1c0f1e2d)
			.pos(100_000, 0x1c0f1e2d);
		let at_cap = ChainBuilder::genesis(1000, 0x1f00ffff)
			.pos(0, 0x1c0f1e2d)
			.pos(1280, 0x1c0f1e2d);
		let work = next_pos_work(&capped, &mainnet).unwrap();
		assert_eq!(work, U256::from_dec_str("5174318407115840126128829235359773889135708959689428416268945326080").unwrap());
		assert_eq!(compact(work), 0x1c312212);
		assert_eq!(next_pos_work(&at_cap, &mainnet), Ok(work));

		// negative spacing is replaced with target spacing
		let negative = ChainBuilder::genesis(1000, 0x1f00ffff)
			.pos(0, 0x1c0f1e2d)
			.pos(-50, 0x1c0f1e2d);
		assert_eq!(next_pos_work(&negative, &mainnet), Ok(target(0x1c0f1e2d)));
	}

	#[test]
	fn test_work_required_qip9_spacing_cap() {
		let testnet = ConsensusParams::new(Network::Testnet);
		let at_cap = next_pos_work(&pos_pair(500010, 2560, 0x1a01e2d3), &testnet).unwrap();
		let above_cap = next_pos_work(&pos_pair(500010, 100_000, 0x1a01e2d3), &testnet).unwrap();
		assert_eq!(at_cap, above_cap);
		assert_eq!(compact(at_cap), 0x1a062f1e);

		let negative = next_pos_work(&pos_pair(500010, -5, 0x1a0a3d1c), &testnet);
		assert_eq!(negative, Ok(target(0x1a0a3d1c)));
	}

	#[test]
	fn test_work_required_epoch_boundary() {
		let testnet = ConsensusParams::new(Network::Testnet);

		// last height of linear retargeting
		let work = next_pos_work(&pos_pair(446319, 144, 0x1a0a3d1c), &testnet).unwrap();
		assert_eq!(compact(work), 0x1a0a8f04);

		// first height of exponential retargeting
		let work = next_pos_work(&pos_pair(446320, 144, 0x1a0a3d1c), &testnet).unwrap();
		assert_eq!(compact(work), 0x1a0a51aa);
	}

	#[test]
	fn test_work_required_insufficient_history() {
		let mainnet = ConsensusParams::new(Network::Mainnet);
		let max_pos = mainnet.max_target(1, true);

		// only genesis
		let chain = ChainBuilder::genesis(1000, 0x1f00ffff);
		assert_eq!(next_pos_work(&chain, &mainnet), Ok(max_pos));
		assert_eq!(work_required(&chain.tip(), false, chain.store(), &mainnet), Ok(mainnet.max_target(1, false)));

		// single proof-of-stake block
		let chain = chain.pos(100, 0x1c0f1e2d).pow(100, 0x1f00ffff);
		assert_eq!(next_pos_work(&chain, &mainnet), Ok(mainnet.max_target(3, true)));
	}

	#[test]
	fn test_work_required_interleaved_types() {
		let testnet = ConsensusParams::new(Network::Testnet);
		let chain = ChainBuilder::checkpoint(500000, 1000, 0x1a0a3d1c, true)
			.pow(10, 0x1f00ffff)
			.pos(134, 0x1a0a3d1c)
			.pow(5, 0x1e0fffff);

		// proof-of-work headers between the two PoS headers are skipped
		let work = next_pos_work(&chain, &testnet).unwrap();
		assert_eq!(compact(work), 0x1a0a51aa);

		// proof-of-work does not retarget on testnet, last PoW bits are kept
		let work = work_required(&chain.tip(), false, chain.store(), &testnet).unwrap();
		assert_eq!(work, target(0x1e0fffff));
	}

	#[test]
	fn test_work_required_no_retargeting() {
		let regtest = ConsensusParams::new(Network::Regtest);
		for spacing in &[-1_000_000i64, -1, 0, 1, 4_000_000_000] {
			let chain = ChainBuilder::genesis(1_000_000, 0x207fffff)
				.pos(0, 0x1a0a3d1c)
				.pos(*spacing, 0x1a0a3d1c);
			assert_eq!(next_pos_work(&chain, &regtest), Ok(target(0x1a0a3d1c)));
		}

		let mainnet = ConsensusParams::new(Network::Mainnet);
		let chain = ChainBuilder::genesis(1000, 0x1f00ffff)
			.pow(0, 0x1d00ffff)
			.pow(1_000_000, 0x1d00ffff);
		let work = work_required(&chain.tip(), false, chain.store(), &mainnet);
		assert_eq!(work, Ok(target(0x1d00ffff)));
	}

	#[test]
	fn test_work_required_clamps_to_max_target() {
		let mainnet = ConsensusParams::new(Network::Mainnet);

		// truncates to zero
		let chain = ChainBuilder::genesis(1000, 0x1f00ffff)
			.pos(0, 0x01010000)
			.pos(0, 0x01010000);
		assert_eq!(next_pos_work(&chain, &mainnet), Ok(mainnet.max_target(3, true)));

		// grows above the limit
		let chain = ChainBuilder::genesis(1000, 0x1f00ffff)
			.pos(0, 0x1d00ffff)
			.pos(1280, 0x1d00ffff);
		assert_eq!(next_pos_work(&chain, &mainnet), Ok(mainnet.max_target(3, true)));

		let testnet = ConsensusParams::new(Network::Testnet);
		let work = next_pos_work(&pos_pair(500010, 2560, 0x1a1f0000), &testnet).unwrap();
		assert_eq!(work, testnet.max_target(500010, true));
		assert_eq!(compact(work), 0x1a1fffff);
	}

	#[test]
	fn test_work_required_multiplies_before_dividing() {
		let consensus = ConsensusParams {
			qip9_height: u32::max_value(),
			reduce_blocktime_height: u32::max_value(),
			target_spacing: 600,
			target_timespan: 600,
			..ConsensusParams::new(Network::Unitest)
		};

		let chain = ChainBuilder::genesis(1000, 0x1f00ffff)
			.pos(0, 0x03123457)
			.pos(7, 0x03123457);
		assert_eq!(next_pos_work(&chain, &consensus), Ok(U256::from(13918u64)));
	}

	#[test]
	fn test_work_required_is_deterministic() {
		let testnet = ConsensusParams::new(Network::Testnet);
		let chain = pos_pair(500010, 144, 0x1a0a3d1c);
		assert_eq!(next_pos_work(&chain, &testnet), next_pos_work(&chain, &testnet));
	}

	#[test]
	fn test_work_required_broken_chain() {
		let testnet = ConsensusParams::new(Network::Testnet);
		let chain = ChainBuilder::checkpoint(500000, 1000, 0x1f00ffff, false)
			.pow(128, 0x1f00ffff);
		let missing = chain.at(500000).raw.previous_header_hash;

		assert_eq!(next_pos_work(&chain, &testnet), Err(Error::Database(DBError::UnknownParent(missing))));
	}
}
