use std::fs;
use clap::ArgMatches;
use chain::{BlockHeader, OutPoint};
use network::ConsensusParams;
use primitives::hash::H256;
use storage::{BlockAncestors, MemoryBlockHeaderProvider};
use verification::{Error as VerificationError, HeaderWork};
use crate::config::Config;
use super::compact::parse_bits;

/// Header entry of a replay file.
#[derive(Debug, Deserialize)]
pub struct ReplayHeader {
	pub time: u32,
	/// Compact target in hex
	pub bits: String,
	#[serde(default)]
	pub pos: bool,
}

/// Headers to replay, oldest first.
#[derive(Debug, Deserialize)]
pub struct ReplayFile {
	/// Height of the first header
	#[serde(default)]
	pub height: u32,
	/// Number of leading headers stored without difficulty checks
	#[serde(default = "default_trusted")]
	pub trusted: usize,
	pub headers: Vec<ReplayHeader>,
}

fn default_trusted() -> usize {
	1
}

#[derive(Debug, PartialEq)]
pub struct ReplaySummary {
	/// Headers that passed difficulty check
	pub accepted: usize,
	/// Proof-of-work headers in the replayed chain
	pub pow: usize,
	/// Proof-of-stake headers in the replayed chain
	pub pos: usize,
	/// Height and error of the first rejected header
	pub rejected: Option<(u32, VerificationError)>,
}

pub fn replay(cfg: Config, matches: &ArgMatches) -> Result<(), String> {
	let path = matches.value_of("PATH").expect("PATH is required in cli.yml; qed");
	let contents = fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {}", path, e))?;
	let file: ReplayFile = serde_json::from_str(&contents).map_err(|e| format!("Invalid replay file: {}", e))?;

	info!("Replaying {} headers on {}", file.headers.len(), cfg.network);
	let summary = replay_headers(&file, &cfg.consensus)?;
	println!("accepted: {}", summary.accepted);
	println!("chain:    {} PoW, {} PoS", summary.pow, summary.pos);

	match summary.rejected {
		Some((height, err)) => Err(format!("Rejected header at height {}: {}", height, err)),
		None => Ok(()),
	}
}

fn to_header(entry: &ReplayHeader, parent: H256, nonce: u32) -> Result<BlockHeader, String> {
	let prevout_stake = match entry.pos {
		true => OutPoint { hash: parent, index: 0 },
		false => OutPoint::null(),
	};

	Ok(BlockHeader {
		version: 1,
		previous_header_hash: parent,
		merkle_root_hash: H256::default(),
		time: entry.time,
		bits: parse_bits(&entry.bits)?,
		nonce: nonce,
		prevout_stake: prevout_stake,
	})
}

/// Stores trusted headers, then checks every following header against the
/// chain replayed so far. Stops at the first rejected header.
pub fn replay_headers(file: &ReplayFile, consensus: &ConsensusParams) -> Result<ReplaySummary, String> {
	if file.headers.is_empty() {
		return Err("Replay file contains no headers".into());
	}

	let trusted = file.trusted.max(1);
	let mut store = MemoryBlockHeaderProvider::default();
	let mut tip = store.insert_checkpoint(file.height, to_header(&file.headers[0], H256::default(), file.height)?);
	let mut accepted = 0;
	let mut rejected = None;

	for (index, entry) in file.headers.iter().enumerate().skip(1) {
		let height = tip.height.checked_add(1)
			.ok_or_else(|| format!("Header {} is above the greatest block height", index))?;
		let header = to_header(entry, tip.hash, height)?;

		if index >= trusted {
			match HeaderWork::new(&header, &tip, &store, consensus).check() {
				Ok(()) => accepted += 1,
				Err(err @ VerificationError::Difficulty { .. }) => {
					rejected = Some((height, err));
					break;
				},
				Err(err) => return Err(err.into()),
			}
		}

		tip = store.insert(header).map_err(String::from)?;
	}

	let (pow, pos) = BlockAncestors::new(tip.hash.into(), &store)
		.fold((0, 0), |(pow, pos), header| match header.raw.is_proof_of_stake() {
			true => (pow, pos + 1),
			false => (pow + 1, pos),
		});

	debug!("Replayed chain tip {} at height {}", tip.hash.to_reversed_str(), tip.height);

	Ok(ReplaySummary {
		accepted: accepted,
		pow: pow,
		pos: pos,
		rejected: rejected,
	})
}

#[cfg(test)]
mod tests {
	use network::ConsensusParams;
	use verification::Error as VerificationError;
	use super::{replay_headers, ReplayFile, ReplaySummary};

	fn file(json: &str) -> ReplayFile {
		serde_json::from_str(json).unwrap()
	}

	#[test]
	fn test_replay_from_genesis() {
		let file = file(r#"{
			"headers": [
				{ "time": 1000, "bits": "1f00ffff" },
				{ "time": 1128, "bits": "1f00ffff" },
				{ "time": 1256, "bits": "1d00ffff", "pos": true },
				{ "time": 1384, "bits": "1d00ffff", "pos": true }
			]
		}"#);

		assert_eq!(replay_headers(&file, &ConsensusParams::mainnet()), Ok(ReplaySummary {
			accepted: 3,
			pow: 2,
			pos: 2,
			rejected: None,
		}));
	}

	#[test]
	fn test_replay_from_checkpoint() {
		let file = file(r#"{
			"height": 500008,
			"trusted": 2,
			"headers": [
				{ "time": 1000, "bits": "1a0a3d1c", "pos": true },
				{ "time": 1144, "bits": "1a0a3d1c", "pos": true },
				{ "time": 1272, "bits": "1a0a51aa", "pos": true },
				{ "time": 1400, "bits": "0x1a0a51aa", "pos": true }
			]
		}"#);

		let summary = replay_headers(&file, &ConsensusParams::testnet()).unwrap();
		assert_eq!(summary.accepted, 2);
		assert_eq!(summary.pos, 4);
		assert_eq!(summary.rejected, None);
	}

	#[test]
	fn test_replay_stops_at_first_rejection() {
		let file = file(r#"{
			"height": 500008,
			"trusted": 2,
			"headers": [
				{ "time": 1000, "bits": "1a0a3d1c", "pos": true },
				{ "time": 1144, "bits": "1a0a3d1c", "pos": true },
				{ "time": 1272, "bits": "1a0a51ab", "pos": true },
				{ "time": 1400, "bits": "1a0a51aa", "pos": true }
			]
		}"#);

		assert_eq!(replay_headers(&file, &ConsensusParams::testnet()), Ok(ReplaySummary {
			accepted: 0,
			pow: 0,
			pos: 2,
			rejected: Some((500010, VerificationError::Difficulty {
				expected: 0x1a0a51aa.into(),
				actual: 0x1a0a51ab.into(),
			})),
		}));
	}

	#[test]
	fn test_replay_without_enough_history_fails() {
		let file = file(r#"{
			"height": 500008,
			"headers": [
				{ "time": 1000, "bits": "1a0a3d1c", "pos": true },
				{ "time": 1144, "bits": "1a0a3d1c", "pos": true }
			]
		}"#);

		assert!(replay_headers(&file, &ConsensusParams::testnet()).is_err());
	}

	#[test]
	fn test_replay_height_overflow_fails() {
		let file = file(r#"{
			"height": 4294967295,
			"headers": [
				{ "time": 1000, "bits": "1f00ffff" },
				{ "time": 1128, "bits": "1f00ffff" }
			]
		}"#);

		assert_eq!(
			replay_headers(&file, &ConsensusParams::mainnet()),
			Err("Header 1 is above the greatest block height".to_owned())
		);
	}

	#[test]
	fn test_replay_rejects_empty_file() {
		assert!(replay_headers(&file(r#"{ "headers": [] }"#), &ConsensusParams::mainnet()).is_err());
	}
}
