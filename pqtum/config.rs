use std::env;
use clap;
use network::{ConsensusParams, Network};
use crate::LOG_INFO;

pub struct Config {
	pub network: Network,
	pub consensus: ConsensusParams,
	pub log: String,
}

pub fn parse(matches: &clap::ArgMatches) -> Result<Config, String> {
	let network = match (matches.is_present("testnet"), matches.is_present("regtest"), matches.is_present("unittest")) {
		(true, false, false) => Network::Testnet,
		(false, true, false) => Network::Regtest,
		(false, false, true) => Network::Unitest,
		(false, false, false) => Network::Mainnet,
		_ => return Err("Only one of testnet, regtest and unittest flags can be used".into()),
	};

	let log = match matches.value_of("log") {
		Some(filters) => filters.to_owned(),
		None => env::var("RUST_LOG").unwrap_or_else(|_| LOG_INFO.to_owned()),
	};

	let config = Config {
		network: network,
		consensus: ConsensusParams::new(network),
		log: log,
	};

	Ok(config)
}
