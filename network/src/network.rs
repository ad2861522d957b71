//! Qtum networks

use std::fmt;
use crate::bigint::U256;
use crate::compact::Compact;

const MAGIC_MAINNET: u32 = 0xf1cfa6d3;
const MAGIC_TESTNET: u32 = 0x0d221506;
const MAGIC_REGTEST: u32 = 0xfdddc6e1;
const MAGIC_UNITEST: u32 = 0x0d221506;

lazy_static! {
	static ref MAX_TARGET_MAINNET: U256 = Compact::new(0x1f00ffff).into();
	static ref MAX_TARGET_TESTNET: U256 = Compact::new(0x1f00ffff).into();
	static ref MAX_TARGET_REGTEST: U256 = U256::max_value() >> 1;
}

/// Network magic type.
pub type Magic = u32;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Network {
	/// Qtum main network.
	Mainnet,
	/// Qtum testnet.
	Testnet,
	/// Qtum regtest network. Difficulty never changes.
	Regtest,
	/// Network for unit tests. Proof of work limit is the whole 256-bit range.
	Unitest,
}

impl Network {
	pub fn magic(&self) -> Magic {
		match *self {
			Network::Mainnet => MAGIC_MAINNET,
			Network::Testnet => MAGIC_TESTNET,
			Network::Regtest => MAGIC_REGTEST,
			Network::Unitest => MAGIC_UNITEST,
		}
	}

	/// Proof of work target limit.
	pub fn max_target(&self) -> U256 {
		match *self {
			Network::Mainnet => MAX_TARGET_MAINNET.clone(),
			Network::Testnet => MAX_TARGET_TESTNET.clone(),
			Network::Regtest => MAX_TARGET_REGTEST.clone(),
			Network::Unitest => U256::max_value(),
		}
	}

	pub fn port(&self) -> u16 {
		match *self {
			Network::Mainnet => 3888,
			Network::Testnet | Network::Unitest => 13888,
			Network::Regtest => 23888,
		}
	}

	pub fn name(&self) -> &'static str {
		match *self {
			Network::Mainnet => "mainnet",
			Network::Testnet => "testnet",
			Network::Regtest => "regtest",
			Network::Unitest => "unitest",
		}
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}
