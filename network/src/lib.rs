#[macro_use]
extern crate lazy_static;

extern crate primitives;

mod consensus;
mod network;

pub use primitives::{bigint, compact, hash};

pub use consensus::{ConsensusParams, Epoch, REWARD_HALVING_INTERVAL};
pub use network::{Magic, Network};
