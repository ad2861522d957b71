//! Header chains for tests.

extern crate chain;
extern crate primitives;
extern crate storage;

mod chain_builder;
mod header;
mod invoke;

pub use chain_builder::ChainBuilder;
pub use header::BlockHeaderBuilder;
pub use invoke::{Invoke, Identity};
