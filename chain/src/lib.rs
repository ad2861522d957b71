extern crate primitives;
extern crate bitcrypto as crypto;

mod block_header;
mod indexed_header;
mod outpoint;

pub use primitives::{hash, compact};

pub use block_header::BlockHeader;
pub use indexed_header::IndexedBlockHeader;
pub use outpoint::OutPoint;
