#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate log;

extern crate chain;
extern crate primitives;

mod block_ancestors;
mod block_provider;
mod block_ref;
mod error;
mod memory;
mod same_type;

pub use primitives::hash;

pub use block_ancestors::BlockAncestors;
pub use block_provider::BlockHeaderProvider;
pub use block_ref::BlockRef;
pub use error::Error;
pub use memory::MemoryBlockHeaderProvider;
pub use same_type::{last_same_type_header, parent_header};
