extern crate rustc_hex as hex;
extern crate uint;

pub mod bigint;
pub mod compact;
pub mod hash;
