//! Qtum difficulty verification.
//!
//! Proof-of-work and proof-of-stake blocks share one chain, but each type
//! retargets only against the previous blocks of the same type.
//!
//! Before QIP9 the next target is a linear weighted average of the last
//! spacing and the target spacing. From QIP9 on it is `target * exp(p / q)`,
//! evaluated as an integer Taylor series (see `mul_exp`).
//!
//! A received header is accepted when its `bits` equal the locally computed
//! target truncated to the precision its own `bits` carry.

#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate log;

extern crate chain;
extern crate network;
extern crate primitives;
extern crate storage;

#[cfg(test)]
extern crate test_data;

mod accept_header;
mod constants;
mod error;
mod work;

pub use primitives::{bigint, compact, hash};

pub use accept_header::HeaderWork;
pub use constants::{MAX_SPACING_MULTIPLIER, QIP9_MAX_SPACING_MULTIPLIER, MUL_EXP_MAX_ITERATIONS};
pub use error::Error;
pub use work::{work_required, mul_exp, retarget_linear, retarget_exponential, constrain_spacing};
