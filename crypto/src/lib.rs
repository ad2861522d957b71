extern crate primitives;
extern crate sha2;

use sha2::{Digest, Sha256};
use primitives::hash::H256;

/// SHA-256
#[inline]
pub fn sha256(input: &[u8]) -> H256 {
	let mut result = [0u8; 32];
	result.copy_from_slice(&Sha256::digest(input));
	result.into()
}

/// Double SHA-256
#[inline]
pub fn dhash256(input: &[u8]) -> H256 {
	let mut result = [0u8; 32];
	result.copy_from_slice(&Sha256::digest(&Sha256::digest(input)));
	result.into()
}
