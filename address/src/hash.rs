//! Hash compositions used by address derivation.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::constants::{CHECKSUM_SIZE, HASH160_SIZE};

/// RIPEMD-160 of SHA-256 of `data`.
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// SHA-256 applied twice.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// First 4 bytes of [`double_sha256`].
pub(crate) fn checksum(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = double_sha256(data);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    out
}
