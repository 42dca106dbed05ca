//! Base58Check: Base58 (Bitcoin alphabet) over a payload followed by its
//! 4-byte double-SHA-256 checksum.

use crate::constants::CHECKSUM_SIZE;
use crate::errors::AddressError;
use crate::hash::checksum;

/// Appends the checksum of `versioned` and encodes the result.
///
/// Leading zero bytes become leading `'1'` characters.
pub fn encode_check(versioned: &[u8]) -> String {
    let mut payload = Vec::with_capacity(versioned.len() + CHECKSUM_SIZE);
    payload.extend_from_slice(versioned);
    payload.extend_from_slice(&checksum(versioned));

    bs58::encode(payload)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decodes `encoded` and verifies its checksum, returning the payload
/// without the checksum.
pub fn decode_check(encoded: &str) -> Result<Vec<u8>, AddressError> {
    let mut payload = bs58::decode(encoded)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|err| AddressError::InvalidBase58(err.to_string()))?;

    if payload.len() < CHECKSUM_SIZE {
        return Err(AddressError::InvalidLength(payload.len()));
    }

    let versioned_len = payload.len() - CHECKSUM_SIZE;
    if payload[versioned_len..] != checksum(&payload[..versioned_len]) {
        return Err(AddressError::ChecksumMismatch);
    }

    payload.truncate(versioned_len);
    Ok(payload)
}
