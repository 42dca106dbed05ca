//! Sizes of the Base58Check address payload.

/// Size of a HASH160 digest (RIPEMD-160 of SHA-256) in bytes.
pub const HASH160_SIZE: usize = 20;

/// Size of the double-SHA-256 checksum appended to the payload.
pub const CHECKSUM_SIZE: usize = 4;

/// Size of the versioned payload before the checksum:
/// - network byte (1 byte)
/// - HASH160 of the SEC encoding (20 bytes)
pub(crate) const VERSIONED_SIZE: usize = 1 + HASH160_SIZE;

/// Size of the full decoded address payload: 25 bytes.
pub const PAYLOAD_SIZE: usize = VERSIONED_SIZE + CHECKSUM_SIZE;
