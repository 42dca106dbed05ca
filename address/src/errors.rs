//! Error types for address parsing.

use thiserror::Error;

/// Errors that can occur while decoding a Base58Check address.
///
/// Deriving an address from a point never fails; these only arise when a
/// string is parsed back into an [`Address`](crate::Address).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The string contains characters outside the Bitcoin Base58 alphabet.
    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    /// The decoded payload has the wrong length: shorter than the checksum,
    /// or not 25 bytes when parsing an [`Address`](crate::Address).
    #[error("invalid payload length {0}")]
    InvalidLength(usize),

    /// The trailing 4 bytes do not match the double-SHA-256 of the payload.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// The version byte is neither mainnet nor testnet.
    #[error("unknown network byte {0:#04x}")]
    UnknownNetwork(u8),
}
