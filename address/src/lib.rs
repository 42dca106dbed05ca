//! Base58Check address derivation for secp256k1 points.
//!
//! This library turns an affine point from the `curve` crate into a
//! pay-to-public-key-hash address:
//! - compressed SEC encoding of the point (33 bytes)
//! - HASH160 = RIPEMD-160(SHA-256(sec))
//! - payload = network byte || HASH160 || first 4 bytes of SHA-256(SHA-256(...))
//! - Base58 over the 25-byte payload with the Bitcoin alphabet
//!
//! # Example
//!
//! ```
//! use address::{get_address, Address, Network};
//! use curve::Point;
//!
//! let g = Point::generator();
//! let addr = get_address(&g, Network::Mainnet);
//! assert_eq!(addr, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
//!
//! // Parsing verifies the checksum and network byte.
//! let parsed: Address = addr.parse().expect("valid address");
//! assert_eq!(parsed, Address::from_point(&g, Network::Mainnet));
//! ```
//!
//! Points are not validated. Derivation is a pure function of the point and
//! the network, so the same inputs always give the same string.

mod address;
mod base58check;
mod constants;
mod errors;
mod hash;
mod network;


pub use address::{get_address, Address};
pub use base58check::{decode_check, encode_check};
pub use constants::{CHECKSUM_SIZE, HASH160_SIZE, PAYLOAD_SIZE};
pub use errors::AddressError;
pub use hash::{double_sha256, hash160};
pub use network::Network;
