//! Address derivation from curve points.

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use curve::Point;
use serde::{Deserialize, Serialize};

use crate::base58check::{decode_check, encode_check};
use crate::constants::{HASH160_SIZE, PAYLOAD_SIZE, VERSIONED_SIZE};
use crate::errors::AddressError;
use crate::hash::{checksum, hash160};
use crate::network::Network;

/// A pay-to-public-key-hash address: a network byte and the HASH160 of a
/// SEC-encoded public key.
///
/// `Display` yields the Base58Check string; `FromStr` parses it back,
/// verifying the checksum and the network byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    network: Network,
    hash160: [u8; HASH160_SIZE],
}

impl Address {
    /// Derives the address of `point` from its compressed SEC encoding.
    ///
    /// The point is not validated; call [`Point::is_on_curve`] first if it
    /// comes from an untrusted source.
    pub fn from_point(point: &Point, network: Network) -> Self {
        Self::from_sec(&point.sec_compressed(), network)
    }

    /// Derives the address of `point` from its uncompressed SEC encoding.
    pub fn from_point_uncompressed(point: &Point, network: Network) -> Self {
        Self::from_sec(&point.sec_uncompressed(), network)
    }

    /// Derives the address of an already serialized public key.
    pub fn from_sec(sec: &[u8], network: Network) -> Self {
        Address {
            network,
            hash160: hash160(sec),
        }
    }

    #[inline]
    pub fn network(&self) -> Network {
        self.network
    }

    #[inline]
    pub fn hash160(&self) -> &[u8; HASH160_SIZE] {
        &self.hash160
    }

    fn versioned(&self) -> [u8; VERSIONED_SIZE] {
        let mut versioned = [0u8; VERSIONED_SIZE];
        versioned[0] = self.network.version_byte();
        versioned[1..].copy_from_slice(&self.hash160);
        versioned
    }

    /// The 25 raw bytes behind the Base58 string:
    /// network byte, HASH160, then the 4-byte checksum.
    pub fn payload(&self) -> [u8; PAYLOAD_SIZE] {
        let versioned = self.versioned();
        let mut payload = [0u8; PAYLOAD_SIZE];
        payload[..VERSIONED_SIZE].copy_from_slice(&versioned);
        payload[VERSIONED_SIZE..].copy_from_slice(&checksum(&versioned));
        payload
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_check(&self.versioned()))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let versioned = decode_check(s)?;
        if versioned.len() != VERSIONED_SIZE {
            return Err(AddressError::InvalidLength(
                versioned.len() + (PAYLOAD_SIZE - VERSIONED_SIZE),
            ));
        }

        let network = Network::try_from(versioned[0])?;
        let mut hash160 = [0u8; HASH160_SIZE];
        hash160.copy_from_slice(&versioned[1..]);

        Ok(Address { network, hash160 })
    }
}

/// Base58Check address of `point` on `network`, derived from its compressed
/// SEC encoding.
pub fn get_address(point: &Point, network: Network) -> String {
    Address::from_point(point, network).to_string()
}
