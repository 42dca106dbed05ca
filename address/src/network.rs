use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::errors::AddressError;

/// Version byte selecting the address-encoding context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Network {
    Mainnet = 0x00,
    Testnet = 0x6f,
}

impl Network {
    #[inline]
    pub fn version_byte(self) -> u8 {
        self as u8
    }
}

impl From<Network> for u8 {
    fn from(network: Network) -> Self {
        network.version_byte()
    }
}

impl TryFrom<u8> for Network {
    type Error = AddressError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x00 => Ok(Network::Mainnet),
            0x6f => Ok(Network::Testnet),
            other => Err(AddressError::UnknownNetwork(other)),
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}
