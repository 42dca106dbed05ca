//! SEC 1 public-key encodings of affine points.

use crate::basefield::FIELD_BYTES;
use crate::Point;

/// Size of a compressed SEC encoding: prefix byte plus x.
pub const COMPRESSED_SEC_SIZE: usize = 1 + FIELD_BYTES;

/// Size of an uncompressed SEC encoding: prefix byte plus x and y.
pub const UNCOMPRESSED_SEC_SIZE: usize = 1 + 2 * FIELD_BYTES;

const EVEN_Y_PREFIX: u8 = 0x02;
const ODD_Y_PREFIX: u8 = 0x03;
const UNCOMPRESSED_PREFIX: u8 = 0x04;

impl Point {
    /// Compressed encoding: `0x02` (even y) or `0x03` (odd y), followed by
    /// the big-endian x-coordinate padded to 32 bytes.
    pub fn sec_compressed(&self) -> [u8; COMPRESSED_SEC_SIZE] {
        let mut sec = [0u8; COMPRESSED_SEC_SIZE];
        sec[0] = if self.y().is_even() {
            EVEN_Y_PREFIX
        } else {
            ODD_Y_PREFIX
        };
        sec[1..].copy_from_slice(&self.x().to_bytes_be());
        sec
    }

    /// Uncompressed encoding: `0x04 || x || y`.
    pub fn sec_uncompressed(&self) -> [u8; UNCOMPRESSED_SEC_SIZE] {
        let mut sec = [0u8; UNCOMPRESSED_SEC_SIZE];
        sec[0] = UNCOMPRESSED_PREFIX;
        sec[1..1 + FIELD_BYTES].copy_from_slice(&self.x().to_bytes_be());
        sec[1 + FIELD_BYTES..].copy_from_slice(&self.y().to_bytes_be());
        sec
    }

    /// Lower-case hex of [`Point::sec_compressed`].
    pub fn sec_compressed_hex(&self) -> String {
        hex::encode(self.sec_compressed())
    }

    /// Lower-case hex of [`Point::sec_uncompressed`].
    pub fn sec_uncompressed_hex(&self) -> String {
        hex::encode(self.sec_uncompressed())
    }
}
