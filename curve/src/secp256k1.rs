//! secp256k1 domain parameters: `y^2 = x^3 + 7` over `F_p`,
//! `p = 2^256 - 2^32 - 977`.
//!
//! The constants are built once on first use and are read-only afterwards.

use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::{FieldElement, Modulus, Point};

/// Constant term of the curve equation.
pub const B: u32 = 7;

const P_BYTES: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");
const GX_BYTES: [u8; 32] = hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
const GY_BYTES: [u8; 32] = hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

static MODULUS: Lazy<Modulus> =
    Lazy::new(|| Modulus::from_trusted(BigUint::from_bytes_be(&P_BYTES)));

static CURVE_B: Lazy<FieldElement> = Lazy::new(|| FieldElement::new(B, &MODULUS));

static GENERATOR: Lazy<Point> = Lazy::new(|| {
    Point::from_parts(
        FieldElement::from_bytes_be(&GX_BYTES, &MODULUS),
        FieldElement::from_bytes_be(&GY_BYTES, &MODULUS),
    )
});

/// The field prime `p`.
#[inline]
pub fn modulus() -> &'static Modulus {
    &MODULUS
}

/// The curve constant `b = 7` as an element of `F_p`.
#[inline]
pub fn curve_b() -> &'static FieldElement {
    &CURVE_B
}

/// The published generator point `G`.
#[inline]
pub fn generator() -> &'static Point {
    &GENERATOR
}
