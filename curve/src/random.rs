use num_bigint::BigUint;
use rand::Rng;

use crate::basefield::{FieldElement, Modulus, FIELD_BYTES};

impl FieldElement {
    /// Samples a uniformly random element of the field.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, modulus: &Modulus) -> Self {
        let excess_bits = (FIELD_BYTES as u64 * 8 - modulus.bits()) as usize;
        loop {
            let bytes: [u8; FIELD_BYTES] = rng.random();
            let candidate = BigUint::from_bytes_be(&bytes) >> excess_bits;

            if &candidate < modulus.value() {
                return FieldElement::new(candidate, modulus);
            }
        }
    }
}
