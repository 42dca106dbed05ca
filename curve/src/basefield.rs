//! Prime field arithmetic over a runtime modulus of at most 256 bits.
//!
//! Elements carry a shared handle to the modulus they were created under, so
//! mixing elements of different fields is rejected at runtime instead of
//! silently producing garbage.

use core::fmt::{self, Display, Formatter, LowerHex};
use std::sync::Arc;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Width in bytes of a serialized field element.
pub const FIELD_BYTES: usize = 32;

const MAX_MODULUS_BITS: u64 = (FIELD_BYTES * 8) as u64;

/// Prime modulus of a field.
///
/// Cloning is cheap; clones share the underlying integer. Primality is not
/// checked, but division relies on it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BigUint", into = "BigUint")]
pub struct Modulus(Arc<BigUint>);

impl Modulus {
    /// Creates a modulus, rejecting values below 2 or wider than 256 bits.
    pub fn new(value: impl Into<BigUint>) -> Result<Self, FieldError> {
        let value = value.into();
        let bits = value.bits();
        if !(2..=MAX_MODULUS_BITS).contains(&bits) {
            return Err(FieldError::InvalidModulus { bits });
        }
        Ok(Self(Arc::new(value)))
    }

    /// Wraps a modulus known to be in range.
    pub(crate) fn from_trusted(value: BigUint) -> Self {
        debug_assert!(value.bits() >= 2 && value.bits() <= MAX_MODULUS_BITS);
        Self(Arc::new(value))
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    #[inline]
    fn same_field(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl TryFrom<BigUint> for Modulus {
    type Error = FieldError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Modulus> for BigUint {
    fn from(modulus: Modulus) -> Self {
        Arc::unwrap_or_clone(modulus.0)
    }
}

impl Display for Modulus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.value(), f)
    }
}

/// Element of the prime field `F_p`.
///
/// The value is always reduced into `[0, p)`. Binary operations return
/// [`FieldError::FieldMismatch`] when the operands come from different moduli.
/// Moduli are compared by value, so two [`Modulus`] handles built from the
/// same prime denote the same field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "FieldElementRepr", into = "FieldElementRepr")]
pub struct FieldElement {
    value: BigUint,
    modulus: Modulus,
}

#[derive(Serialize, Deserialize)]
struct FieldElementRepr {
    value: BigUint,
    modulus: Modulus,
}

impl From<FieldElementRepr> for FieldElement {
    fn from(repr: FieldElementRepr) -> Self {
        FieldElement::new(repr.value, &repr.modulus)
    }
}

impl From<FieldElement> for FieldElementRepr {
    fn from(element: FieldElement) -> Self {
        FieldElementRepr {
            value: element.value,
            modulus: element.modulus,
        }
    }
}

impl FieldElement {
    /// Creates an element from an arbitrary integer, reducing it mod p.
    pub fn new(value: impl Into<BigUint>, modulus: &Modulus) -> Self {
        FieldElement {
            value: value.into() % modulus.value(),
            modulus: modulus.clone(),
        }
    }

    /// Creates an element from big-endian bytes, reducing the integer mod p.
    pub fn from_bytes_be(bytes: &[u8], modulus: &Modulus) -> Self {
        Self::new(BigUint::from_bytes_be(bytes), modulus)
    }

    #[inline]
    pub fn zero(modulus: &Modulus) -> Self {
        Self::new(0u32, modulus)
    }

    #[inline]
    pub fn one(modulus: &Modulus) -> Self {
        Self::new(1u32, modulus)
    }

    /// Canonical integer representative in `[0, p)`.
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.bits() == 0
    }

    /// Parity of the canonical representative.
    #[inline]
    pub fn is_even(&self) -> bool {
        !self.value.bit(0)
    }

    #[inline]
    fn with_value(&self, value: BigUint) -> Self {
        FieldElement {
            value,
            modulus: self.modulus.clone(),
        }
    }

    #[inline]
    fn check_field(&self, rhs: &Self) -> Result<(), FieldError> {
        if self.modulus.same_field(&rhs.modulus) {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch)
        }
    }

    /// `(self + rhs) mod p`.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_field(rhs)?;
        Ok(self.with_value((&self.value + &rhs.value) % self.modulus.value()))
    }

    /// `(self - rhs) mod p`, always in `[0, p)`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_field(rhs)?;
        // Both operands are below p, so adding p first keeps the difference
        // non-negative.
        let p = self.modulus.value();
        Ok(self.with_value((&self.value + p - &rhs.value) % p))
    }

    /// `(self * rhs) mod p`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_field(rhs)?;
        Ok(self.with_value((&self.value * &rhs.value) % self.modulus.value()))
    }

    /// `self * rhs^(p-2) mod p`.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_field(rhs)?;
        let inverse = rhs.inverse()?;
        self.checked_mul(&inverse)
    }

    /// Value equality, after checking both elements share a field.
    pub fn checked_eq(&self, rhs: &Self) -> Result<bool, FieldError> {
        self.check_field(rhs)?;
        Ok(self.value == rhs.value)
    }

    #[inline]
    pub fn square(&self) -> Self {
        self.with_value((&self.value * &self.value) % self.modulus.value())
    }

    /// Modular exponentiation by square-and-multiply.
    pub fn pow(&self, exponent: &BigUint) -> Self {
        self.with_value(self.value.modpow(exponent, self.modulus.value()))
    }

    /// Multiplicative inverse via Fermat's little theorem: `self^(p-2)`.
    pub fn inverse(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let exponent = self.modulus.value() - 2u32;
        Ok(self.pow(&exponent))
    }

    /// Big-endian encoding, left-padded with zeros to [`FIELD_BYTES`].
    pub fn to_bytes_be(&self) -> [u8; FIELD_BYTES] {
        let bytes = self.value.to_bytes_be();
        let mut out = [0u8; FIELD_BYTES];
        out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
        out
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl LowerHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", self.value, width = FIELD_BYTES * 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secp256k1;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn modulus(p: u32) -> Modulus {
        Modulus::new(p).expect("valid modulus")
    }

    fn fe(value: u32, p: &Modulus) -> FieldElement {
        FieldElement::new(value, p)
    }

    #[test]
    fn test_zero_one() {
        let p = modulus(31);
        assert!(FieldElement::zero(&p).is_zero());
        assert!(!FieldElement::one(&p).is_zero());
        assert_eq!(FieldElement::one(&p).value(), &BigUint::from(1u32));
    }

    #[test]
    fn test_constructor_reduces() {
        let p = modulus(31);
        assert_eq!(fe(33, &p), fe(2, &p));
        assert_eq!(fe(31, &p), FieldElement::zero(&p));
    }

    #[test]
    fn test_invalid_modulus() {
        assert_eq!(
            Modulus::new(1u32),
            Err(FieldError::InvalidModulus { bits: 1 })
        );
        let too_wide = BigUint::from(1u32) << 256;
        assert_eq!(
            Modulus::new(too_wide),
            Err(FieldError::InvalidModulus { bits: 257 })
        );
    }

    #[test]
    fn test_addition() {
        let p = modulus(57);
        assert_eq!(fe(44, &p).checked_add(&fe(33, &p)), Ok(fe(20, &p)));

        let sum = fe(17, &p)
            .checked_add(&fe(42, &p))
            .and_then(|s| s.checked_add(&fe(49, &p)));
        assert_eq!(sum, Ok(fe(51, &p)));
    }

    #[test]
    fn test_subtraction() {
        let p = modulus(57);
        assert_eq!(fe(9, &p).checked_sub(&fe(29, &p)), Ok(fe(37, &p)));

        let diff = fe(52, &p)
            .checked_sub(&fe(30, &p))
            .and_then(|d| d.checked_sub(&fe(38, &p)));
        assert_eq!(diff, Ok(fe(41, &p)));
    }

    #[test]
    fn test_subtraction_wraps_full_width() {
        let p = secp256k1::modulus();
        let one = FieldElement::one(p);
        let two = FieldElement::new(2u32, p);
        let p_minus_one = FieldElement::new(p.value() - 1u32, p);

        assert_eq!(one.checked_sub(&two), Ok(p_minus_one.clone()));
        assert_eq!(one.checked_sub(&p_minus_one), Ok(two));
    }

    #[test]
    fn test_multiplication() {
        let p = modulus(97);
        let product = fe(95, &p)
            .checked_mul(&fe(45, &p))
            .and_then(|m| m.checked_mul(&fe(31, &p)));
        assert_eq!(product, Ok(fe(23, &p)));

        let product = fe(17, &p)
            .checked_mul(&fe(13, &p))
            .and_then(|m| m.checked_mul(&fe(19, &p)))
            .and_then(|m| m.checked_mul(&fe(44, &p)));
        assert_eq!(product, Ok(fe(68, &p)));
    }

    #[test]
    fn test_division() {
        let p = modulus(31);
        assert_eq!(fe(3, &p).checked_div(&fe(24, &p)), Ok(fe(4, &p)));

        // 17^-3 = (17^-1)^3
        let inv_cubed = fe(17, &p)
            .inverse()
            .map(|inv| inv.pow(&BigUint::from(3u32)));
        assert_eq!(inv_cubed, Ok(fe(29, &p)));
    }

    #[test]
    fn test_division_by_zero() {
        let p = modulus(31);
        assert_eq!(
            fe(3, &p).checked_div(&FieldElement::zero(&p)),
            Err(FieldError::DivisionByZero)
        );
        assert_eq!(
            FieldElement::zero(&p).inverse(),
            Err(FieldError::DivisionByZero)
        );
    }

    #[test]
    fn test_fermat() {
        let p = modulus(223);
        let exponent = BigUint::from(222u32);
        for value in 1..223 {
            assert_eq!(fe(value, &p).pow(&exponent), FieldElement::one(&p));
        }
    }

    #[test]
    fn test_field_mismatch() {
        let a = fe(2, &modulus(31));
        let b = fe(2, &modulus(223));

        assert_eq!(a.checked_add(&b), Err(FieldError::FieldMismatch));
        assert_eq!(a.checked_sub(&b), Err(FieldError::FieldMismatch));
        assert_eq!(a.checked_mul(&b), Err(FieldError::FieldMismatch));
        assert_eq!(a.checked_div(&b), Err(FieldError::FieldMismatch));
        assert_eq!(a.checked_eq(&b), Err(FieldError::FieldMismatch));
    }

    #[test]
    fn test_same_value_moduli_are_one_field() {
        let a = fe(5, &modulus(31));
        let b = fe(5, &modulus(31));
        assert_eq!(a.checked_eq(&b), Ok(true));
    }

    #[test]
    fn test_closure() {
        let p = secp256k1::modulus();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..64 {
            let a = FieldElement::random(&mut rng, p);
            let b = FieldElement::random(&mut rng, p);

            for result in [a.checked_add(&b), a.checked_sub(&b), a.checked_mul(&b)] {
                let result = result.expect("same field");
                assert!(result.value() < p.value());
            }
        }
    }

    #[test]
    fn test_inverse_identities() {
        let p = secp256k1::modulus();
        let one = FieldElement::one(p);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..16 {
            let a = FieldElement::random(&mut rng, p);
            let b = FieldElement::random(&mut rng, p);

            assert!(a.checked_sub(&a).expect("same field").is_zero());

            let inv = one.checked_div(&a).expect("nonzero");
            assert_eq!(a.checked_mul(&inv), Ok(one.clone()));

            let quotient = a.checked_div(&b).expect("nonzero");
            assert_eq!(quotient.checked_mul(&b), Ok(a));
        }
    }

    #[test]
    fn test_bytes_be_padding() {
        let p = modulus(223);
        let bytes = fe(192, &p).to_bytes_be();
        assert_eq!(bytes[..31], [0u8; 31]);
        assert_eq!(bytes[31], 192);
        assert_eq!(FieldElement::from_bytes_be(&bytes, &p), fe(192, &p));
    }

    #[test]
    fn test_formatting() {
        let p = modulus(223);
        assert_eq!(fe(192, &p).to_string(), "192");
        assert_eq!(format!("{:x}", fe(192, &p)), format!("{:0>64}", "c0"));
    }

    #[test]
    fn test_serde_round_trip() {
        let p = modulus(31);
        let bytes = bincode::serialize(&fe(7, &p)).expect("serialize");
        let decoded: FieldElement = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(decoded, fe(7, &p));
    }

    #[test]
    fn test_serde_reduces_on_decode() {
        let unreduced = FieldElementRepr {
            value: BigUint::from(40u32),
            modulus: modulus(31),
        };
        let bytes = bincode::serialize(&unreduced).expect("serialize");
        let decoded: FieldElement = bincode::deserialize(&bytes).expect("deserialize");

        assert_eq!(decoded.value(), &BigUint::from(9u32));
        assert_eq!(decoded, fe(9, &modulus(31)));
    }

    #[test]
    fn test_serde_rejects_invalid_modulus() {
        let bytes = bincode::serialize(&BigUint::from(1u32)).expect("serialize");
        assert!(bincode::deserialize::<Modulus>(&bytes).is_err());

        let bytes = bincode::serialize(&BigUint::from(31u32)).expect("serialize");
        let decoded: Modulus = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(decoded, modulus(31));
    }
}
