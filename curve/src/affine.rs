// E: y^2 = x^3 + 7 over F_p
// secp256k1 uses p = 2^256 - 2^32 - 977 with the generator from SEC 2:
// G = (0x79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798,
//      0x483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8)
// The same equation over small primes (e.g. p = 223) is used in tests.

use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::secp256k1;
use crate::FieldElement;

/// Affine point on `y^2 = x^3 + 7`.
///
/// Both coordinates belong to the same field. Curve membership is not
/// checked on construction; call [`Point::is_on_curve`] when the input is
/// untrusted. There is no point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PointRepr", into = "PointRepr")]
pub struct Point {
    x: FieldElement,
    y: FieldElement,
}

#[derive(Serialize, Deserialize)]
struct PointRepr {
    x: FieldElement,
    y: FieldElement,
}

impl TryFrom<PointRepr> for Point {
    type Error = FieldError;

    fn try_from(repr: PointRepr) -> Result<Self, Self::Error> {
        Point::new(repr.x, repr.y)
    }
}

impl From<Point> for PointRepr {
    fn from(point: Point) -> Self {
        PointRepr {
            x: point.x,
            y: point.y,
        }
    }
}

impl Point {
    /// Create a new affine point.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self, FieldError> {
        if x.modulus() != y.modulus() {
            return Err(FieldError::FieldMismatch);
        }
        Ok(Self::from_parts(x, y))
    }

    pub(crate) fn from_parts(x: FieldElement, y: FieldElement) -> Self {
        Point { x, y }
    }

    /// The secp256k1 generator `G`.
    pub fn generator() -> Self {
        secp256k1::generator().clone()
    }

    #[inline]
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Get the 'b' coefficient in this point's field.
    #[inline]
    fn curve_b(&self) -> FieldElement {
        let modulus = self.x.modulus();
        if modulus == secp256k1::modulus() {
            secp256k1::curve_b().clone()
        } else {
            FieldElement::new(secp256k1::B, modulus)
        }
    }

    /// Check if a point is on the curve: y^2 = x^3 + 7.
    pub fn is_on_curve(&self) -> bool {
        self.satisfies_curve_equation().unwrap_or(false)
    }

    fn satisfies_curve_equation(&self) -> Result<bool, FieldError> {
        let y2 = self.y.square();
        let x3 = self.x.square().checked_mul(&self.x)?;
        let rhs = x3.checked_add(&self.curve_b())?;

        y2.checked_eq(&rhs)
    }

    /// Point doubling: 2*P.
    ///
    /// Fails with [`FieldError::DivisionByZero`] when `y = 0`, since the
    /// tangent is vertical and the result would be the point at infinity.
    pub fn double(&self) -> Result<Self, FieldError> {
        let modulus = self.x.modulus();
        let two = FieldElement::new(2u32, modulus);
        let three = FieldElement::new(3u32, modulus);

        // Compute slope: λ = 3x^2 / 2y
        let numerator = three.checked_mul(&self.x.square())?;
        let denominator = two.checked_mul(&self.y)?;
        let lambda = numerator.checked_div(&denominator)?;

        // x_r = λ^2 - 2x
        let x_r = lambda.square().checked_sub(&self.x)?.checked_sub(&self.x)?;

        // y_r = λ(x - x_r) - y
        let y_r = lambda
            .checked_mul(&self.x.checked_sub(&x_r)?)?
            .checked_sub(&self.y)?;

        Ok(Point::from_parts(x_r, y_r))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}
