//! Error types for field and curve arithmetic.

use thiserror::Error;

/// Errors raised by field-element and point operations.
///
/// Every variant reflects a precondition violated by the caller; none of
/// them is transient.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The operands belong to different prime fields.
    #[error("field elements belong to different moduli")]
    FieldMismatch,

    /// Division by the zero element.
    ///
    /// Also returned when doubling a point with `y = 0`, whose tangent is
    /// vertical and has no affine result.
    #[error("division by zero")]
    DivisionByZero,

    /// The modulus is below 2 or wider than 256 bits.
    #[error("invalid modulus of {bits} bits")]
    InvalidModulus { bits: u64 },
}
