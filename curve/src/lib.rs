//! Prime-field and affine-point arithmetic for the secp256k1 curve.
//!
//! This crate provides field elements over a runtime prime modulus, affine
//! points on `y^2 = x^3 + 7` with doubling and SEC encodings, and the
//! secp256k1 domain parameters in the `secp256k1` module.

mod affine;
mod basefield;
mod error;
mod random;
mod sec;
pub mod secp256k1;

pub use affine::Point;
pub use basefield::{FieldElement, Modulus, FIELD_BYTES};
pub use error::FieldError;
pub use sec::{COMPRESSED_SEC_SIZE, UNCOMPRESSED_SEC_SIZE};
