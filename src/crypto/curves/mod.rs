//! Curve Support
//!
//! Sui defines several signature schemes, but only Ed25519 has a curve
//! backend here. New backends implement `EllipticCurve`.

pub mod ed25519;
pub mod traits;

pub use ed25519::{Ed25519Curve, Ed25519KeyPair, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
pub use traits::*;
