//! Elliptic Curve Traits
//!
//! The interface the signing pipeline expects from a curve backend. Only
//! Ed25519 implements it today; other Sui schemes would plug in here.

use crate::error::SignerResult;

/// Core trait for elliptic curve operations
pub trait EllipticCurve {
    /// The public key type
    type PublicKey: AsRef<[u8]>;
    /// The signature type
    type Signature: AsRef<[u8]>;

    /// Derive the public key from a 32-byte private seed
    fn public_key_from_seed(seed: &[u8; 32]) -> SignerResult<Self::PublicKey>;

    /// Sign a message with a 32-byte private seed
    fn sign(seed: &[u8; 32], message: &[u8]) -> SignerResult<Self::Signature>;

    /// Verify a signature
    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> SignerResult<bool>;
}
