//! Cryptographic primitives
//!
//! Thin wrappers over the trusted primitive crates:
//! - BLAKE2b-256 (`blake2`) for transaction digests and addresses
//! - HMAC-SHA512 (`hmac` + `sha2`) for SLIP-0010 derivation
//! - Ed25519 (`ed25519-dalek`) in `curves`

pub mod curves;

pub use curves::{Ed25519Curve, Ed25519KeyPair, EllipticCurve};

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest as BlakeDigest};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::error::{SignerError, SignerResult};

type Blake2b256 = Blake2b<U32>;
type HmacSha512 = Hmac<Sha512>;

pub const DIGEST_LENGTH: usize = 32;
pub const HMAC_OUTPUT_LENGTH: usize = 64;

/// BLAKE2b with a 32-byte output
pub fn blake2b_256(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// HMAC-SHA512. The output is key material, so it comes back zeroizing.
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> SignerResult<Zeroizing<[u8; HMAC_OUTPUT_LENGTH]>> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| SignerError::primitive(format!("HMAC error: {}", e)))?;
    mac.update(data);

    let mut out = Zeroizing::new([0u8; HMAC_OUTPUT_LENGTH]);
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}
