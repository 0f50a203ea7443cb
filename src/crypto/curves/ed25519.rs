//! Ed25519 Curve Implementation
//!
//! Key generation and EdDSA signing (RFC 8032) over `ed25519-dalek`.
//! Signing is deterministic: the same seed and message always produce the
//! same signature.

use super::EllipticCurve;
use crate::error::{SignerError, SignerResult};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

pub const PUBLIC_KEY_LENGTH: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// Ed25519 key pair derived from a 32-byte seed.
///
/// The signing key (and the expanded secret it produces on every
/// signature) is zeroized when the pair is dropped.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
    public_key: [u8; PUBLIC_KEY_LENGTH],
}

impl Ed25519KeyPair {
    /// Create from seed bytes (32 bytes)
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        let public_key = signing_key.verifying_key().to_bytes();
        Self {
            signing_key,
            public_key,
        }
    }

    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.public_key
    }

    /// Sign a message
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        let signature: Signature = self.signing_key.sign(message);
        signature.to_bytes()
    }
}

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

/// Ed25519 curve implementation
pub struct Ed25519Curve;

impl EllipticCurve for Ed25519Curve {
    type PublicKey = [u8; PUBLIC_KEY_LENGTH];
    type Signature = [u8; SIGNATURE_LENGTH];

    fn public_key_from_seed(seed: &[u8; 32]) -> SignerResult<Self::PublicKey> {
        Ok(*Ed25519KeyPair::from_seed(seed).public_key())
    }

    fn sign(seed: &[u8; 32], message: &[u8]) -> SignerResult<Self::Signature> {
        Ok(Ed25519KeyPair::from_seed(seed).sign(message))
    }

    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> SignerResult<bool> {
        let pk_bytes: [u8; PUBLIC_KEY_LENGTH] = public_key.try_into().map_err(|_| {
            SignerError::invalid_input(format!(
                "Public key must be {} bytes, got {}",
                PUBLIC_KEY_LENGTH,
                public_key.len()
            ))
        })?;
        let sig_bytes: [u8; SIGNATURE_LENGTH] = signature.try_into().map_err(|_| {
            SignerError::invalid_input(format!(
                "Signature must be {} bytes, got {}",
                SIGNATURE_LENGTH,
                signature.len()
            ))
        })?;

        let verifying_key = VerifyingKey::from_bytes(&pk_bytes)
            .map_err(|e| SignerError::primitive(e.to_string()))?;
        let sig = Signature::from_bytes(&sig_bytes);

        Ok(verifying_key.verify(message, &sig).is_ok())
    }
}
