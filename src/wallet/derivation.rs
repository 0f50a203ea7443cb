//! Key Derivation
//!
//! SLIP-0010 hierarchical derivation for Ed25519.
//!
//! An `ExtendedKey` is the 64-byte HMAC-SHA512 output: 32 bytes of key
//! material followed by a 32-byte chain code. Only hardened derivation exists
//! for this curve, but the index is used exactly as the caller passes it; set
//! the top bit yourself (see `DerivationComponent::full_index`).
//!
//! SECURITY: Extended keys and MAC inputs are zeroized when dropped.

use serde::Serialize;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::hmac_sha512;
use crate::error::SignerResult;
use crate::log_debug;

use super::derivation_path::DerivationPath;

/// HMAC key for the master node on the ed25519 curve
pub const ED25519_CURVE: &[u8] = b"ed25519 seed";

pub const EXTENDED_KEY_LENGTH: usize = 64;
pub const KEY_LENGTH: usize = 32;
pub const CHAIN_CODE_LENGTH: usize = 32;

/// 0x00 || key (32) || index (4)
const CHILD_INPUT_LENGTH: usize = 1 + KEY_LENGTH + 4;

/// Private key material plus chain code
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKey {
    key: [u8; KEY_LENGTH],
    chain_code: [u8; CHAIN_CODE_LENGTH],
}

impl ExtendedKey {
    pub fn from_bytes(bytes: &[u8; EXTENDED_KEY_LENGTH]) -> Self {
        let mut key = [0u8; KEY_LENGTH];
        let mut chain_code = [0u8; CHAIN_CODE_LENGTH];
        key.copy_from_slice(&bytes[..KEY_LENGTH]);
        chain_code.copy_from_slice(&bytes[KEY_LENGTH..]);
        Self { key, chain_code }
    }

    /// Key material half; this is the Ed25519 signing seed
    pub fn key(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; CHAIN_CODE_LENGTH] {
        &self.chain_code
    }

    /// The 64-byte wire form, key material first
    pub fn to_bytes(&self) -> Zeroizing<[u8; EXTENDED_KEY_LENGTH]> {
        let mut out = Zeroizing::new([0u8; EXTENDED_KEY_LENGTH]);
        out[..KEY_LENGTH].copy_from_slice(&self.key);
        out[KEY_LENGTH..].copy_from_slice(&self.chain_code);
        out
    }

    /// Hex view for the CLI. Contains secret material.
    pub fn to_export(&self) -> ExtendedKeyExport {
        ExtendedKeyExport {
            key: self.key,
            chain_code: self.chain_code,
        }
    }
}

impl PartialEq for ExtendedKey {
    fn eq(&self, other: &Self) -> bool {
        let key_eq = self.key[..].ct_eq(&other.key[..]);
        let chain_eq = self.chain_code[..].ct_eq(&other.chain_code[..]);
        (key_eq & chain_eq).into()
    }
}

impl Eq for ExtendedKey {}

impl std::fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ExtendedKey([REDACTED])")
    }
}

/// Serializable form of an extended key
#[derive(Serialize, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKeyExport {
    #[serde(with = "crate::serde_bytes::hex32")]
    pub key: [u8; KEY_LENGTH],
    #[serde(with = "crate::serde_bytes::hex32")]
    pub chain_code: [u8; CHAIN_CODE_LENGTH],
}

/// Derive the master node from a seed
pub fn master_key(seed: &[u8]) -> SignerResult<ExtendedKey> {
    let out = hmac_sha512(ED25519_CURVE, seed)?;
    Ok(ExtendedKey::from_bytes(&out))
}

/// Derive one child node. `index` is encoded big-endian without modification.
pub fn derive_child(parent: &ExtendedKey, index: u32) -> SignerResult<ExtendedKey> {
    let mut data = Zeroizing::new([0u8; CHILD_INPUT_LENGTH]);
    data[0] = 0x00;
    data[1..1 + KEY_LENGTH].copy_from_slice(parent.key());
    data[1 + KEY_LENGTH..].copy_from_slice(&index.to_be_bytes());

    let out = hmac_sha512(parent.chain_code(), data.as_ref())?;
    Ok(ExtendedKey::from_bytes(&out))
}

/// Walk a full path from the seed
pub fn derive_path(seed: &[u8], path: &DerivationPath) -> SignerResult<ExtendedKey> {
    log_debug!("wallet::derivation", "Deriving path", depth = path.depth());

    let mut current = master_key(seed)?;
    for index in path.indices() {
        current = derive_child(&current, index)?;
    }
    Ok(current)
}
