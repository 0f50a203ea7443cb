//! Sui Addresses
//!
//! address = blake2b_256(flag || public_key), shown as 0x-prefixed hex.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::crypto::blake2b_256;
use crate::crypto::curves::PUBLIC_KEY_LENGTH;
use crate::error::{SignerError, SignerResult};

use super::encoded::EncodedSignature;
use super::scheme::SignatureScheme;

pub const SUI_ADDRESS_LENGTH: usize = 32;

/// Sui account address
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SuiAddress {
    bytes: [u8; SUI_ADDRESS_LENGTH],
}

impl SuiAddress {
    pub fn new(bytes: [u8; SUI_ADDRESS_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Address of a single Ed25519 signer
    pub fn from_public_key(public_key: &[u8; PUBLIC_KEY_LENGTH]) -> Self {
        let mut preimage = [0u8; 1 + PUBLIC_KEY_LENGTH];
        preimage[0] = SignatureScheme::Ed25519.flag();
        preimage[1..].copy_from_slice(public_key);
        Self::new(blake2b_256(&preimage))
    }

    /// Address of the key that produced `signature`
    pub fn from_signature(signature: &EncodedSignature) -> SignerResult<Self> {
        if signature.scheme() != SignatureScheme::Ed25519 {
            return Err(SignerError::UnsupportedScheme(signature.flag()));
        }
        let public_key: [u8; PUBLIC_KEY_LENGTH] = signature
            .public_key()
            .try_into()
            .map_err(|_| SignerError::invalid_input("Invalid public key length"))?;
        Ok(Self::from_public_key(&public_key))
    }

    /// Parse from hex, with or without `0x`. Short forms such as `0x2` are
    /// left-padded with zeros.
    pub fn from_string(s: &str) -> SignerResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix("0x").unwrap_or(s);

        if s.is_empty() || s.len() > SUI_ADDRESS_LENGTH * 2 {
            return Err(SignerError::invalid_input(format!(
                "Invalid address length: {} hex chars",
                s.len()
            )));
        }

        let padded = format!("{:0>64}", s);
        let mut bytes = [0u8; SUI_ADDRESS_LENGTH];
        hex::decode_to_slice(&padded, &mut bytes)?;
        Ok(Self::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SUI_ADDRESS_LENGTH] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for SuiAddress {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl Serialize for SuiAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SuiAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}
