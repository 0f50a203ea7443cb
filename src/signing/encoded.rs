//! Encoded Signatures
//!
//! Sui's serialized user signature: `flag || signature || public_key`.
//! The layout is fixed at 97 bytes, sized for Ed25519.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::crypto::curves::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use crate::error::{SignerError, SignerResult};

use super::scheme::SignatureScheme;

pub const ENCODED_SIGNATURE_LENGTH: usize = 1 + SIGNATURE_LENGTH + PUBLIC_KEY_LENGTH;

const SIGNATURE_OFFSET: usize = 1;
const PUBLIC_KEY_OFFSET: usize = SIGNATURE_OFFSET + SIGNATURE_LENGTH;

/// A complete, wire-ready signature
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EncodedSignature {
    scheme: SignatureScheme,
    bytes: [u8; ENCODED_SIGNATURE_LENGTH],
}

impl EncodedSignature {
    pub fn new(
        scheme: SignatureScheme,
        signature: &[u8; SIGNATURE_LENGTH],
        public_key: &[u8; PUBLIC_KEY_LENGTH],
    ) -> Self {
        let mut bytes = [0u8; ENCODED_SIGNATURE_LENGTH];
        bytes[0] = scheme.flag();
        bytes[SIGNATURE_OFFSET..PUBLIC_KEY_OFFSET].copy_from_slice(signature);
        bytes[PUBLIC_KEY_OFFSET..].copy_from_slice(public_key);
        Self { scheme, bytes }
    }

    /// Parse a 97-byte blob. The flag byte must name a known scheme.
    pub fn from_bytes(bytes: &[u8]) -> SignerResult<Self> {
        let bytes: [u8; ENCODED_SIGNATURE_LENGTH] = bytes.try_into().map_err(|_| {
            SignerError::invalid_input(format!(
                "Encoded signature must be {} bytes, got {}",
                ENCODED_SIGNATURE_LENGTH,
                bytes.len()
            ))
        })?;
        let scheme = SignatureScheme::try_from(bytes[0])?;
        Ok(Self { scheme, bytes })
    }

    pub fn from_base64(s: &str) -> SignerResult<Self> {
        let decoded = STANDARD.decode(s.trim())?;
        Self::from_bytes(&decoded)
    }

    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    pub fn flag(&self) -> u8 {
        self.bytes[0]
    }

    pub fn signature(&self) -> &[u8] {
        &self.bytes[SIGNATURE_OFFSET..PUBLIC_KEY_OFFSET]
    }

    pub fn public_key(&self) -> &[u8] {
        &self.bytes[PUBLIC_KEY_OFFSET..]
    }

    pub fn as_bytes(&self) -> &[u8; ENCODED_SIGNATURE_LENGTH] {
        &self.bytes
    }

    /// Base64, as submitted to Sui RPC
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl std::fmt::Debug for EncodedSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedSignature")
            .field("scheme", &self.scheme())
            .field("signature", &hex::encode(self.signature()))
            .field("public_key", &hex::encode(self.public_key()))
            .finish()
    }
}

impl Serialize for EncodedSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for EncodedSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EncodedSignature {
        EncodedSignature::new(SignatureScheme::Ed25519, &[0x11; 64], &[0x22; 32])
    }

    #[test]
    fn test_layout() {
        let enc = sample();
        let bytes = enc.as_bytes();
        assert_eq!(bytes.len(), 97);
        assert_eq!(bytes[0], 0x00);
        assert!(bytes[1..65].iter().all(|&b| b == 0x11));
        assert!(bytes[65..].iter().all(|&b| b == 0x22));
        assert_eq!(enc.signature(), &[0x11; 64][..]);
        assert_eq!(enc.public_key(), &[0x22; 32][..]);
    }

    #[test]
    fn test_base64_parse() {
        let enc = sample();
        assert_eq!(EncodedSignature::from_base64(&enc.to_base64()).unwrap(), enc);
    }

    #[test]
    fn test_from_bytes_rejects_bad_length() {
        let err = EncodedSignature::from_bytes(&[0u8; 96]).unwrap_err();
        assert!(matches!(err, SignerError::InvalidInput(_)));
    }

    #[test]
    fn test_from_bytes_rejects_unknown_flag() {
        let mut raw = *sample().as_bytes();
        raw[0] = 0x04;
        assert_eq!(
            EncodedSignature::from_bytes(&raw).unwrap_err(),
            SignerError::UnsupportedScheme(0x04)
        );
    }

    #[test]
    fn test_json_is_base64() {
        let enc = sample();
        let json = serde_json::to_string(&enc).unwrap();
        assert_eq!(json, format!("\"{}\"", enc.to_base64()));
        let back: EncodedSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, enc);
    }
}
