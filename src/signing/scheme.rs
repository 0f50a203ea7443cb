//! Signature Scheme Dispatch
//!
//! Sui tags every user signature with a one-byte scheme flag. All flags Sui
//! defines are listed here, but only Ed25519 has a signer. The other
//! variants fail with `UnsupportedScheme` so that callers get a typed error
//! instead of a partially written buffer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SignerError, SignerResult};

use super::ed25519::sign_ed25519;
use super::encoded::{EncodedSignature, ENCODED_SIGNATURE_LENGTH};

/// Sui signature scheme flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SignatureScheme {
    Ed25519 = 0x00,
    Secp256k1 = 0x01,
    Secp256r1 = 0x02,
    MultiSig = 0x03,
    ZkLogin = 0x05,
    Passkey = 0x06,
}

impl SignatureScheme {
    pub const ALL: [SignatureScheme; 6] = [
        Self::Ed25519,
        Self::Secp256k1,
        Self::Secp256r1,
        Self::MultiSig,
        Self::ZkLogin,
        Self::Passkey,
    ];

    pub fn flag(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
            Self::Secp256r1 => "secp256r1",
            Self::MultiSig => "multisig",
            Self::ZkLogin => "zklogin",
            Self::Passkey => "passkey",
        }
    }

    /// Whether `sign` can produce signatures for this scheme
    pub fn is_implemented(self) -> bool {
        matches!(self, Self::Ed25519)
    }
}

impl TryFrom<u8> for SignatureScheme {
    type Error = SignerError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0x00 => Ok(Self::Ed25519),
            0x01 => Ok(Self::Secp256k1),
            0x02 => Ok(Self::Secp256r1),
            0x03 => Ok(Self::MultiSig),
            0x05 => Ok(Self::ZkLogin),
            0x06 => Ok(Self::Passkey),
            other => Err(SignerError::UnsupportedScheme(other)),
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SignatureScheme {
    type Err = SignerError;

    /// Accepts a scheme name (`ed25519`) or a flag (`0`, `0x00`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if let Some(scheme) = Self::ALL.iter().find(|scheme| scheme.name() == lower) {
            return Ok(*scheme);
        }

        let flag = match lower.strip_prefix("0x") {
            Some(hex_flag) => u8::from_str_radix(hex_flag, 16),
            None => lower.parse::<u8>(),
        }
        .map_err(|_| SignerError::invalid_input(format!("Unknown signature scheme '{}'", s)))?;

        Self::try_from(flag)
    }
}

/// Sign `tx` with the given scheme
pub fn sign(scheme: SignatureScheme, seed: &[u8; 32], tx: &[u8]) -> SignerResult<EncodedSignature> {
    match scheme {
        SignatureScheme::Ed25519 => sign_ed25519(seed, tx),
        SignatureScheme::Secp256k1
        | SignatureScheme::Secp256r1
        | SignatureScheme::MultiSig
        | SignatureScheme::ZkLogin
        | SignatureScheme::Passkey => Err(SignerError::UnsupportedScheme(scheme.flag())),
    }
}

/// Sign `tx` with a raw scheme flag. Every byte value maps to a signature or
/// an error.
pub fn sign_with_flag(flag: u8, seed: &[u8; 32], tx: &[u8]) -> SignerResult<EncodedSignature> {
    let scheme = SignatureScheme::try_from(flag)?;
    sign(scheme, seed, tx)
}

/// Sign into a caller buffer. `out` is written only on success.
pub fn sign_into(
    flag: u8,
    seed: &[u8; 32],
    tx: &[u8],
    out: &mut [u8; ENCODED_SIGNATURE_LENGTH],
) -> SignerResult<()> {
    let encoded = sign_with_flag(flag, seed, tx)?;
    out.copy_from_slice(encoded.as_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: [u8; 32] = [7u8; 32];

    #[test]
    fn test_flags_round_trip() {
        for scheme in SignatureScheme::ALL {
            assert_eq!(SignatureScheme::try_from(scheme.flag()).unwrap(), scheme);
        }
    }

    #[test]
    fn test_flag_values() {
        assert_eq!(SignatureScheme::Ed25519.flag(), 0x00);
        assert_eq!(SignatureScheme::Secp256k1.flag(), 0x01);
        assert_eq!(SignatureScheme::Secp256r1.flag(), 0x02);
        assert_eq!(SignatureScheme::MultiSig.flag(), 0x03);
        assert_eq!(SignatureScheme::ZkLogin.flag(), 0x05);
        assert_eq!(SignatureScheme::Passkey.flag(), 0x06);
    }

    #[test]
    fn test_reserved_and_unknown_flags() {
        for flag in [0x04u8, 0x07, 0x80, 0xff] {
            assert_eq!(
                SignatureScheme::try_from(flag).unwrap_err(),
                SignerError::UnsupportedScheme(flag)
            );
        }
    }

    #[test]
    fn test_ed25519_dispatch() {
        let via_flag = sign_with_flag(0x00, &SEED, b"tx").unwrap();
        let direct = sign_ed25519(&SEED, b"tx").unwrap();
        assert_eq!(via_flag, direct);
        assert_eq!(via_flag.flag(), 0x00);
    }

    #[test]
    fn test_unimplemented_schemes_leave_output_untouched() {
        for scheme in SignatureScheme::ALL.iter().filter(|s| !s.is_implemented()) {
            let mut out = [0xaau8; ENCODED_SIGNATURE_LENGTH];
            let err = sign_into(scheme.flag(), &SEED, b"tx", &mut out).unwrap_err();
            assert_eq!(err, SignerError::UnsupportedScheme(scheme.flag()));
            assert!(out.iter().all(|&b| b == 0xaa));
        }
    }

    #[test]
    fn test_oversize_tx_leaves_output_untouched() {
        let mut out = [0x55u8; ENCODED_SIGNATURE_LENGTH];
        let tx = vec![0u8; 510];
        let err = sign_into(0x00, &SEED, &tx, &mut out).unwrap_err();
        assert!(matches!(err, SignerError::LengthExceeded { .. }));
        assert!(out.iter().all(|&b| b == 0x55));
    }

    #[test]
    fn test_sign_into_writes_on_success() {
        let mut out = [0u8; ENCODED_SIGNATURE_LENGTH];
        sign_into(0x00, &SEED, b"tx", &mut out).unwrap();
        assert_eq!(&out, sign_ed25519(&SEED, b"tx").unwrap().as_bytes());
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!("ed25519".parse::<SignatureScheme>().unwrap(), SignatureScheme::Ed25519);
        assert_eq!("ZkLogin".parse::<SignatureScheme>().unwrap(), SignatureScheme::ZkLogin);
        assert_eq!("0x06".parse::<SignatureScheme>().unwrap(), SignatureScheme::Passkey);
        assert_eq!("3".parse::<SignatureScheme>().unwrap(), SignatureScheme::MultiSig);
        assert_eq!(
            "0x04".parse::<SignatureScheme>().unwrap_err(),
            SignerError::UnsupportedScheme(0x04)
        );
        assert!("bls".parse::<SignatureScheme>().is_err());
    }
}
