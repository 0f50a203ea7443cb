//! Ed25519 Transaction Signing
//!
//! seed -> key pair -> intent message -> BLAKE2b-256 digest -> signature
//! -> `0x00 || signature || public_key`.
//!
//! The digest is computed over the fully assembled intent message. The key
//! pair, message and digest are wiped when the call returns.

use zeroize::Zeroizing;

use crate::crypto::curves::{Ed25519Curve, Ed25519KeyPair, EllipticCurve};
use crate::crypto::DIGEST_LENGTH;
use crate::error::{SignerError, SignerResult};

use super::encoded::EncodedSignature;
use super::intent::IntentMessage;
use super::scheme::SignatureScheme;

/// Sign transaction bytes with a 32-byte Ed25519 seed
pub fn sign_ed25519(seed: &[u8; 32], tx: &[u8]) -> SignerResult<EncodedSignature> {
    let keypair = Ed25519KeyPair::from_seed(seed);
    let message = IntentMessage::new(tx)?;
    let digest = Zeroizing::new(message.digest());
    let signature = keypair.sign(digest.as_ref());

    Ok(EncodedSignature::new(
        SignatureScheme::Ed25519,
        &signature,
        keypair.public_key(),
    ))
}

/// Digest that Sui expects to be signed for `tx`
pub fn intent_digest(tx: &[u8]) -> SignerResult<[u8; DIGEST_LENGTH]> {
    Ok(IntentMessage::new(tx)?.digest())
}

/// Check an encoded signature against transaction bytes
pub fn verify_ed25519(encoded: &EncodedSignature, tx: &[u8]) -> SignerResult<bool> {
    if encoded.scheme() != SignatureScheme::Ed25519 {
        return Err(SignerError::UnsupportedScheme(encoded.flag()));
    }
    let digest = intent_digest(tx)?;
    Ed25519Curve::verify(encoded.public_key(), &digest, encoded.signature())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::MAX_TRANSACTION_LENGTH;

    #[test]
    fn test_zero_seed_empty_message() {
        let seed = [0u8; 32];
        let enc = sign_ed25519(&seed, &[]).unwrap();
        let bytes = enc.as_bytes();

        assert_eq!(bytes.len(), 97);
        assert_eq!(bytes[0], 0x00);

        let public_key = Ed25519Curve::public_key_from_seed(&seed).unwrap();
        assert_eq!(&bytes[65..], &public_key[..]);
        // Well-known public key of the all-zero seed
        assert_eq!(
            hex::encode(public_key),
            "3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29"
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let seed = [0x42u8; 32];
        let a = sign_ed25519(&seed, b"transfer").unwrap();
        let b = sign_ed25519(&seed, b"transfer").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_covers_intent_digest() {
        let seed = [9u8; 32];
        let tx = b"some bcs bytes";
        let enc = sign_ed25519(&seed, tx).unwrap();

        let digest = intent_digest(tx).unwrap();
        assert!(Ed25519Curve::verify(enc.public_key(), &digest, enc.signature()).unwrap());
        // Not a signature over the raw transaction
        assert!(!Ed25519Curve::verify(enc.public_key(), tx, enc.signature()).unwrap());
    }

    #[test]
    fn test_verify_round_trip() {
        let seed = [1u8; 32];
        let enc = sign_ed25519(&seed, b"abc").unwrap();
        assert!(verify_ed25519(&enc, b"abc").unwrap());
        assert!(!verify_ed25519(&enc, b"abd").unwrap());
    }

    #[test]
    fn test_verify_rejects_other_schemes() {
        let enc = EncodedSignature::new(SignatureScheme::Secp256k1, &[0u8; 64], &[0u8; 32]);
        assert_eq!(
            verify_ed25519(&enc, b"").unwrap_err(),
            SignerError::UnsupportedScheme(0x01)
        );
    }

    #[test]
    fn test_length_bounds() {
        let seed = [3u8; 32];
        assert!(sign_ed25519(&seed, &vec![0u8; MAX_TRANSACTION_LENGTH]).is_ok());
        assert!(matches!(
            sign_ed25519(&seed, &vec![0u8; MAX_TRANSACTION_LENGTH + 1]),
            Err(SignerError::LengthExceeded { len: 513, capacity: 512 })
        ));
    }
}
