//! Mnemonic Seeds
//!
//! Turns a BIP-39 phrase into the 64-byte seed fed to `master_key`.
//!
//! SECURITY: Seeds are returned in `Zeroizing` wrappers.

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::error::{SignerError, SignerResult};

/// Seed from a mnemonic phrase with an empty passphrase
pub fn seed_from_mnemonic(phrase: &str) -> SignerResult<Zeroizing<[u8; 64]>> {
    seed_from_mnemonic_with_passphrase(phrase, "")
}

/// Seed from a mnemonic phrase with optional passphrase (BIP-39)
pub fn seed_from_mnemonic_with_passphrase(
    phrase: &str,
    passphrase: &str,
) -> SignerResult<Zeroizing<[u8; 64]>> {
    // English word lists are ASCII; collapse whitespace and case so that the
    // normalized parser accepts pasted phrases.
    let normalized = Zeroizing::new(
        phrase
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join(" "),
    );

    let mnemonic = Mnemonic::parse_normalized(&normalized)
        .map_err(|e| SignerError::invalid_input(format!("Invalid mnemonic: {}", e)))?;

    Ok(Zeroizing::new(mnemonic.to_seed_normalized(passphrase)))
}
