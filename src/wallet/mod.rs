//! Wallet Module
//!
//! Key material for the signer: mnemonic seeds, derivation paths and the
//! SLIP-0010 Ed25519 derivation engine.

mod derivation;
mod derivation_path;
mod keygen;

pub use derivation::*;
pub use derivation_path::*;
pub use keygen::*;

use zeroize::Zeroizing;

use crate::error::SignerResult;

/// Signing seed for a mnemonic at the given path
pub fn signing_seed_from_mnemonic(
    phrase: &str,
    path: &DerivationPath,
) -> SignerResult<Zeroizing<[u8; 32]>> {
    let seed = keygen::seed_from_mnemonic(phrase)?;
    let node = derivation::derive_path(seed.as_ref(), path)?;
    Ok(Zeroizing::new(*node.key()))
}
