//! Sui Signer Core Library
//!
//! Offline transaction signing for the Sui blockchain, sized for
//! hardware-wallet class devices.
//!
//! # Architecture
//!
//! This crate provides:
//! - **signing**: Intent messages, Ed25519 signing, encoded signatures and
//!   the scheme dispatcher
//! - **wallet**: SLIP-0010 ed25519 key derivation, derivation paths and
//!   BIP-39 mnemonic seeds
//! - **crypto**: BLAKE2b-256, HMAC-SHA512 and the Ed25519 curve backend
//! - **ffi**: C-ABI exports over caller-owned fixed-size buffers
//! - **utils**: Redacting logger and signer settings
//!
//! # Security
//!
//! This crate uses `zeroize` to clear sensitive data from memory. Seeds,
//! extended keys, intent messages and digests are zeroed when dropped.
//!
//! # Example
//!
//! ```rust
//! use sui_signer::signing::{sign, SignatureScheme, SuiAddress};
//! use sui_signer::wallet::{derive_path, DerivationPath, SUI_DERIVATION_PATH};
//!
//! let path: DerivationPath = SUI_DERIVATION_PATH.parse()?;
//! let node = derive_path(b"my wallet seed bytes", &path)?;
//!
//! let encoded = sign(SignatureScheme::Ed25519, node.key(), b"bcs tx bytes")?;
//! assert_eq!(encoded.as_bytes().len(), 97);
//! assert_eq!(encoded.flag(), 0x00);
//!
//! let address = SuiAddress::from_signature(&encoded)?;
//! assert!(address.to_string().starts_with("0x"));
//! # Ok::<(), sui_signer::SignerError>(())
//! ```

pub mod crypto;
pub mod error;
pub mod ffi;
pub mod serde_bytes;
pub mod signing;
pub mod utils;
pub mod wallet;

// Re-export key types for convenience
pub use error::{ErrorCode, SignerError, SignerResult};
pub use signing::{
    build_intent_message, sign, sign_ed25519, sign_into, sign_with_flag, verify_ed25519,
    EncodedSignature, IntentMessage, SignatureScheme, SuiAddress, ENCODED_SIGNATURE_LENGTH,
    MAX_INTENT_MESSAGE_LENGTH, MAX_TRANSACTION_LENGTH,
};
pub use utils::config::{OutputEncoding, SignerSettings};
pub use wallet::{
    derive_child, derive_path, master_key, DerivationPath, ExtendedKey, EXTENDED_KEY_LENGTH,
    SUI_DERIVATION_PATH,
};

// Re-export FFI functions at crate root
pub use ffi::{sui_signer_derive_child, sui_signer_master_key, sui_signer_sign};
