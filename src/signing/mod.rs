//! Sui Transaction Signing
//!
//! Turns raw transaction bytes and a 32-byte seed into the 97-byte
//! signature Sui expects:
//! 1. Prefix the transaction with the transaction-data intent
//! 2. Hash the intent message with BLAKE2b-256
//! 3. Sign the digest with Ed25519
//! 4. Encode `flag || signature || public_key`

pub mod address;
pub mod ed25519;
pub mod encoded;
pub mod intent;
pub mod scheme;

pub use address::*;
pub use ed25519::*;
pub use encoded::*;
pub use intent::*;
pub use scheme::*;
