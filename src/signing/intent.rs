//! Intent Messages
//!
//! Sui signs `intent || tx_bytes`, never the bare transaction. For
//! transaction data the intent is three zero bytes:
//! `[IntentScope::TransactionData, IntentVersion::V0, AppId::Sui]`.
//!
//! The message lives in a fixed 512-byte stack buffer. Anything larger is
//! rejected before a single byte is written.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{blake2b_256, DIGEST_LENGTH};
use crate::error::{SignerError, SignerResult};

/// Intent scope: transaction data
pub const INTENT_SCOPE_TRANSACTION_DATA: u8 = 0x00;
/// Intent version: V0
pub const INTENT_VERSION_V0: u8 = 0x00;
/// Application id: Sui
pub const APP_ID_SUI: u8 = 0x00;

pub const INTENT_PREFIX: [u8; 3] = [INTENT_SCOPE_TRANSACTION_DATA, INTENT_VERSION_V0, APP_ID_SUI];

/// Capacity of the intent message buffer
pub const MAX_INTENT_MESSAGE_LENGTH: usize = 512;

/// Largest transaction that fits behind the prefix
pub const MAX_TRANSACTION_LENGTH: usize = MAX_INTENT_MESSAGE_LENGTH - INTENT_PREFIX.len();

/// Write `INTENT_PREFIX || tx` into `out` and return the number of bytes
/// written. `out` is left untouched on error.
pub fn build_intent_message(tx: &[u8], out: &mut [u8]) -> SignerResult<usize> {
    let total = tx
        .len()
        .checked_add(INTENT_PREFIX.len())
        .ok_or_else(|| SignerError::length_exceeded(usize::MAX, out.len()))?;
    if total > out.len() {
        return Err(SignerError::length_exceeded(total, out.len()));
    }

    out[..INTENT_PREFIX.len()].copy_from_slice(&INTENT_PREFIX);
    out[INTENT_PREFIX.len()..total].copy_from_slice(tx);
    Ok(total)
}

/// An assembled intent message in a fixed-size buffer
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct IntentMessage {
    buf: [u8; MAX_INTENT_MESSAGE_LENGTH],
    len: usize,
}

impl IntentMessage {
    pub fn new(tx: &[u8]) -> SignerResult<Self> {
        let mut buf = [0u8; MAX_INTENT_MESSAGE_LENGTH];
        let len = build_intent_message(tx, &mut buf)?;
        Ok(Self { buf, len })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true: the prefix is always present
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The transaction bytes after the prefix
    pub fn transaction(&self) -> &[u8] {
        &self.buf[INTENT_PREFIX.len()..self.len]
    }

    /// BLAKE2b-256 over the whole message
    pub fn digest(&self) -> [u8; DIGEST_LENGTH] {
        blake2b_256(self.as_bytes())
    }
}

impl std::fmt::Debug for IntentMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentMessage").field("len", &self.len).finish()
    }
}
