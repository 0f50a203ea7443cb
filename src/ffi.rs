//! FFI Layer
//!
//! C-ABI exports for firmware and mobile hosts. All buffers are owned by
//! the caller and have fixed sizes:
//! - private key seed: 32 bytes
//! - extended key: 64 bytes (`key || chain_code`)
//! - encoded signature: 97 bytes
//!
//! Every function returns `0` on success or a negative status
//! (`ErrorCode::status`). Output buffers are written only on success.

use std::slice;

use crate::error::{SignerError, SignerResult};
use crate::signing::{self, ENCODED_SIGNATURE_LENGTH};
use crate::wallet::{self, ExtendedKey, EXTENDED_KEY_LENGTH};

pub const SUI_SIGNER_OK: i32 = 0;

// =============================================================================
// Helper Functions
// =============================================================================

fn status(result: SignerResult<()>) -> i32 {
    match result {
        Ok(()) => SUI_SIGNER_OK,
        Err(e) => e.code().status(),
    }
}

fn null_pointer(name: &str) -> SignerError {
    SignerError::invalid_input(format!("Null {} pointer", name))
}

/// Borrow `len` bytes. A null pointer is only accepted for an empty slice.
unsafe fn input_slice<'a>(ptr: *const u8, len: usize, name: &str) -> SignerResult<&'a [u8]> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(null_pointer(name));
    }
    Ok(unsafe { slice::from_raw_parts(ptr, len) })
}

unsafe fn input_array<'a, const N: usize>(ptr: *const u8, name: &str) -> SignerResult<&'a [u8; N]> {
    if ptr.is_null() {
        return Err(null_pointer(name));
    }
    Ok(unsafe { &*(ptr as *const [u8; N]) })
}

unsafe fn output_array<'a, const N: usize>(ptr: *mut u8, name: &str) -> SignerResult<&'a mut [u8; N]> {
    if ptr.is_null() {
        return Err(null_pointer(name));
    }
    Ok(unsafe { &mut *(ptr as *mut [u8; N]) })
}

// =============================================================================
// Signing
// =============================================================================

/// Sign `msg` under `scheme` and write the 97-byte encoded signature.
///
/// Returns `-1` for an unsupported scheme, `-2` if the message does not
/// fit the intent buffer and `-4` for null pointers.
///
/// # Safety
/// `out` must point to 97 writable bytes, `key` to 32 readable bytes and
/// `msg` to `msg_len` readable bytes (`msg` may be null when `msg_len` is 0).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sui_signer_sign(
    scheme: u8,
    out: *mut u8,
    msg: *const u8,
    msg_len: usize,
    key: *const u8,
) -> i32 {
    status((|| -> SignerResult<()> {
        let out = unsafe { output_array::<ENCODED_SIGNATURE_LENGTH>(out, "output")? };
        let msg = unsafe { input_slice(msg, msg_len, "message")? };
        let key = unsafe { input_array::<32>(key, "key")? };
        signing::sign_into(scheme, key, msg, out)
    })())
}

// =============================================================================
// Key Derivation
// =============================================================================

/// Write the SLIP-0010 ed25519 master key for `seed` to `out`.
///
/// # Safety
/// `seed` must point to `seed_len` readable bytes and `out` to 64 writable
/// bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sui_signer_master_key(
    seed: *const u8,
    seed_len: usize,
    out: *mut u8,
) -> i32 {
    status((|| -> SignerResult<()> {
        let seed = unsafe { input_slice(seed, seed_len, "seed")? };
        let out = unsafe { output_array::<EXTENDED_KEY_LENGTH>(out, "output")? };
        let master = wallet::master_key(seed)?;
        out.copy_from_slice(master.to_bytes().as_ref());
        Ok(())
    })())
}

/// Derive the child of `parent` at `index` and write it to `out`.
///
/// `index` is used exactly as given. Set the top bit for a hardened child.
/// `parent` and `out` may point to the same buffer.
///
/// # Safety
/// `parent` must point to 64 readable bytes and `out` to 64 writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sui_signer_derive_child(
    parent: *const u8,
    index: u32,
    out: *mut u8,
) -> i32 {
    status((|| -> SignerResult<()> {
        let parent = {
            let bytes = unsafe { input_array::<EXTENDED_KEY_LENGTH>(parent, "parent")? };
            ExtendedKey::from_bytes(bytes)
        };
        let child = wallet::derive_child(&parent, index)?;
        let out = unsafe { output_array::<EXTENDED_KEY_LENGTH>(out, "output")? };
        out.copy_from_slice(child.to_bytes().as_ref());
        Ok(())
    })())
}
