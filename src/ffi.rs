//! Stable C ABI surface over the identity engine's exported operations
//! (§6): `sha256`, `fuse`, `type_hash`, and the built-in leaf hashers that
//! back `value_hash` for scalar types. These symbols are always exported,
//! independent of the `python` feature, for embedders with no Python
//! runtime at all.
//!
//! # Safety
//! Every `extern "C"` entrypoint validates its pointers and lengths before
//! dereferencing them and never panics on bad input — violations are
//! reported as a nonzero [`crate::error::ffi_codes`] status.

use core::slice;

use crate::digest::sha256;
use crate::error::{ffi_codes, result_to_code, IdentityError};
use crate::fuse::fuse;
use crate::leaf;
use crate::types::type_hash as compute_type_hash;
use crate::words::Hash;

fn check_nonnull<'a>(ptr: *const u8, len: usize) -> Result<&'a [u8], IdentityError> {
    if ptr.is_null() && len > 0 {
        return Err(IdentityError::InvalidArgument(
            "null input pointer with nonzero length",
        ));
    }
    // SAFETY: caller promises `ptr` is valid for `len` bytes; null is only
    // permitted above when `len == 0`, for which `from_raw_parts` is sound.
    let slice = unsafe { slice::from_raw_parts(ptr, len) };
    Ok(slice)
}

fn check_outbuf<'a>(
    ptr: *mut u8,
    out_len: usize,
    needed: usize,
) -> Result<&'a mut [u8], IdentityError> {
    if ptr.is_null() {
        return Err(IdentityError::InvalidArgument("null output pointer"));
    }
    if out_len < needed {
        return Err(IdentityError::InvalidArgument("output buffer too small"));
    }
    // SAFETY: caller promises `ptr` is valid for `out_len` bytes; bounded
    // above by `needed <= out_len`.
    let slice = unsafe { slice::from_raw_parts_mut(ptr, needed) };
    Ok(slice)
}

fn check_hash32<'a>(ptr: *const u8, len: usize) -> Result<Hash, IdentityError> {
    let bytes = check_nonnull(ptr, len)?;
    let arr: [u8; 32] = bytes
        .try_into()
        .map_err(|_| IdentityError::InvalidArgument("hash input must be exactly 32 bytes"))?;
    Ok(Hash::from_bytes(arr))
}

/// Compute `SHA-256(data)` -> 32 bytes.
///
/// # Safety
/// - `data` must be either NULL with `len == 0` or valid for `len` bytes.
/// - `out32` must point to a buffer of at least 32 bytes.
#[no_mangle]
pub extern "C" fn dacite_sha256(data: *const u8, len: usize, out32: *mut u8, out_len: usize) -> i32 {
    let r = (|| {
        let input = check_nonnull(data, len)?;
        let out = check_outbuf(out32, out_len, 32)?;
        out.copy_from_slice(&sha256(input));
        Ok(())
    })();
    result_to_code(r)
}

/// Combine two 32-byte hashes with `fuse` (§4.3). Returns
/// [`ffi_codes::LOW_ENTROPY`] without writing `out32` if the result is
/// low-entropy.
///
/// # Safety
/// - `a32`/`b32` must each point to exactly 32 readable bytes.
/// - `out32` must point to a buffer of at least 32 bytes.
#[no_mangle]
pub extern "C" fn dacite_fuse(
    a32: *const u8,
    a_len: usize,
    b32: *const u8,
    b_len: usize,
    out32: *mut u8,
    out_len: usize,
) -> i32 {
    let r = (|| {
        let a = check_hash32(a32, a_len)?;
        let b = check_hash32(b32, b_len)?;
        let out = check_outbuf(out32, out_len, 32)?;
        let fused = fuse(a, b)?;
        out.copy_from_slice(fused.as_bytes());
        Ok(())
    })();
    result_to_code(r)
}

/// Compute `type_hash(name)` for an arbitrary UTF-8 type name.
///
/// # Safety
/// - `name` must point to `len` bytes of valid UTF-8.
/// - `out32` must point to a buffer of at least 32 bytes.
#[no_mangle]
pub extern "C" fn dacite_type_hash(
    name: *const u8,
    len: usize,
    out32: *mut u8,
    out_len: usize,
) -> i32 {
    let r = (|| {
        let bytes = check_nonnull(name, len)?;
        let text = core::str::from_utf8(bytes)
            .map_err(|_| IdentityError::InvalidArgument("type name must be valid UTF-8"))?;
        let out = check_outbuf(out32, out_len, 32)?;
        out.copy_from_slice(compute_type_hash(text).as_bytes());
        Ok(())
    })();
    result_to_code(r)
}

/// `value_hash` of a scalar `i64` leaf — the common case for embedders that
/// only need scalar identities without constructing a full [`crate::Value`].
///
/// # Safety
/// `out32` must point to a buffer of at least 32 bytes.
#[no_mangle]
pub extern "C" fn dacite_value_hash_i64(value: i64, out32: *mut u8, out_len: usize) -> i32 {
    let r = (|| {
        let out = check_outbuf(out32, out_len, 32)?;
        let h = leaf::i64_(value)?;
        out.copy_from_slice(h.as_bytes());
        Ok(())
    })();
    result_to_code(r)
}

/// `value_hash` of a scalar `f64` leaf, with NaN canonicalization applied
/// per §4.6.
///
/// # Safety
/// `out32` must point to a buffer of at least 32 bytes.
#[no_mangle]
pub extern "C" fn dacite_value_hash_f64(value: f64, out32: *mut u8, out_len: usize) -> i32 {
    let r = (|| {
        let out = check_outbuf(out32, out_len, 32)?;
        let h = leaf::f64_(value)?;
        out.copy_from_slice(h.as_bytes());
        Ok(())
    })();
    result_to_code(r)
}

/// `value_hash` of a UTF-8 string value (§4.7).
///
/// # Safety
/// - `data` must point to `len` bytes of valid UTF-8.
/// - `out32` must point to a buffer of at least 32 bytes.
#[no_mangle]
pub extern "C" fn dacite_value_hash_string(
    data: *const u8,
    len: usize,
    out32: *mut u8,
    out_len: usize,
) -> i32 {
    let r = (|| {
        let bytes = check_nonnull(data, len)?;
        let text = core::str::from_utf8(bytes)
            .map_err(|_| IdentityError::InvalidArgument("string value must be valid UTF-8"))?;
        let out = check_outbuf(out32, out_len, 32)?;
        let h = crate::Value::string_from(text).value_hash()?;
        out.copy_from_slice(h.as_bytes());
        Ok(())
    })();
    result_to_code(r)
}

/// `value_hash` of a blob (arbitrary bytes) value (§4.7).
///
/// # Safety
/// - `data` must point to `len` readable bytes (or be NULL with `len == 0`).
/// - `out32` must point to a buffer of at least 32 bytes.
#[no_mangle]
pub extern "C" fn dacite_value_hash_blob(
    data: *const u8,
    len: usize,
    out32: *mut u8,
    out_len: usize,
) -> i32 {
    let r = (|| {
        let bytes = check_nonnull(data, len)?;
        let out = check_outbuf(out32, out_len, 32)?;
        let h = crate::Value::blob_from(bytes).value_hash()?;
        out.copy_from_slice(h.as_bytes());
        Ok(())
    })();
    result_to_code(r)
}

/// Return a bitset of enabled compile-time features.
///
/// Bit layout (LSB->MSB): 0:rayon, 1:python
#[no_mangle]
pub extern "C" fn dacite_features_mask() -> u32 {
    let mut m = 0u32;
    #[cfg(feature = "rayon")]
    {
        m |= 1 << 0;
    }
    #[cfg(feature = "python")]
    {
        m |= 1 << 1;
    }
    m
}
