//! Error type and cross-language mappings for the identity engine.
//!
//! The engine defines exactly one cryptographic error kind, `LowEntropy`
//! (§4.3/§7). `InvalidArgument` covers malformed input crossing the FFI/Python
//! boundary (wrong-length byte buffers, empty type names) — a programmer
//! error on the Rust side but a recoverable condition for an FFI caller, so
//! it is represented here rather than made fatal.

use thiserror::Error;

/// Canonical error for the identity engine.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum IdentityError {
    /// `fuse` produced a hash whose four words all have zero low 32 bits.
    #[error("fuse produced a low-entropy hash")]
    LowEntropy,
    /// Caller-provided input was structurally invalid (wrong length, empty
    /// type name, etc.) — only reachable from the FFI/Python surface, since
    /// the in-process Rust API is typed against fixed-size arrays.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Stable C FFI status codes. Keep these values stable across releases —
/// they are part of the public ABI.
pub mod ffi_codes {
    pub const OK: i32 = 0;
    pub const INVALID_ARGUMENT: i32 = 1;
    pub const LOW_ENTROPY: i32 = 2;
    pub const INTERNAL: i32 = 255;
}

impl IdentityError {
    /// Convert to a stable C FFI status code.
    pub fn to_ffi_code(&self) -> i32 {
        use ffi_codes::*;
        match self {
            IdentityError::LowEntropy => LOW_ENTROPY,
            IdentityError::InvalidArgument(_) => INVALID_ARGUMENT,
        }
    }
}

/// Map `Result<T, IdentityError>` into a C status code.
/// Returns `ffi_codes::OK` on `Ok(_)`, or the mapped error code on `Err`.
pub fn result_to_code<T>(res: Result<T, IdentityError>) -> i32 {
    match res {
        Ok(_) => ffi_codes::OK,
        Err(e) => e.to_ffi_code(),
    }
}

#[cfg(feature = "python")]
mod py {
    use super::IdentityError;
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::PyErr;

    impl From<IdentityError> for PyErr {
        fn from(e: IdentityError) -> Self {
            match e {
                IdentityError::InvalidArgument(msg) => PyValueError::new_err(msg),
                IdentityError::LowEntropy => PyRuntimeError::new_err(e.to_string()),
            }
        }
    }
}

impl From<IdentityError> for String {
    fn from(e: IdentityError) -> Self {
        e.to_string()
    }
}

/// Convenience alias for results that use `IdentityError`.
pub type IdentityResult<T> = Result<T, IdentityError>;
