//! Python bindings for `dacite` via PyO3, built only with `--features python`.
//!
//! Exposes the exported operations of §6 directly —
//! `sha256`, `fuse`, `type_hash` — plus a `Value` class wrapping
//! [`crate::Value`] so Python callers can construct composite values and
//! read their `value_hash` without reimplementing the identity engine in
//! Python.

use pyo3::prelude::*;
use pyo3::types::PyBytes;
use pyo3::exceptions::PyValueError;

// `IdentityError`'s `PyErr` conversion lives in `crate::error` (feature-gated
// the same way); `?` below relies on that `impl From<IdentityError> for
// PyErr` being in scope crate-wide.
use crate::value::Value as CoreValue;
use crate::words::Hash;

/// `dacite.sha256(data: bytes) -> bytes`
#[pyfunction]
fn sha256<'py>(py: Python<'py>, data: &[u8]) -> PyResult<&'py PyBytes> {
    Ok(PyBytes::new(py, &crate::digest::sha256(data)))
}

/// `dacite.fuse(a: bytes, b: bytes) -> bytes`. Raises `RuntimeError` if the
/// combination is low-entropy (§4.3).
#[pyfunction]
fn fuse<'py>(py: Python<'py>, a: &[u8], b: &[u8]) -> PyResult<&'py PyBytes> {
    let a: [u8; 32] = a
        .try_into()
        .map_err(|_| PyValueError::new_err("a must be exactly 32 bytes"))?;
    let b: [u8; 32] = b
        .try_into()
        .map_err(|_| PyValueError::new_err("b must be exactly 32 bytes"))?;
    let out = crate::fuse::fuse(Hash::from_bytes(a), Hash::from_bytes(b))?;
    Ok(PyBytes::new(py, out.as_bytes()))
}

/// `dacite.type_hash(name: str) -> bytes`
#[pyfunction]
fn type_hash<'py>(py: Python<'py>, name: &str) -> PyResult<&'py PyBytes> {
    Ok(PyBytes::new(py, crate::types::type_hash(name).as_bytes()))
}

/// A Python-visible handle onto a [`crate::Value`]. Immutable, like its
/// Rust counterpart — every constructor and `map_insert` returns a new
/// `Value` rather than mutating one in place.
#[pyclass(name = "Value")]
#[derive(Clone)]
pub struct PyValue {
    inner: CoreValue,
}

#[pymethods]
impl PyValue {
    #[staticmethod]
    fn null() -> PyValue {
        PyValue { inner: CoreValue::Null }
    }

    #[staticmethod]
    fn boolean(value: bool) -> PyValue {
        PyValue { inner: CoreValue::Bool(value) }
    }

    #[staticmethod]
    fn i64(value: i64) -> PyValue {
        PyValue { inner: CoreValue::I64(value) }
    }

    #[staticmethod]
    fn u64(value: u64) -> PyValue {
        PyValue { inner: CoreValue::U64(value) }
    }

    #[staticmethod]
    fn f64(value: f64) -> PyValue {
        PyValue { inner: CoreValue::F64(value) }
    }

    #[staticmethod]
    fn string(value: &str) -> PyValue {
        PyValue { inner: CoreValue::string_from(value) }
    }

    #[staticmethod]
    fn blob(value: &[u8]) -> PyValue {
        PyValue { inner: CoreValue::blob_from(value) }
    }

    #[staticmethod]
    fn vector(items: Vec<PyValue>) -> PyValue {
        PyValue {
            inner: CoreValue::vector_from(items.into_iter().map(|v| v.inner)),
        }
    }

    #[staticmethod]
    fn empty_map() -> PyValue {
        PyValue { inner: CoreValue::empty_map() }
    }

    /// Insert `key -> value`, returning a new map `Value`. Raises
    /// `ValueError` if called on a non-map value.
    fn map_insert(&self, key: PyValue, value: PyValue) -> PyResult<PyValue> {
        if !matches!(self.inner, CoreValue::Map(_)) {
            return Err(PyValueError::new_err("map_insert called on a non-map Value"));
        }
        let inner = self.inner.map_insert(key.inner, value.inner)?;
        Ok(PyValue { inner })
    }

    /// This value's 256-bit content address, as 32 raw bytes.
    fn value_hash<'py>(&self, py: Python<'py>) -> PyResult<&'py PyBytes> {
        let h = self.inner.value_hash()?;
        Ok(PyBytes::new(py, h.as_bytes()))
    }

    fn __repr__(&self) -> PyResult<String> {
        let h = self.inner.value_hash()?;
        Ok(format!("Value(hash={})", h.to_hex()))
    }
}

/// Python module entrypoint. Module name must match `[lib] name` for
/// maturin to locate the compiled extension.
#[pymodule]
fn dacite(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sha256, m)?)?;
    m.add_function(wrap_pyfunction!(fuse, m)?)?;
    m.add_function(wrap_pyfunction!(type_hash, m)?)?;
    m.add_class::<PyValue>()?;
    m.add("__doc__", "Dacite identity engine: content-addressed hashing.")?;
    m.add("__all__", vec!["sha256", "fuse", "type_hash", "Value"])?;
    Ok(())
}
