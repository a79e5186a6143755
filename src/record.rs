// src/record.rs

//! Raw package records and the untyped values they carry
//!
//! Backends deliver loosely-typed key/value data. `Value` is the common
//! scalar representation and owns the coercions into the canonical field
//! types; `RawRecord` is one backend record before any normalization.

use std::collections::HashMap;
use thiserror::Error;

/// Why a source value could not become the target field's type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    /// Binary data that is not valid UTF-8 cannot become text
    #[error("binary value is not valid UTF-8 text")]
    NotText,

    /// Rendered value does not parse as an unsigned byte count
    #[error("cannot interpret {0:?} as a byte count")]
    NotInteger(String),

    /// Negative integers are not valid sizes
    #[error("byte count cannot be negative: {0}")]
    NegativeSize(i64),
}

/// An untyped scalar as delivered by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Text(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// Uniform, locale-independent textual rendering.
    ///
    /// Integers render in decimal, text passes through, binary data is
    /// accepted only when it is valid UTF-8. Rendering the same value twice
    /// always yields the same string.
    pub fn to_text(&self) -> Result<String, CoerceError> {
        match self {
            Value::Int(v) => Ok(v.to_string()),
            Value::Uint(v) => Ok(v.to_string()),
            Value::Text(s) => Ok(s.clone()),
            Value::Bytes(b) => String::from_utf8(b.clone()).map_err(|_| CoerceError::NotText),
        }
    }

    /// Coerce into an unsigned byte count.
    ///
    /// Numeric sources are used directly. Everything else goes through the
    /// textual rendering and a round-trip parse, the common ground when the
    /// exact source type is unknown.
    pub fn to_size(&self) -> Result<u64, CoerceError> {
        match self {
            Value::Uint(v) => Ok(*v),
            Value::Int(v) => u64::try_from(*v).map_err(|_| CoerceError::NegativeSize(*v)),
            other => {
                let text = other.to_text()?;
                text.parse::<u64>().map_err(|_| CoerceError::NotInteger(text))
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

/// One backend-specific installed-package record.
///
/// A plain mapping from backend field key to untyped value, built once by
/// the adapter that read it. A field with no data is absent from the map,
/// never present with a placeholder.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    fields: HashMap<String, Value>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a backend field key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a value by backend field key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields the backend supplied
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
