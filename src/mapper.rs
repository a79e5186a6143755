// src/mapper.rs

//! Field mapper
//!
//! Translates backend field names into canonical field identifiers via a
//! static per-backend table. Mapping is a pure renaming pass: it carries
//! raw values through untouched and omits canonical fields whose source
//! key is absent from the record. Coercion happens later, in the
//! projection engine.

use crate::record::{RawRecord, Value};
use crate::schema::FieldId;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Where a canonical field's value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKey {
    /// Look the value up under this backend field name
    Key(&'static str),
    /// Inject this constant; the backend has no corresponding field
    Fixed(&'static str),
}

/// Static translation table for one backend
#[derive(Debug)]
pub struct FieldMap {
    entries: &'static [(FieldId, SourceKey)],
}

impl FieldMap {
    pub const fn new(entries: &'static [(FieldId, SourceKey)]) -> Self {
        Self { entries }
    }

    /// Table entries in declaration order
    pub fn entries(&self) -> &'static [(FieldId, SourceKey)] {
        self.entries
    }
}

/// Mapped values keyed by canonical field, in schema order
pub type FieldValues<'a> = BTreeMap<FieldId, Cow<'a, Value>>;

/// Apply a translation table to one raw record.
///
/// Unmapped record fields are ignored; mapped fields missing from the
/// record are omitted from the result rather than defaulted here.
pub fn map_record<'a>(map: &FieldMap, record: &'a RawRecord) -> FieldValues<'a> {
    let mut values = FieldValues::new();
    for &(field, source) in map.entries() {
        match source {
            SourceKey::Key(key) => {
                if let Some(value) = record.get(key) {
                    values.insert(field, Cow::Borrowed(value));
                }
            }
            SourceKey::Fixed(text) => {
                values.insert(field, Cow::Owned(Value::Text(text.to_string())));
            }
        }
    }
    values
}
