// src/source/mod.rs

//! Raw record sources
//!
//! Backends that yield installed-package records in raw form. Each backend
//! carries its own static translation table; everything downstream of
//! [`RecordSource`] is backend-neutral.

pub mod header;
pub mod sqlite;

use crate::error::Result;
use crate::mapper::FieldMap;
use crate::record::RawRecord;

/// A backend that can enumerate raw package records
pub trait RecordSource {
    /// Short backend name used in log output
    fn backend(&self) -> &'static str;

    /// Translation table from this backend's field names to canonical fields
    fn field_map(&self) -> &'static FieldMap;

    /// Read every package record the backend holds.
    ///
    /// Record order follows the backend's natural enumeration order and is
    /// stable across repeated reads of the same store.
    fn read_records(&mut self) -> Result<Vec<RawRecord>>;
}
