// src/project.rs

//! Value coercion and assignment engine
//!
//! Drives mapped values into a canonical record one field at a time. Field
//! assignment failures are collected, never propagated: a record with a
//! malformed size still yields a model with every other field populated.

use crate::mapper::FieldValues;
use crate::model::PackageRecord;
use crate::record::CoerceError;
use crate::schema::{CanonicalSchema, FieldId};
use thiserror::Error;
use tracing::warn;

/// Why one canonical field could not be populated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error(transparent)]
    Coerce(#[from] CoerceError),
    #[error("no source value for required field")]
    MissingRequired,
}

/// One failed field assignment within a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: FieldId,
    pub error: AssignError,
}

/// Result of projecting one raw record
#[derive(Debug, Clone)]
pub struct Projection {
    pub record: PackageRecord,
    pub failures: Vec<FieldFailure>,
}

impl Projection {
    /// Whether every required field was assigned successfully
    pub fn required_complete(&self, schema: &CanonicalSchema) -> bool {
        schema.fields().iter().all(|spec| {
            !spec.required
                || !self
                    .failures
                    .iter()
                    .any(|failure| failure.field == spec.id)
        })
    }
}

/// Project mapped values into a canonical record.
///
/// Fields are assigned in schema order. A coercion failure or a missing
/// required field is recorded as a [`FieldFailure`] and assignment moves
/// on to the next field.
pub fn project(schema: &CanonicalSchema, values: &FieldValues<'_>) -> Projection {
    let mut record = PackageRecord::default();
    let mut failures = Vec::new();
    let mut assigned = Vec::new();

    for (&field, value) in values {
        match record.set_field(field, value) {
            Ok(()) => assigned.push(field),
            Err(err) => {
                warn!("Could not assign field {}: {}", field.name(), err);
                failures.push(FieldFailure {
                    field,
                    error: AssignError::Coerce(err),
                });
            }
        }
    }

    for spec in schema.fields() {
        if spec.required
            && !assigned.contains(&spec.id)
            && !failures.iter().any(|failure| failure.field == spec.id)
        {
            failures.push(FieldFailure {
                field: spec.id,
                error: AssignError::MissingRequired,
            });
        }
    }

    Projection { record, failures }
}
