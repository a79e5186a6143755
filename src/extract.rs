// src/extract.rs

//! Package collection assembler
//!
//! Runs the full pipeline over one record source: read raw records, map
//! them through the backend's translation table, project them into
//! canonical form, and collect the results plus structured diagnostics
//! for every field that failed along the way.

use crate::error::Result;
use crate::mapper::map_record;
use crate::model::PackageRecord;
use crate::project::{project, AssignError, FieldFailure};
use crate::schema::{CanonicalSchema, FieldId};
use crate::source::sqlite::SqliteRecordSource;
use crate::source::RecordSource;
use tracing::{info, warn};

/// One field-level failure, tied back to the record it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Index of the record in source order
    pub record: usize,
    /// Package name, when the record got far enough to have one
    pub package: Option<String>,
    pub field: FieldId,
    pub error: AssignError,
}

/// The assembled result of one extraction run
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Canonical packages in source record order
    pub packages: Vec<PackageRecord>,
    /// Every field-level failure encountered, in record order
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// Whether any field-level failure occurred
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Extract every package a record source holds.
///
/// Field failures within a record never abort the run; they become
/// [`Diagnostic`] entries and extraction moves on. A record whose
/// required fields cannot be populated is dropped from the collection
/// but still shows up in the diagnostics.
pub fn collect_from(source: &mut dyn RecordSource) -> Result<Extraction> {
    let schema = CanonicalSchema::new()?;
    let field_map = source.field_map();
    let records = source.read_records()?;
    info!(
        "Extracting {} record(s) from {} backend",
        records.len(),
        source.backend()
    );

    let mut extraction = Extraction::default();
    for (index, raw) in records.iter().enumerate() {
        let values = map_record(field_map, raw);
        let projection = project(&schema, &values);

        let package = if projection.record.package.is_empty() {
            None
        } else {
            Some(projection.record.package.clone())
        };
        for FieldFailure { field, error } in &projection.failures {
            extraction.diagnostics.push(Diagnostic {
                record: index,
                package: package.clone(),
                field: *field,
                error: error.clone(),
            });
        }

        if projection.required_complete(&schema) {
            extraction.packages.push(projection.record);
        } else {
            warn!("Skipping record {}: required fields missing", index);
        }
    }

    info!(
        "Extracted {} package(s), {} field diagnostic(s)",
        extraction.packages.len(),
        extraction.diagnostics.len()
    );
    Ok(extraction)
}

/// Extract installed packages from a sqlite-backed rpm database.
///
/// # Arguments
///
/// * `db_path` - Path to the package database file
pub fn extract_packages(db_path: &str) -> Result<Extraction> {
    let mut source = SqliteRecordSource::open(db_path)?;
    collect_from(&mut source)
}
