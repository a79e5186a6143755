// src/lib.rs

//! rpminv - Installed package inventory for RPM systems
//!
//! Extracts installed-package metadata into a canonical, backend-neutral
//! model. Raw records come from a pluggable source (the sqlite-backed
//! rpmdb, or decoded `.rpm` headers), run through a static field
//! translation table, and are coerced field by field into the canonical
//! model with structured diagnostics for anything that fails.
//!
//! # Architecture
//!
//! - Record sources: backends enumerate raw records, nothing more
//! - Field mapper: static tables rename backend fields to canonical ones
//! - Projection engine: typed coercion, per-field failure tolerance
//! - Assembler: ordered package collection plus diagnostics

mod error;
pub mod extract;
pub mod mapper;
pub mod model;
pub mod project;
pub mod record;
pub mod schema;
pub mod source;

pub use error::{Error, Result};
pub use extract::{collect_from, extract_packages, Diagnostic, Extraction};
pub use model::PackageRecord;
