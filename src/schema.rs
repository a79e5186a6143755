// src/schema.rs

//! Canonical model schema
//!
//! The fixed set of recognized field names, their semantic types, and the
//! required/optional flags. Built once per extraction run and introspected
//! by the projection pipeline instead of being hard-coded at call sites, so
//! future field additions do not ripple through the engine.

use crate::error::{Error, Result};
use std::collections::HashSet;

/// Identifier for one canonical model field.
///
/// Declaration order is the schema order; the derived `Ord` keeps every
/// table keyed by `FieldId` iterating in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Package,
    Version,
    Description,
    InstalledSize,
    Architecture,
    License,
    Homepage,
    Release,
    Status,
    Vendor,
}

impl FieldId {
    /// Every canonical field, in schema order
    pub const ALL: [FieldId; 10] = [
        FieldId::Package,
        FieldId::Version,
        FieldId::Description,
        FieldId::InstalledSize,
        FieldId::Architecture,
        FieldId::License,
        FieldId::Homepage,
        FieldId::Release,
        FieldId::Status,
        FieldId::Vendor,
    ];

    /// Canonical field name, also the serialized name of the model field
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Package => "Package",
            FieldId::Version => "Version",
            FieldId::Description => "Description",
            FieldId::InstalledSize => "Installed-Size",
            FieldId::Architecture => "Architecture",
            FieldId::License => "License",
            FieldId::Homepage => "Homepage",
            FieldId::Release => "Release",
            FieldId::Status => "Status",
            FieldId::Vendor => "Vendor",
        }
    }

    /// Declared semantic type of the field
    pub fn field_type(self) -> FieldType {
        match self {
            FieldId::InstalledSize => FieldType::Integer,
            _ => FieldType::Text,
        }
    }

    /// Whether a record must populate this field to be emitted
    pub fn required(self) -> bool {
        matches!(self, FieldId::Package)
    }
}

/// Semantic type a canonical field stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
        }
    }
}

/// One entry of the schema descriptor
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

/// The ordered, introspectable set of canonical fields
#[derive(Debug, Clone)]
pub struct CanonicalSchema {
    fields: Vec<FieldSpec>,
}

impl CanonicalSchema {
    /// Build the schema descriptor.
    ///
    /// Fails when two fields declare the same canonical name; a duplicate
    /// is a configuration bug, not a runtime condition.
    pub fn new() -> Result<Self> {
        Self::from_specs(
            FieldId::ALL
                .iter()
                .map(|&id| FieldSpec {
                    id,
                    name: id.name(),
                    field_type: id.field_type(),
                    required: id.required(),
                })
                .collect(),
        )
    }

    fn from_specs(fields: Vec<FieldSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for spec in &fields {
            if !seen.insert(spec.name) {
                return Err(Error::Schema(format!(
                    "duplicate canonical field name: {}",
                    spec.name
                )));
            }
        }
        Ok(Self { fields })
    }

    /// All fields in schema order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by its canonical name
    pub fn field_by_name(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Number of canonical fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
