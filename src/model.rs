// src/model.rs

//! Canonical package model
//!
//! The backend-neutral record every raw package row is projected into.
//! Serialized field names follow the canonical schema, so JSON output is
//! stable across backends.

use crate::record::{CoerceError, Value};
use crate::schema::FieldId;
use serde::{Deserialize, Serialize};

/// One installed package in canonical form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageRecord {
    #[serde(rename = "Package")]
    pub package: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Installed-Size")]
    pub installed_size: u64,
    #[serde(rename = "Architecture")]
    pub architecture: String,
    #[serde(rename = "License")]
    pub license: String,
    #[serde(rename = "Homepage")]
    pub homepage: String,
    #[serde(rename = "Release")]
    pub release: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Vendor")]
    pub vendor: String,
}

impl PackageRecord {
    /// Assign a raw value to one canonical field, coercing it to the
    /// field's declared type.
    ///
    /// A failed coercion leaves the field at its previous value and
    /// reports the error; it never aborts the record.
    pub fn set_field(&mut self, id: FieldId, value: &Value) -> Result<(), CoerceError> {
        match id {
            FieldId::Package => self.package = value.to_text()?,
            FieldId::Version => self.version = value.to_text()?,
            FieldId::Description => self.description = value.to_text()?,
            FieldId::InstalledSize => self.installed_size = value.to_size()?,
            FieldId::Architecture => self.architecture = value.to_text()?,
            FieldId::License => self.license = value.to_text()?,
            FieldId::Homepage => self.homepage = value.to_text()?,
            FieldId::Release => self.release = value.to_text()?,
            FieldId::Status => self.status = value.to_text()?,
            FieldId::Vendor => self.vendor = value.to_text()?,
        }
        Ok(())
    }
}
