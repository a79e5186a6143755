// src/source/header.rs

//! RPM header backend
//!
//! Decodes package metadata straight from `.rpm` header blobs instead of a
//! database. Each decoded header becomes one raw record using the header
//! tag names as field keys, so the same projection pipeline runs over both
//! backends.

use crate::error::{Error, Result};
use crate::mapper::{FieldMap, SourceKey};
use crate::record::RawRecord;
use crate::schema::FieldId;
use crate::source::RecordSource;
use rpm::Package;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

static FIELDS: FieldMap = FieldMap::new(&[
    (FieldId::Package, SourceKey::Key("Name")),
    (FieldId::Version, SourceKey::Key("Version")),
    (FieldId::Description, SourceKey::Key("Summary")),
    (FieldId::InstalledSize, SourceKey::Key("Size")),
    (FieldId::Architecture, SourceKey::Key("Arch")),
    (FieldId::License, SourceKey::Key("License")),
    (FieldId::Homepage, SourceKey::Key("Url")),
    (FieldId::Release, SourceKey::Key("Release")),
    (FieldId::Status, SourceKey::Fixed("installed")),
    (FieldId::Vendor, SourceKey::Key("Vendor")),
]);

/// Record source over a set of decoded rpm package headers
pub struct HeaderRecordSource {
    packages: Vec<Package>,
}

impl HeaderRecordSource {
    /// Wrap already-decoded packages
    pub fn from_packages(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// Parse each `.rpm` file into a decoded header.
    ///
    /// Fails on the first file that cannot be opened or parsed; a broken
    /// package file is a source-level error, not a field-level one.
    pub fn open_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut packages = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            debug!("Parsing RPM package: {}", path.display());

            let file = File::open(path).map_err(|e| {
                Error::PackageRead(format!("{}: {}", path.display(), e))
            })?;
            let mut reader = BufReader::new(file);
            let package = Package::parse(&mut reader).map_err(|e| {
                Error::PackageRead(format!("{}: {}", path.display(), e))
            })?;
            packages.push(package);
        }
        Ok(Self { packages })
    }

    fn record_from(package: &Package) -> RawRecord {
        let md = &package.metadata;
        let mut record = RawRecord::new();

        if let Ok(name) = md.get_name() {
            record.insert("Name", name);
        }
        if let Ok(version) = md.get_version() {
            record.insert("Version", version);
        }
        if let Ok(summary) = md.get_summary() {
            record.insert("Summary", summary);
        }
        if let Ok(size) = md.get_installed_size() {
            record.insert("Size", size);
        }
        if let Ok(arch) = md.get_arch() {
            record.insert("Arch", arch);
        }
        if let Ok(license) = md.get_license() {
            record.insert("License", license);
        }
        if let Ok(url) = md.get_url() {
            record.insert("Url", url);
        }
        if let Ok(release) = md.get_release() {
            record.insert("Release", release);
        }
        if let Ok(vendor) = md.get_vendor() {
            record.insert("Vendor", vendor);
        }

        record
    }
}

impl RecordSource for HeaderRecordSource {
    fn backend(&self) -> &'static str {
        "rpm-header"
    }

    fn field_map(&self) -> &'static FieldMap {
        &FIELDS
    }

    fn read_records(&mut self) -> Result<Vec<RawRecord>> {
        let records: Vec<RawRecord> = self.packages.iter().map(Self::record_from).collect();
        debug!(
            "Read {} package record(s) from rpm-header backend",
            records.len()
        );
        Ok(records)
    }
}
