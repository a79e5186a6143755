// src/source/sqlite.rs

//! SQLite package database backend
//!
//! Reads the `packages` table of an rpmdb in primary_db form, as found at
//! `/var/lib/rpm/rpmdb.sqlite` on sqlite-backed rpm installations. The
//! database is opened read-only; this backend never writes.

use crate::error::{Error, Result};
use crate::mapper::{FieldMap, SourceKey};
use crate::record::{RawRecord, Value};
use crate::schema::FieldId;
use crate::source::RecordSource;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

/// Default location of the sqlite-backed rpm database
pub const DEFAULT_DB_PATH: &str = "/var/lib/rpm/rpmdb.sqlite";

const SELECT_PACKAGES: &str = "SELECT
 pkgKey
 , name
 , arch
 , epoch
 , version
 , release
 , summary
 , url
 , size_package
 , size_installed
 , size_archive
 , location_href
 , rpm_license
 , rpm_vendor
FROM packages";

static FIELDS: FieldMap = FieldMap::new(&[
    (FieldId::Package, SourceKey::Key("name")),
    (FieldId::Version, SourceKey::Key("version")),
    (FieldId::Description, SourceKey::Key("summary")),
    (FieldId::InstalledSize, SourceKey::Key("size_installed")),
    (FieldId::Architecture, SourceKey::Key("arch")),
    (FieldId::License, SourceKey::Key("rpm_license")),
    (FieldId::Homepage, SourceKey::Key("url")),
    (FieldId::Release, SourceKey::Key("release")),
    (FieldId::Status, SourceKey::Fixed("installed")),
    (FieldId::Vendor, SourceKey::Key("rpm_vendor")),
]);

/// Record source over a sqlite-backed rpm database
pub struct SqliteRecordSource {
    conn: Connection,
}

impl SqliteRecordSource {
    /// Open the package database at `db_path` read-only.
    ///
    /// Fails if the file does not exist or has no `packages` table.
    pub fn open(db_path: &str) -> Result<Self> {
        if !Path::new(db_path).exists() {
            return Err(Error::DatabaseNotFound(db_path.to_string()));
        }

        debug!("Opening package database at: {}", db_path);
        let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;

        let tables: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'packages'",
            [],
            |row| row.get(0),
        )?;
        if tables == 0 {
            return Err(Error::UnrecognizedDatabase(db_path.to_string()));
        }

        Ok(Self { conn })
    }
}

impl RecordSource for SqliteRecordSource {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn field_map(&self) -> &'static FieldMap {
        &FIELDS
    }

    fn read_records(&mut self) -> Result<Vec<RawRecord>> {
        let mut stmt = self.conn.prepare(SELECT_PACKAGES)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();

        let mut records = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut record = RawRecord::new();
            for (idx, column) in columns.iter().enumerate() {
                // NULL columns are simply absent from the record
                match row.get_ref(idx)? {
                    ValueRef::Null => {}
                    ValueRef::Integer(i) => record.insert(column.clone(), Value::Int(i)),
                    ValueRef::Real(f) => record.insert(column.clone(), f.to_string()),
                    ValueRef::Text(text) => {
                        record.insert(column.clone(), String::from_utf8_lossy(text).into_owned())
                    }
                    ValueRef::Blob(blob) => record.insert(column.clone(), blob.to_vec()),
                }
            }
            records.push(record);
        }

        debug!("Read {} package record(s) from sqlite backend", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_db(path: &str) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            "CREATE TABLE packages (
                pkgKey INTEGER PRIMARY KEY,
                name TEXT,
                arch TEXT,
                epoch TEXT,
                version TEXT,
                release TEXT,
                summary TEXT,
                url TEXT,
                size_package INTEGER,
                size_installed INTEGER,
                size_archive INTEGER,
                location_href TEXT,
                rpm_license TEXT,
                rpm_vendor TEXT
            );",
        )
        .unwrap();
    }

    #[test]
    fn test_open_missing_database() {
        let result = SqliteRecordSource::open("/nonexistent/rpmdb.sqlite");
        assert!(matches!(result, Err(Error::DatabaseNotFound(_))));
    }

    #[test]
    fn test_open_database_without_packages_table() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_str().unwrap().to_string();
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE settings (id INTEGER PRIMARY KEY);")
            .unwrap();
        drop(conn);

        let result = SqliteRecordSource::open(&path);
        assert!(matches!(result, Err(Error::UnrecognizedDatabase(_))));
    }

    #[test]
    fn test_read_records_preserves_row_order() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_str().unwrap().to_string();
        create_test_db(&path);
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "INSERT INTO packages (pkgKey, name, version) VALUES (1, 'bash', '5.2.15');
             INSERT INTO packages (pkgKey, name, version) VALUES (2, 'zlib', '1.3');",
        )
        .unwrap();
        drop(conn);

        let mut source = SqliteRecordSource::open(&path).unwrap();
        let records = source.read_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&Value::from("bash")));
        assert_eq!(records[1].get("name"), Some(&Value::from("zlib")));
    }

    #[test]
    fn test_null_columns_are_absent() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_str().unwrap().to_string();
        create_test_db(&path);
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("INSERT INTO packages (pkgKey, name) VALUES (1, 'bash');")
            .unwrap();
        drop(conn);

        let mut source = SqliteRecordSource::open(&path).unwrap();
        let records = source.read_records().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].get("name").is_some());
        assert!(records[0].get("rpm_vendor").is_none());
    }

    #[test]
    fn test_integer_columns_stay_integers() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_str().unwrap().to_string();
        create_test_db(&path);
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "INSERT INTO packages (pkgKey, name, size_installed) VALUES (1, 'bash', 7489531);",
        )
        .unwrap();
        drop(conn);

        let mut source = SqliteRecordSource::open(&path).unwrap();
        let records = source.read_records().unwrap();
        assert_eq!(
            records[0].get("size_installed"),
            Some(&Value::Int(7489531))
        );
    }
}
