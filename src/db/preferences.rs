/// Key-value preference queries.
use std::path::{Path, PathBuf};

use chrono::Local;
use rusqlite::Connection;

use crate::error::PreferenceError;

pub fn read_preference(key: &str, conn: &Connection) -> rusqlite::Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM preferences WHERE key = ?1")?;
    let mut rows = stmt.query([key])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row.get(0)?))
    } else {
        Ok(None)
    }
}

pub fn write_preference(key: &str, value: &str, conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        (key, value, Local::now().to_rfc3339()),
    )?;
    Ok(())
}

/// Somewhere string preferences can be read from and written to.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl PreferenceStore for Connection {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(read_preference(key, self)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        Ok(write_preference(key, value, self)?)
    }
}

/// Store backed by a database file. Every operation opens its own
/// connection and drops it before returning.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let conn = super::open(&self.path)?;
        Ok(read_preference(key, &conn)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let conn = super::open(&self.path)?;
        write_preference(key, value, &conn)?;
        tracing::debug!(key, value, path = %self.path.display(), "preference written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        super::super::migrations::run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn missing_key_reads_as_none() {
        let conn = memory_db();
        assert_eq!(read_preference("theme", &conn).unwrap(), None);
    }

    #[test]
    fn write_overwrites_previous_value() {
        let conn = memory_db();
        write_preference("language", "en", &conn).unwrap();
        write_preference("language", "de", &conn).unwrap();
        assert_eq!(
            read_preference("language", &conn).unwrap().as_deref(),
            Some("de")
        );
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn sqlite_store_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");
        SqliteStore::new(&path).write("theme", "dark").unwrap();

        let reopened = SqliteStore::new(&path);
        assert_eq!(reopened.read("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn sqlite_store_reports_unopenable_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("missing").join("prefs.db"));
        assert!(matches!(
            store.write("theme", "light"),
            Err(PreferenceError::Storage { .. })
        ));
    }
}
