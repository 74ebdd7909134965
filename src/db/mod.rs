/// Database module: the key-value preference store and its migrations.
mod migrations;
mod preferences;

use std::path::{Path, PathBuf};

use anyhow::Result;
use rusqlite::Connection;

pub use preferences::{PreferenceStore, SqliteStore};

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &Path) -> Result<Connection> {
    Ok(open(db_path)?)
}

pub(crate) fn open(db_path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Runs migrations on an already open connection.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    migrations::run_migrations(conn)
}

/// Returns the data directory used for the database and the log file.
/// Falls back to the working directory when no data dir is found.
pub fn default_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let revio_dir = data_dir.join("revio");
        std::fs::create_dir_all(&revio_dir).ok();
        revio_dir
    } else {
        PathBuf::from(".")
    }
}

/// Returns the default database path inside the user's data directory.
pub fn default_db_path() -> PathBuf {
    default_data_dir().join("revio.db")
}
