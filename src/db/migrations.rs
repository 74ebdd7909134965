/// Database migrations and schema management.
use rusqlite::Connection;

/// Creates the schema if it doesn't exist yet.
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS preferences (
            key         TEXT    PRIMARY KEY,
            value       TEXT    NOT NULL,
            updated_at  TEXT    NOT NULL
        );
        ",
    )?;
    migrate_preferences_add_updated_at(conn)?;
    Ok(())
}

// Early builds created the table without a timestamp column.
fn migrate_preferences_add_updated_at(conn: &Connection) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare("PRAGMA table_info(preferences)")?;
    let rows = stmt.query_map([], |row| {
        let name: String = row.get(1)?;
        Ok(name)
    })?;
    for row in rows {
        if row? == "updated_at" {
            return Ok(());
        }
    }

    conn.execute(
        "ALTER TABLE preferences ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
        [],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn adds_missing_timestamp_column() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE preferences (key TEXT PRIMARY KEY, value TEXT NOT NULL);
             INSERT INTO preferences (key, value) VALUES ('theme', 'dark');",
        )
        .unwrap();
        run_migrations(&conn).unwrap();
        let value: String = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = 'theme' AND updated_at = ''",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(value, "dark");
    }
}
