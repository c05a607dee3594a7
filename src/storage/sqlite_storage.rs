use crate::{
    error::{Result, TaskboardError},
    storage::Storage,
};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

/// SQLite-based storage backend keeping every key in one table
pub struct SqliteStorage {
    connection: Connection,
}

impl SqliteStorage {
    const SCHEMA: &'static str =
        "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)";

    /// Opens (or creates) a database file
    pub fn open(database_path: impl AsRef<Path>) -> Result<Self> {
        let connection = Connection::open(database_path).map_err(storage_error)?;
        Self::from_connection(connection)
    }

    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(storage_error)?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        connection
            .execute(Self::SCHEMA, [])
            .map_err(storage_error)?;
        debug!("sqlite storage ready");
        Ok(Self { connection })
    }
}

fn storage_error(err: rusqlite::Error) -> TaskboardError {
    TaskboardError::StorageError(err.to_string())
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(storage_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(storage_error)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(storage_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        assert_eq!(storage.get_item("tasks").unwrap(), None);

        storage.set_item("tasks", "[]").unwrap();
        storage.set_item("tasks", "[{}]").unwrap();

        assert_eq!(storage.get_item("tasks").unwrap().as_deref(), Some("[{}]"));
    }

    #[test]
    fn test_remove() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        storage.set_item("theme", "light").unwrap();
        storage.remove_item("theme").unwrap();

        assert_eq!(storage.get_item("theme").unwrap(), None);
    }

    #[test]
    fn test_file_database_persists() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("taskboard.db");

        {
            let mut storage = SqliteStorage::open(&path).unwrap();
            storage.set_item("boards", r#"[{"id":1,"title":"A"}]"#).unwrap();
        }

        let storage = SqliteStorage::open(&path).unwrap();
        assert_eq!(
            storage.get_item("boards").unwrap().as_deref(),
            Some(r#"[{"id":1,"title":"A"}]"#)
        );
    }
}
