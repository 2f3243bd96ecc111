//! SQLite store handle.
//!
//! `Store` owns the process-wide connection. It is opened once from an explicit
//! [`StoreLocation`], handed by reference to repositories and services, and
//! closed explicitly with [`Store::close`].

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::debug;

use crate::errors::{Result, StorageError};

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    InMemory,
}

impl std::fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreLocation::File(path) => write!(f, "{}", path.display()),
            StoreLocation::InMemory => f.write_str(":memory:"),
        }
    }
}

pub struct Store {
    conn: Connection,
    location: StoreLocation,
}

impl Store {
    /// Open the store at `location` and make sure the schema exists.
    pub fn open(location: &StoreLocation) -> Result<Self> {
        match location {
            StoreLocation::File(path) => Self::open_path(path),
            StoreLocation::InMemory => Self::open_in_memory(),
        }
    }

    /// Open (or create) a SQLite database at the given path and run migrations.
    pub fn open_path(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self {
            conn,
            location: StoreLocation::File(path.to_path_buf()),
        };
        store.init()?;
        Ok(store)
    }

    /// Create an in-memory SQLite database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::Open {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        let store = Self {
            conn,
            location: StoreLocation::InMemory,
        };
        store.init()?;
        Ok(store)
    }

    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any error SQLite reports on shutdown.
    pub fn close(self) -> Result<()> {
        debug!(location = %self.location, "closing store");
        self.conn
            .close()
            .map_err(|(_, e)| StorageError::Close(e))?;
        Ok(())
    }

    fn init(&self) -> Result<()> {
        debug!(location = %self.location, "opening store");
        // Deletes leave child rows behind; the services check parents instead.
        self.conn
            .execute_batch("PRAGMA foreign_keys = OFF;")
            .map_err(StorageError::Migration)?;
        self.run_migrations()
    }

    fn run_migrations(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "
                CREATE TABLE IF NOT EXISTS boards (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );

                CREATE TABLE IF NOT EXISTS columns (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    board_id INTEGER NOT NULL,
                    name TEXT NOT NULL,
                    position INTEGER NOT NULL,
                    color TEXT DEFAULT '#808080',
                    FOREIGN KEY (board_id) REFERENCES boards(id)
                );

                CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    column_id INTEGER NOT NULL,
                    title TEXT NOT NULL,
                    description TEXT,
                    priority TEXT CHECK(priority IN ('LOW', 'MEDIUM', 'HIGH')),
                    position INTEGER NOT NULL,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    due_date DATE,
                    FOREIGN KEY (column_id) REFERENCES columns(id)
                );

                CREATE TABLE IF NOT EXISTS tags (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL UNIQUE,
                    color TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS task_tags (
                    task_id INTEGER NOT NULL,
                    tag_id INTEGER NOT NULL,
                    PRIMARY KEY (task_id, tag_id),
                    FOREIGN KEY (task_id) REFERENCES tasks(id),
                    FOREIGN KEY (tag_id) REFERENCES tags(id)
                );

                CREATE INDEX IF NOT EXISTS idx_columns_board ON columns(board_id);
                CREATE INDEX IF NOT EXISTS idx_tasks_column ON tasks(column_id);
                ",
            )
            .map_err(StorageError::Migration)?;
        debug!("schema migrations applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_creates_all_tables() -> anyhow::Result<()> {
        let store = Store::open_in_memory()?;

        let table_count: i32 = store.conn().query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('boards', 'columns', 'tasks', 'tags', 'task_tags')",
            [],
            |row| row.get(0),
        )?;
        assert_eq!(table_count, 5, "Expected 5 tables to exist");

        let index_count: i32 = store.conn().query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name IN ('idx_columns_board', 'idx_tasks_column')",
            [],
            |row| row.get(0),
        )?;
        assert_eq!(index_count, 2, "Expected 2 indexes to exist");
        assert_eq!(store.location(), &StoreLocation::InMemory);

        Ok(())
    }

    #[test]
    fn test_priority_check_constraint_rejects_unknown_values() -> anyhow::Result<()> {
        let store = Store::open_in_memory()?;
        let res = store.conn().execute(
            "INSERT INTO tasks (column_id, title, priority, position) VALUES (1, 't', 'URGENT', 1)",
            [],
        );
        assert!(res.is_err());
        Ok(())
    }

    #[test]
    fn test_foreign_keys_are_not_enforced() -> anyhow::Result<()> {
        let store = Store::open_in_memory()?;
        // A task pointing at a column that does not exist is accepted by the store.
        store.conn().execute(
            "INSERT INTO tasks (column_id, title, position) VALUES (999, 'orphan', 1)",
            [],
        )?;
        Ok(())
    }

    #[test]
    fn test_reopen_file_store_is_idempotent() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("kanban.db");

        let store = Store::open(&StoreLocation::File(path.clone()))?;
        store
            .conn()
            .execute("INSERT INTO boards (name) VALUES ('persisted')", [])?;
        store.close()?;

        let store = Store::open_path(&path)?;
        let name: String = store
            .conn()
            .query_row("SELECT name FROM boards", [], |row| row.get(0))?;
        assert_eq!(name, "persisted");
        assert_eq!(store.location(), &StoreLocation::File(path));
        store.close()?;
        Ok(())
    }

    #[test]
    fn test_store_location_display() {
        assert_eq!(StoreLocation::InMemory.to_string(), ":memory:");
        assert_eq!(
            StoreLocation::File(PathBuf::from("boards/kanban.db")).to_string(),
            "boards/kanban.db"
        );
    }
}
