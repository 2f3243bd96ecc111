use rusqlite::{Row, params};

use super::{FromRow, query_all, query_one};
use crate::errors::{Result, StorageContext};
use crate::models::Board;
use crate::store::Store;

impl FromRow for Board {
    const COLUMNS: &'static str = "id, name, created_at";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Board {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
            columns: Vec::new(),
        })
    }
}

pub struct BoardRepository<'a> {
    store: &'a Store,
}

impl<'a> BoardRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Insert a board and return it with its generated id.
    pub fn create(&self, board: &Board) -> Result<Board> {
        let conn = self.store.conn();
        conn.execute(
            "INSERT INTO boards (name, created_at) VALUES (?1, ?2)",
            params![board.name, board.created_at],
        )
        .storage("Failed to insert board")?;
        Ok(Board {
            id: conn.last_insert_rowid(),
            ..board.clone()
        })
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Board>> {
        query_one(
            self.store.conn(),
            &format!("SELECT {} FROM boards WHERE id = ?1", Board::COLUMNS),
            params![id],
            "Failed to query board",
        )
    }

    /// All boards, newest first.
    pub fn find_all(&self) -> Result<Vec<Board>> {
        query_all(
            self.store.conn(),
            &format!(
                "SELECT {} FROM boards ORDER BY created_at DESC, id DESC",
                Board::COLUMNS
            ),
            [],
            "Failed to query boards",
        )
    }

    pub fn update(&self, board: &Board) -> Result<()> {
        self.store
            .conn()
            .execute(
                "UPDATE boards SET name = ?1 WHERE id = ?2",
                params![board.name, board.id],
            )
            .storage("Failed to update board")?;
        Ok(())
    }

    /// Returns whether a row was removed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let count = self
            .store
            .conn()
            .execute("DELETE FROM boards WHERE id = ?1", params![id])
            .storage("Failed to delete board")?;
        Ok(count > 0)
    }
}
