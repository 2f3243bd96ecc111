use rusqlite::{Row, params};

use super::{FromRow, query_all, query_one};
use crate::errors::{Result, StorageContext};
use crate::models::{Column, DEFAULT_COLUMN_COLOR};
use crate::store::Store;

impl FromRow for Column {
    const COLUMNS: &'static str = "id, board_id, name, position, color";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let color: Option<String> = row.get(4)?;
        Ok(Column {
            id: row.get(0)?,
            board_id: row.get(1)?,
            name: row.get(2)?,
            position: row.get(3)?,
            color: color.unwrap_or_else(|| DEFAULT_COLUMN_COLOR.to_string()),
            tasks: Vec::new(),
        })
    }
}

pub struct ColumnRepository<'a> {
    store: &'a Store,
}

impl<'a> ColumnRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn create(&self, column: &Column) -> Result<Column> {
        let conn = self.store.conn();
        conn.execute(
            "INSERT INTO columns (board_id, name, position, color) VALUES (?1, ?2, ?3, ?4)",
            params![column.board_id, column.name, column.position, column.color],
        )
        .storage("Failed to insert column")?;
        Ok(Column {
            id: conn.last_insert_rowid(),
            ..column.clone()
        })
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Column>> {
        query_one(
            self.store.conn(),
            &format!("SELECT {} FROM columns WHERE id = ?1", Column::COLUMNS),
            params![id],
            "Failed to query column",
        )
    }

    /// Columns of a board in display order.
    pub fn find_by_board(&self, board_id: i64) -> Result<Vec<Column>> {
        query_all(
            self.store.conn(),
            &format!(
                "SELECT {} FROM columns WHERE board_id = ?1 ORDER BY position, id",
                Column::COLUMNS
            ),
            params![board_id],
            "Failed to query columns",
        )
    }

    pub fn count_by_board(&self, board_id: i64) -> Result<i32> {
        self.store
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM columns WHERE board_id = ?1",
                params![board_id],
                |row| row.get(0),
            )
            .storage("Failed to count columns")
            .map_err(Into::into)
    }

    pub fn update(&self, column: &Column) -> Result<()> {
        self.store
            .conn()
            .execute(
                "UPDATE columns SET board_id = ?1, name = ?2, position = ?3, color = ?4 WHERE id = ?5",
                params![
                    column.board_id,
                    column.name,
                    column.position,
                    column.color,
                    column.id
                ],
            )
            .storage("Failed to update column")?;
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let count = self
            .store
            .conn()
            .execute("DELETE FROM columns WHERE id = ?1", params![id])
            .storage("Failed to delete column")?;
        Ok(count > 0)
    }
}
