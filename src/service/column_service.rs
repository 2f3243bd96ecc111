use tracing::{debug, info};

use super::validation;
use crate::errors::{Result, ValidationError};
use crate::models::{Column, DEFAULT_COLUMN_COLOR};
use crate::repository::{BoardRepository, ColumnRepository};
use crate::store::Store;

pub struct ColumnService<'a> {
    columns: ColumnRepository<'a>,
    boards: BoardRepository<'a>,
}

impl<'a> ColumnService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            columns: ColumnRepository::new(store),
            boards: BoardRepository::new(store),
        }
    }

    /// Append a column to a board. Position is the board's current column
    /// count plus one; color defaults to gray.
    pub fn add_column(&self, board_id: i64, name: &str, color: Option<&str>) -> Result<Column> {
        validation::column_name(name)?;
        if self.boards.find_by_id(board_id)?.is_none() {
            return Err(ValidationError::board_not_found(board_id).into());
        }
        if let Some(color) = color {
            validation::color(color)?;
        }

        let position = self.columns.count_by_board(board_id)? + 1;
        debug!(board_id, position, "computed next column position");

        let column = self.columns.create(&Column {
            id: 0,
            board_id,
            name: name.to_string(),
            position,
            color: color.unwrap_or(DEFAULT_COLUMN_COLOR).to_string(),
            tasks: Vec::new(),
        })?;
        info!(column_id = column.id, board_id, name, position, "added column");
        Ok(column)
    }

    pub fn get_column(&self, id: i64) -> Result<Option<Column>> {
        self.columns.find_by_id(id)
    }

    /// Columns of a board in display order.
    pub fn get_columns_by_board(&self, board_id: i64) -> Result<Vec<Column>> {
        self.columns.find_by_board(board_id)
    }

    pub fn update_column_name(&self, id: i64, name: &str) -> Result<()> {
        validation::column_name(name)?;
        let mut column = self.require(id)?;
        column.name = name.to_string();
        self.columns.update(&column)?;
        info!(column_id = id, name, "renamed column");
        Ok(())
    }

    pub fn update_column_color(&self, id: i64, color: &str) -> Result<()> {
        validation::color(color)?;
        let mut column = self.require(id)?;
        column.color = color.to_string();
        self.columns.update(&column)?;
        info!(column_id = id, color, "recolored column");
        Ok(())
    }

    /// Delete a column. Its tasks are not checked and stay in the store.
    pub fn delete_column(&self, id: i64) -> Result<()> {
        self.require(id)?;
        self.columns.delete(id)?;
        info!(column_id = id, "deleted column");
        Ok(())
    }

    fn require(&self, id: i64) -> Result<Column> {
        Ok(self
            .columns
            .find_by_id(id)?
            .ok_or_else(|| ValidationError::column_not_found(id))?)
    }
}
