use tracing::info;

use super::{now, validation};
use crate::errors::{Result, ValidationError};
use crate::models::{Board, Column};
use crate::repository::{BoardRepository, ColumnRepository, TaskRepository};
use crate::store::Store;

/// Columns every new board starts with, as (name, color), in display order.
pub const DEFAULT_COLUMNS: [(&str, &str); 3] = [
    ("TODO", "#FF6B6B"),
    ("IN PROGRESS", "#4ECDC4"),
    ("DONE", "#45B7D1"),
];

pub struct BoardService<'a> {
    boards: BoardRepository<'a>,
    columns: ColumnRepository<'a>,
    tasks: TaskRepository<'a>,
}

impl<'a> BoardService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            boards: BoardRepository::new(store),
            columns: ColumnRepository::new(store),
            tasks: TaskRepository::new(store),
        }
    }

    /// Create a board with the default TODO / IN PROGRESS / DONE columns and
    /// return it with those columns attached.
    pub fn create_board(&self, name: &str) -> Result<Board> {
        validation::board_name(name)?;

        let board = self.boards.create(&Board {
            id: 0,
            name: name.to_string(),
            created_at: now(),
            columns: Vec::new(),
        })?;
        self.create_default_columns(board.id)?;
        info!(board_id = board.id, name, "created board");

        self.get_board_with_columns(board.id)?
            .ok_or_else(|| ValidationError::board_not_found(board.id).into())
    }

    /// The board with its columns in display order, or `None` if it does not exist.
    pub fn get_board_with_columns(&self, id: i64) -> Result<Option<Board>> {
        let Some(mut board) = self.boards.find_by_id(id)? else {
            return Ok(None);
        };
        board.columns = self.columns.find_by_board(id)?;
        Ok(Some(board))
    }

    /// Like [`get_board_with_columns`](Self::get_board_with_columns), with
    /// every column's tasks loaded as well.
    pub fn get_board_snapshot(&self, id: i64) -> Result<Option<Board>> {
        let Some(mut board) = self.get_board_with_columns(id)? else {
            return Ok(None);
        };
        for column in &mut board.columns {
            column.tasks = self.tasks.find_by_column(column.id)?;
        }
        Ok(Some(board))
    }

    /// All boards, newest first.
    pub fn get_all_boards(&self) -> Result<Vec<Board>> {
        self.boards.find_all()
    }

    pub fn update_board_name(&self, id: i64, name: &str) -> Result<()> {
        validation::board_name(name)?;

        let mut board = self
            .boards
            .find_by_id(id)?
            .ok_or_else(|| ValidationError::board_not_found(id))?;
        board.name = name.to_string();
        self.boards.update(&board)?;
        info!(board_id = id, name, "renamed board");
        Ok(())
    }

    /// Delete the board row. Missing ids are ignored; columns and tasks of
    /// the board are left in place.
    pub fn delete_board(&self, id: i64) -> Result<()> {
        let removed = self.boards.delete(id)?;
        info!(board_id = id, removed, "deleted board");
        Ok(())
    }

    fn create_default_columns(&self, board_id: i64) -> Result<()> {
        for (index, (name, color)) in DEFAULT_COLUMNS.iter().enumerate() {
            self.columns.create(&Column {
                id: 0,
                board_id,
                name: name.to_string(),
                position: index as i32 + 1,
                color: color.to_string(),
                tasks: Vec::new(),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;
    use crate::service::{ColumnService, TaskService};

    #[test]
    fn test_create_board_adds_three_default_columns() -> Result<()> {
        let store = Store::open_in_memory()?;
        let service = BoardService::new(&store);

        let board = service.create_board("My Board")?;
        assert!(board.id > 0);
        assert_eq!(board.name, "My Board");

        let summary: Vec<(&str, i32, &str)> = board
            .columns
            .iter()
            .map(|c| (c.name.as_str(), c.position, c.color.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("TODO", 1, "#FF6B6B"),
                ("IN PROGRESS", 2, "#4ECDC4"),
                ("DONE", 3, "#45B7D1"),
            ]
        );
        assert!(board.columns.iter().all(|c| c.board_id == board.id));
        Ok(())
    }

    #[test]
    fn test_create_board_rejects_blank_names() -> Result<()> {
        let store = Store::open_in_memory()?;
        let service = BoardService::new(&store);

        for name in ["", "   "] {
            let err = service.create_board(name).unwrap_err();
            assert_eq!(err.to_string(), "Board name cannot be empty");
        }
        let err = service.create_board(&"a".repeat(101)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Board name cannot be longer than 100 characters"
        );

        // Nothing was written.
        assert!(service.get_all_boards()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_create_board_accepts_exactly_100_characters() -> Result<()> {
        let store = Store::open_in_memory()?;
        let board = BoardService::new(&store).create_board(&"b".repeat(100))?;
        assert_eq!(board.name.len(), 100);
        Ok(())
    }

    #[test]
    fn test_get_board_with_columns_missing_is_none() -> Result<()> {
        let store = Store::open_in_memory()?;
        let service = BoardService::new(&store);
        assert!(service.get_board_with_columns(999)?.is_none());
        assert!(service.get_board_snapshot(999)?.is_none());
        Ok(())
    }

    #[test]
    fn test_get_all_boards_newest_first() -> Result<()> {
        let store = Store::open_in_memory()?;
        let service = BoardService::new(&store);

        service.create_board("first")?;
        service.create_board("second")?;
        service.create_board("third")?;

        let names: Vec<String> = service
            .get_all_boards()?
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["third", "second", "first"]);
        Ok(())
    }

    #[test]
    fn test_update_board_name() -> Result<()> {
        let store = Store::open_in_memory()?;
        let service = BoardService::new(&store);
        let board = service.create_board("Old")?;

        service.update_board_name(board.id, "New")?;
        let fetched = service.get_board_with_columns(board.id)?.unwrap();
        assert_eq!(fetched.name, "New");
        assert_eq!(fetched.created_at, board.created_at);

        let err = service.update_board_name(board.id, " ").unwrap_err();
        assert_eq!(err.to_string(), "Board name cannot be empty");

        let err = service.update_board_name(4242, "Valid").unwrap_err();
        assert_eq!(err.to_string(), "Board not found with ID: 4242");
        Ok(())
    }

    #[test]
    fn test_update_board_name_validates_name_before_existence() -> Result<()> {
        let store = Store::open_in_memory()?;
        let err = BoardService::new(&store)
            .update_board_name(4242, "")
            .unwrap_err();
        assert_eq!(err.to_string(), "Board name cannot be empty");
        Ok(())
    }

    #[test]
    fn test_delete_board_is_unconditional_and_does_not_cascade() -> Result<()> {
        let store = Store::open_in_memory()?;
        let service = BoardService::new(&store);
        let board = service.create_board("Doomed")?;

        service.delete_board(board.id)?;
        assert!(service.get_board_with_columns(board.id)?.is_none());

        // Deleting again, or deleting an id that never existed, is fine.
        service.delete_board(board.id)?;
        service.delete_board(123_456)?;

        // The default columns are left behind.
        let orphans = ColumnService::new(&store).get_columns_by_board(board.id)?;
        assert_eq!(orphans.len(), 3);
        Ok(())
    }

    #[test]
    fn test_board_snapshot_includes_tasks_in_order() -> Result<()> {
        let store = Store::open_in_memory()?;
        let boards = BoardService::new(&store);
        let tasks = TaskService::new(&store);

        let board = boards.create_board("Snapshot")?;
        let todo = board.columns[0].id;
        let done = board.columns[2].id;
        tasks.create_task(todo, "one", None)?;
        tasks.create_task(todo, "two", Some("second"))?;
        tasks.create_task(done, "shipped", None)?;

        let snapshot = boards.get_board_snapshot(board.id)?.unwrap();
        let todo_titles: Vec<&str> = snapshot.columns[0]
            .tasks
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(todo_titles, vec!["one", "two"]);
        assert!(snapshot.columns[1].tasks.is_empty());
        assert_eq!(snapshot.columns[2].tasks.len(), 1);

        // The lighter read leaves tasks unloaded.
        let light = boards.get_board_with_columns(board.id)?.unwrap();
        assert!(light.columns.iter().all(|c| c.tasks.is_empty()));
        Ok(())
    }
}
