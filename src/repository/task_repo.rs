use rusqlite::{Row, params};
use tracing::debug;

use super::{FromRow, TagRepository, query_all, query_one};
use crate::errors::{Result, StorageContext};
use crate::models::{Priority, Task};
use crate::store::Store;

impl FromRow for Task {
    const COLUMNS: &'static str =
        "id, column_id, title, description, priority, position, created_at, due_date";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let priority: Option<Priority> = row.get(4)?;
        Ok(Task {
            id: row.get(0)?,
            column_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            priority: priority.unwrap_or_default(),
            position: row.get(5)?,
            created_at: row.get(6)?,
            due_date: row.get(7)?,
            tags: Vec::new(),
        })
    }
}

pub struct TaskRepository<'a> {
    store: &'a Store,
    tags: TagRepository<'a>,
}

impl<'a> TaskRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            tags: TagRepository::new(store),
        }
    }

    /// Insert a task. Tags on the record are not written; link them with
    /// [`TagRepository::attach`].
    pub fn create(&self, task: &Task) -> Result<Task> {
        let conn = self.store.conn();
        conn.execute(
            "INSERT INTO tasks (column_id, title, description, priority, position, created_at, due_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                task.column_id,
                task.title,
                task.description,
                task.priority,
                task.position,
                task.created_at,
                task.due_date
            ],
        )
        .storage("Failed to insert task")?;
        Ok(Task {
            id: conn.last_insert_rowid(),
            tags: Vec::new(),
            ..task.clone()
        })
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Task>> {
        let task: Option<Task> = query_one(
            self.store.conn(),
            &format!("SELECT {} FROM tasks WHERE id = ?1", Task::COLUMNS),
            params![id],
            "Failed to query task",
        )?;
        match task {
            Some(mut task) => {
                task.tags = self.tags.find_by_task(task.id)?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    /// Tasks of a column in display order, each with its tags.
    pub fn find_by_column(&self, column_id: i64) -> Result<Vec<Task>> {
        let mut tasks: Vec<Task> = query_all(
            self.store.conn(),
            &format!(
                "SELECT {} FROM tasks WHERE column_id = ?1 ORDER BY position, id",
                Task::COLUMNS
            ),
            params![column_id],
            "Failed to query tasks",
        )?;
        for task in &mut tasks {
            task.tags = self.tags.find_by_task(task.id)?;
        }
        Ok(tasks)
    }

    /// The position a task appended to `column_id` would take: one past the
    /// highest position in use, or 1 for an empty column.
    pub fn next_position(&self, column_id: i64) -> Result<i32> {
        let next: i32 = self
            .store
            .conn()
            .query_row(
                "SELECT COALESCE(MAX(position), 0) + 1 FROM tasks WHERE column_id = ?1",
                params![column_id],
                |row| row.get(0),
            )
            .storage("Failed to get max task position")?;
        debug!(column_id, next, "computed next task position");
        Ok(next)
    }

    pub fn update(&self, task: &Task) -> Result<()> {
        self.store
            .conn()
            .execute(
                "UPDATE tasks SET column_id = ?1, title = ?2, description = ?3, priority = ?4, position = ?5, due_date = ?6
                 WHERE id = ?7",
                params![
                    task.column_id,
                    task.title,
                    task.description,
                    task.priority,
                    task.position,
                    task.due_date,
                    task.id
                ],
            )
            .storage("Failed to update task")?;
        Ok(())
    }

    /// Delete a task together with its tag links.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.store.conn();
        conn.execute("DELETE FROM task_tags WHERE task_id = ?1", params![id])
            .storage("Failed to delete task tag links")?;
        let count = conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])
            .storage("Failed to delete task")?;
        Ok(count > 0)
    }
}
