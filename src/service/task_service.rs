use chrono::NaiveDate;
use tracing::info;

use super::{now, validation};
use crate::errors::{Result, ValidationError};
use crate::models::{Priority, Task};
use crate::repository::{ColumnRepository, TaskRepository};
use crate::store::Store;

pub struct TaskService<'a> {
    tasks: TaskRepository<'a>,
    columns: ColumnRepository<'a>,
}

impl<'a> TaskService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            tasks: TaskRepository::new(store),
            columns: ColumnRepository::new(store),
        }
    }

    /// Append a new MEDIUM-priority task to the end of a column.
    pub fn create_task(
        &self,
        column_id: i64,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task> {
        validation::task_title(title)?;
        self.require_column(column_id)?;

        let position = self.tasks.next_position(column_id)?;
        let task = self.tasks.create(&Task {
            id: 0,
            column_id,
            title: title.to_string(),
            description: description.map(str::to_string),
            priority: Priority::default(),
            position,
            created_at: now(),
            due_date: None,
            tags: Vec::new(),
        })?;
        info!(task_id = task.id, column_id, position, "created task");
        Ok(task)
    }

    pub fn get_task(&self, id: i64) -> Result<Option<Task>> {
        self.tasks.find_by_id(id)
    }

    /// Tasks of a column in display order.
    pub fn get_tasks_by_column(&self, column_id: i64) -> Result<Vec<Task>> {
        self.tasks.find_by_column(column_id)
    }

    /// Replace title and description. Column, position, priority and due
    /// date are kept.
    pub fn update_task(&self, id: i64, title: &str, description: Option<&str>) -> Result<()> {
        validation::task_title(title)?;
        let mut task = self.require(id)?;
        task.title = title.to_string();
        task.description = description.map(str::to_string);
        self.tasks.update(&task)?;
        info!(task_id = id, "updated task");
        Ok(())
    }

    /// Move a task to the end of `target_column_id`. The column it leaves is
    /// not renumbered.
    pub fn move_task(&self, task_id: i64, target_column_id: i64) -> Result<()> {
        self.require_column(target_column_id)?;
        let mut task = self.require(task_id)?;

        let from = task.column_id;
        task.position = self.tasks.next_position(target_column_id)?;
        task.column_id = target_column_id;
        self.tasks.update(&task)?;
        info!(
            task_id,
            from,
            to = target_column_id,
            position = task.position,
            "moved task"
        );
        Ok(())
    }

    pub fn delete_task(&self, id: i64) -> Result<()> {
        self.require(id)?;
        self.tasks.delete(id)?;
        info!(task_id = id, "deleted task");
        Ok(())
    }

    pub fn set_task_priority(&self, id: i64, priority: Priority) -> Result<()> {
        let mut task = self.require(id)?;
        task.priority = priority;
        self.tasks.update(&task)?;
        info!(task_id = id, %priority, "set task priority");
        Ok(())
    }

    /// Set or clear the due date.
    pub fn set_task_due_date(&self, id: i64, due_date: Option<NaiveDate>) -> Result<()> {
        let mut task = self.require(id)?;
        task.due_date = due_date;
        self.tasks.update(&task)?;
        info!(task_id = id, ?due_date, "set task due date");
        Ok(())
    }

    fn require(&self, id: i64) -> Result<Task> {
        Ok(self
            .tasks
            .find_by_id(id)?
            .ok_or_else(|| ValidationError::task_not_found(id))?)
    }

    fn require_column(&self, id: i64) -> Result<()> {
        if self.columns.find_by_id(id)?.is_none() {
            return Err(ValidationError::column_not_found(id).into());
        }
        Ok(())
    }
}
