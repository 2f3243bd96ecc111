use tracing::info;

use super::validation;
use crate::errors::{Result, ValidationError};
use crate::models::Tag;
use crate::repository::{TagRepository, TaskRepository};
use crate::store::Store;

pub struct TagService<'a> {
    tags: TagRepository<'a>,
    tasks: TaskRepository<'a>,
}

impl<'a> TagService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            tags: TagRepository::new(store),
            tasks: TaskRepository::new(store),
        }
    }

    pub fn create_tag(&self, name: &str, color: &str) -> Result<Tag> {
        validation::tag_name(name)?;
        validation::color(color)?;
        if self.tags.find_by_name(name)?.is_some() {
            return Err(ValidationError::new(format!("Tag already exists: {}", name)).into());
        }

        let tag = self.tags.create(&Tag {
            id: 0,
            name: name.to_string(),
            color: color.to_string(),
        })?;
        info!(tag_id = tag.id, name, "created tag");
        Ok(tag)
    }

    /// All tags, by name.
    pub fn get_all_tags(&self) -> Result<Vec<Tag>> {
        self.tags.find_all()
    }

    pub fn tag_task(&self, task_id: i64, tag_id: i64) -> Result<()> {
        self.require_link_ends(task_id, tag_id)?;
        self.tags.attach(task_id, tag_id)?;
        info!(task_id, tag_id, "tagged task");
        Ok(())
    }

    pub fn untag_task(&self, task_id: i64, tag_id: i64) -> Result<()> {
        self.require_link_ends(task_id, tag_id)?;
        let removed = self.tags.detach(task_id, tag_id)?;
        info!(task_id, tag_id, removed, "untagged task");
        Ok(())
    }

    pub fn delete_tag(&self, id: i64) -> Result<()> {
        if self.tags.find_by_id(id)?.is_none() {
            return Err(ValidationError::tag_not_found(id).into());
        }
        self.tags.delete(id)?;
        info!(tag_id = id, "deleted tag");
        Ok(())
    }

    fn require_link_ends(&self, task_id: i64, tag_id: i64) -> Result<()> {
        if self.tasks.find_by_id(task_id)?.is_none() {
            return Err(ValidationError::task_not_found(task_id).into());
        }
        if self.tags.find_by_id(tag_id)?.is_none() {
            return Err(ValidationError::tag_not_found(tag_id).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;
    use crate::service::{BoardService, TaskService};

    #[test]
    fn test_create_tag_rules() -> Result<()> {
        let store = Store::open_in_memory()?;
        let service = TagService::new(&store);

        let tag = service.create_tag("urgent", "#FF0000")?;
        assert!(tag.id > 0);

        let err = service.create_tag("urgent", "#00FF00").unwrap_err();
        assert_eq!(err.to_string(), "Tag already exists: urgent");
        let err = service.create_tag(" ", "#00FF00").unwrap_err();
        assert_eq!(err.to_string(), "Tag name cannot be empty");
        let err = service.create_tag("ok", "green").unwrap_err();
        assert_eq!(err.to_string(), "Color must be in hex format (#RRGGBB)");

        assert_eq!(service.get_all_tags()?, vec![tag]);
        Ok(())
    }

    #[test]
    fn test_tag_and_untag_task() -> Result<()> {
        let store = Store::open_in_memory()?;
        let board = BoardService::new(&store).create_board("Tags")?;
        let tasks = TaskService::new(&store);
        let service = TagService::new(&store);

        let task = tasks.create_task(board.columns[0].id, "label me", None)?;
        let tag = service.create_tag("frontend", "#0000FF")?;

        service.tag_task(task.id, tag.id)?;
        service.tag_task(task.id, tag.id)?;
        assert_eq!(tasks.get_task(task.id)?.unwrap().tags, vec![tag.clone()]);

        service.untag_task(task.id, tag.id)?;
        assert!(tasks.get_task(task.id)?.unwrap().tags.is_empty());

        let err = service.tag_task(999, tag.id).unwrap_err();
        assert_eq!(err.to_string(), "Task not found with ID: 999");
        let err = service.tag_task(task.id, 999).unwrap_err();
        assert_eq!(err.to_string(), "Tag not found with ID: 999");
        Ok(())
    }

    #[test]
    fn test_delete_tag() -> Result<()> {
        let store = Store::open_in_memory()?;
        let board = BoardService::new(&store).create_board("Tags")?;
        let tasks = TaskService::new(&store);
        let service = TagService::new(&store);

        let task = tasks.create_task(board.columns[0].id, "tagged", None)?;
        let tag = service.create_tag("gone", "#333333")?;
        service.tag_task(task.id, tag.id)?;

        service.delete_tag(tag.id)?;
        assert!(service.get_all_tags()?.is_empty());
        assert!(tasks.get_task(task.id)?.unwrap().tags.is_empty());

        let err = service.delete_tag(tag.id).unwrap_err();
        assert_eq!(err.to_string(), format!("Tag not found with ID: {}", tag.id));
        Ok(())
    }
}
