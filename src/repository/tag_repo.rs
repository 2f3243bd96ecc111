use rusqlite::{Row, params};

use super::{FromRow, query_all, query_one};
use crate::errors::{Result, StorageContext};
use crate::models::Tag;
use crate::store::Store;

impl FromRow for Tag {
    const COLUMNS: &'static str = "id, name, color";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Tag {
            id: row.get(0)?,
            name: row.get(1)?,
            color: row.get(2)?,
        })
    }
}

pub struct TagRepository<'a> {
    store: &'a Store,
}

impl<'a> TagRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn create(&self, tag: &Tag) -> Result<Tag> {
        let conn = self.store.conn();
        conn.execute(
            "INSERT INTO tags (name, color) VALUES (?1, ?2)",
            params![tag.name, tag.color],
        )
        .storage("Failed to insert tag")?;
        Ok(Tag {
            id: conn.last_insert_rowid(),
            ..tag.clone()
        })
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Tag>> {
        query_one(
            self.store.conn(),
            &format!("SELECT {} FROM tags WHERE id = ?1", Tag::COLUMNS),
            params![id],
            "Failed to query tag",
        )
    }

    pub fn find_by_name(&self, name: &str) -> Result<Option<Tag>> {
        query_one(
            self.store.conn(),
            &format!("SELECT {} FROM tags WHERE name = ?1", Tag::COLUMNS),
            params![name],
            "Failed to query tag by name",
        )
    }

    pub fn find_all(&self) -> Result<Vec<Tag>> {
        query_all(
            self.store.conn(),
            &format!("SELECT {} FROM tags ORDER BY name", Tag::COLUMNS),
            [],
            "Failed to query tags",
        )
    }

    /// Tags linked to a task, by name.
    pub fn find_by_task(&self, task_id: i64) -> Result<Vec<Tag>> {
        query_all(
            self.store.conn(),
            "SELECT tags.id, tags.name, tags.color FROM tags
             JOIN task_tags ON task_tags.tag_id = tags.id
             WHERE task_tags.task_id = ?1
             ORDER BY tags.name",
            params![task_id],
            "Failed to query task tags",
        )
    }

    /// Link a tag to a task. Linking twice is a no-op.
    pub fn attach(&self, task_id: i64, tag_id: i64) -> Result<()> {
        self.store
            .conn()
            .execute(
                "INSERT OR IGNORE INTO task_tags (task_id, tag_id) VALUES (?1, ?2)",
                params![task_id, tag_id],
            )
            .storage("Failed to attach tag")?;
        Ok(())
    }

    /// Returns whether a link was removed.
    pub fn detach(&self, task_id: i64, tag_id: i64) -> Result<bool> {
        let count = self
            .store
            .conn()
            .execute(
                "DELETE FROM task_tags WHERE task_id = ?1 AND tag_id = ?2",
                params![task_id, tag_id],
            )
            .storage("Failed to detach tag")?;
        Ok(count > 0)
    }

    /// Delete a tag and every link to it.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.store.conn();
        conn.execute("DELETE FROM task_tags WHERE tag_id = ?1", params![id])
            .storage("Failed to delete tag links")?;
        let count = conn
            .execute("DELETE FROM tags WHERE id = ?1", params![id])
            .storage("Failed to delete tag")?;
        Ok(count > 0)
    }
}
