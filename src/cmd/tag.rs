//! `kanban tag ...`

use anyhow::Result;

use kanban::Store;
use kanban::service::TagService;

use super::Output;
use crate::TagCommands;

pub fn cmd_tag(store: &Store, command: TagCommands, out: &Output) -> Result<()> {
    let service = TagService::new(store);

    match command {
        TagCommands::Create { name, color } => {
            let tag = service.create_tag(&name, &color)?;
            out.show(&tag, |t| println!("Created tag {} '{}' ({})", t.id, t.name, t.color))
        }
        TagCommands::List => {
            let tags = service.get_all_tags()?;
            out.show(&tags, |tags| {
                if tags.is_empty() {
                    println!("No tags.");
                }
                for tag in tags {
                    println!("{:<6} {:<9} {}", tag.id, tag.color, tag.name);
                }
            })
        }
        TagCommands::Attach { task_id, tag_id } => {
            service.tag_task(task_id, tag_id)?;
            out.done(&format!("Tagged task {} with tag {}", task_id, tag_id))
        }
        TagCommands::Detach { task_id, tag_id } => {
            service.untag_task(task_id, tag_id)?;
            out.done(&format!("Removed tag {} from task {}", tag_id, task_id))
        }
        TagCommands::Delete { id } => {
            service.delete_tag(id)?;
            out.done(&format!("Deleted tag {}", id))
        }
    }
}
