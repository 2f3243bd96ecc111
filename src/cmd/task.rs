//! `kanban task ...`

use anyhow::Result;

use kanban::service::TaskService;
use kanban::{Priority, Store, Task};

use super::Output;
use crate::TaskCommands;

pub fn cmd_task(store: &Store, command: TaskCommands, out: &Output) -> Result<()> {
    let service = TaskService::new(store);

    match command {
        TaskCommands::Create {
            column_id,
            title,
            description,
        } => {
            let task = service.create_task(column_id, &title, description.as_deref())?;
            out.show(&task, |t| {
                println!(
                    "Created task {} in column {} at position {}",
                    t.id, t.column_id, t.position
                )
            })
        }
        TaskCommands::Show { id } => {
            let Some(task) = service.get_task(id)? else {
                anyhow::bail!("Task not found with ID: {}", id);
            };
            out.show(&task, print_task)
        }
        TaskCommands::List { column_id } => {
            let tasks = service.get_tasks_by_column(column_id)?;
            out.show(&tasks, |tasks| {
                if tasks.is_empty() {
                    println!("No tasks in column {}.", column_id);
                }
                for task in tasks {
                    println!("{}", task_line(task));
                }
            })
        }
        TaskCommands::Update {
            id,
            title,
            description,
        } => {
            service.update_task(id, &title, description.as_deref())?;
            out.done(&format!("Updated task {}", id))
        }
        TaskCommands::Move { id, column_id } => {
            service.move_task(id, column_id)?;
            out.done(&format!("Moved task {} to column {}", id, column_id))
        }
        TaskCommands::Delete { id } => {
            service.delete_task(id)?;
            out.done(&format!("Deleted task {}", id))
        }
        TaskCommands::Priority { id, priority } => {
            service.set_task_priority(id, priority)?;
            out.done(&format!("Set priority of task {} to {}", id, priority))
        }
        TaskCommands::Due { id, date, clear } => {
            let date = if clear { None } else { date };
            service.set_task_due_date(id, date)?;
            match date {
                Some(date) => out.done(&format!("Task {} is due {}", id, date)),
                None => out.done(&format!("Cleared due date of task {}", id)),
            }
        }
    }
}

/// One-line summary used by `task list` and `board show`.
pub fn task_line(task: &Task) -> String {
    let priority = match task.priority {
        Priority::High => console::style(task.priority.as_str()).red().to_string(),
        Priority::Medium => console::style(task.priority.as_str()).yellow().to_string(),
        Priority::Low => console::style(task.priority.as_str()).dim().to_string(),
    };
    let mut line = format!(
        "{:>3}. #{} {} [{}]",
        task.position, task.id, task.title, priority
    );
    if let Some(due) = task.due_date {
        line.push_str(&format!(" due {}", due));
    }
    if !task.tags.is_empty() {
        let names: Vec<&str> = task.tags.iter().map(|t| t.name.as_str()).collect();
        line.push_str(&format!(" {}", console::style(names.join(", ")).dim()));
    }
    line
}

fn print_task(task: &Task) {
    println!("{}", console::style(&task.title).bold());
    println!("ID:          {}", task.id);
    println!("Column:      {}", task.column_id);
    println!("Position:    {}", task.position);
    println!("Priority:    {}", task.priority);
    println!("Created:     {}", task.created_at.format("%Y-%m-%d %H:%M:%S"));
    if let Some(due) = task.due_date {
        println!("Due:         {}", due);
    }
    if !task.tags.is_empty() {
        let names: Vec<&str> = task.tags.iter().map(|t| t.name.as_str()).collect();
        println!("Tags:        {}", names.join(", "));
    }
    if let Some(description) = &task.description {
        println!();
        println!("{}", description);
    }
}
