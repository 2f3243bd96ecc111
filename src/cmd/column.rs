//! `kanban column ...`

use anyhow::Result;

use kanban::service::ColumnService;
use kanban::{Column, Store};

use super::Output;
use crate::ColumnCommands;

pub fn cmd_column(store: &Store, command: ColumnCommands, out: &Output) -> Result<()> {
    let service = ColumnService::new(store);

    match command {
        ColumnCommands::Add {
            board_id,
            name,
            color,
        } => {
            let column = service.add_column(board_id, &name, color.as_deref())?;
            out.show(&column, |c| {
                println!(
                    "Added column {} '{}' at position {} ({})",
                    c.id, c.name, c.position, c.color
                )
            })
        }
        ColumnCommands::List { board_id } => {
            let columns = service.get_columns_by_board(board_id)?;
            out.show(&columns, |columns| print_columns(columns))
        }
        ColumnCommands::Rename { id, name } => {
            service.update_column_name(id, &name)?;
            out.done(&format!("Renamed column {} to '{}'", id, name))
        }
        ColumnCommands::Color { id, color } => {
            service.update_column_color(id, &color)?;
            out.done(&format!("Set color of column {} to {}", id, color))
        }
        ColumnCommands::Delete { id } => {
            service.delete_column(id)?;
            out.done(&format!("Deleted column {}", id))
        }
    }
}

fn print_columns(columns: &[Column]) {
    if columns.is_empty() {
        println!("No columns.");
        return;
    }
    println!("{:<6} {:<8} {:<9} Name", "ID", "Position", "Color");
    for column in columns {
        println!(
            "{:<6} {:<8} {:<9} {}",
            column.id, column.position, column.color, column.name
        );
    }
}
