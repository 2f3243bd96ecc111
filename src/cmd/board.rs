//! `kanban board ...`

use anyhow::Result;

use kanban::service::BoardService;
use kanban::{Board, Store};

use super::Output;
use crate::BoardCommands;

pub fn cmd_board(store: &Store, command: BoardCommands, out: &Output) -> Result<()> {
    let service = BoardService::new(store);

    match command {
        BoardCommands::Create { name } => {
            let board = service.create_board(&name)?;
            out.show(&board, |b| {
                println!("Created board {} '{}'", b.id, b.name);
                for column in &b.columns {
                    println!("  {:>3}  {} ({})", column.position, column.name, column.color);
                }
            })
        }
        BoardCommands::List => {
            let boards = service.get_all_boards()?;
            out.show(&boards, |boards| print_board_table(boards))
        }
        BoardCommands::Show { id } => {
            let Some(board) = service.get_board_snapshot(id)? else {
                anyhow::bail!("Board not found with ID: {}", id);
            };
            out.show(&board, print_board)
        }
        BoardCommands::Rename { id, name } => {
            service.update_board_name(id, &name)?;
            out.done(&format!("Renamed board {} to '{}'", id, name))
        }
        BoardCommands::Delete { id } => {
            service.delete_board(id)?;
            out.done(&format!("Deleted board {}", id))
        }
    }
}

fn print_board_table(boards: &[Board]) {
    if boards.is_empty() {
        println!("No boards yet. Create one with 'kanban board create <name>'.");
        return;
    }
    println!("{:<6} {:<40} Created", "ID", "Name");
    println!("{:<6} {:<40} -------", "------", "-".repeat(40));
    for board in boards {
        println!(
            "{:<6} {:<40} {}",
            board.id,
            board.name,
            board.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

fn print_board(board: &Board) {
    println!();
    println!("{}", console::style(&board.name).bold().cyan());
    println!(
        "{}",
        console::style(format!(
            "board {} · created {}",
            board.id,
            board.created_at.format("%Y-%m-%d %H:%M")
        ))
        .dim()
    );
    for column in &board.columns {
        println!();
        println!(
            "[{}] {} {}",
            column.position,
            console::style(&column.name).bold(),
            console::style(format!("(column {}, {})", column.id, column.color)).dim()
        );
        if column.tasks.is_empty() {
            println!("    {}", console::style("no tasks").dim());
        }
        for task in &column.tasks {
            println!("    {}", super::task::task_line(task));
        }
    }
    println!();
}
