use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use kanban::Priority;
use kanban::config::KanbanConfig;

mod cmd;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(version, about = "Kanban boards, columns and tasks over SQLite")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides kanban.toml and KANBAN_DB)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file. Defaults to ./kanban.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database (and optionally a kanban.toml)
    Init {
        /// Write the effective configuration to ./kanban.toml if none exists
        #[arg(long)]
        write_config: bool,
    },
    /// Manage boards
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },
    /// Manage columns of a board
    Column {
        #[command(subcommand)]
        command: ColumnCommands,
    },
    /// Manage tasks
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
}

#[derive(Subcommand, Clone)]
pub enum BoardCommands {
    /// Create a board with TODO, IN PROGRESS and DONE columns
    Create { name: String },
    /// List boards, newest first
    List,
    /// Show a board with its columns and tasks
    Show { id: i64 },
    Rename { id: i64, name: String },
    Delete { id: i64 },
}

#[derive(Subcommand, Clone)]
pub enum ColumnCommands {
    /// Append a column to a board
    Add {
        board_id: i64,
        name: String,
        /// Hex color (#RRGGBB)
        #[arg(long)]
        color: Option<String>,
    },
    List { board_id: i64 },
    Rename { id: i64, name: String },
    Color { id: i64, color: String },
    Delete { id: i64 },
}

#[derive(Subcommand, Clone)]
pub enum TaskCommands {
    /// Append a task to a column
    Create {
        column_id: i64,
        title: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    Show { id: i64 },
    List { column_id: i64 },
    /// Replace a task's title and description
    Update {
        id: i64,
        title: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Move a task to the end of another column
    Move { id: i64, column_id: i64 },
    Delete { id: i64 },
    /// Set priority: low, medium or high
    Priority { id: i64, priority: Priority },
    /// Set (YYYY-MM-DD) or clear a due date
    Due {
        id: i64,
        #[arg(required_unless_present = "clear")]
        date: Option<NaiveDate>,
        #[arg(long, conflicts_with = "date")]
        clear: bool,
    },
}

#[derive(Subcommand, Clone)]
pub enum TagCommands {
    Create { name: String, color: String },
    List,
    /// Attach a tag to a task
    Attach { task_id: i64, tag_id: i64 },
    /// Detach a tag from a task
    Detach { task_id: i64, tag_id: i64 },
    Delete { id: i64 },
}

fn load_config(cli: &Cli) -> Result<KanbanConfig> {
    let mut config = match &cli.config {
        Some(path) => KanbanConfig::load(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            KanbanConfig::load_or_default(&cwd)?
        }
    };
    config.apply_env(|key| std::env::var(key).ok());
    config.apply_cli(cli.db.clone(), cli.verbose);
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    kanban::logging::init(&config.logging.level)?;

    let out = cmd::Output { json: cli.json };

    match &cli.command {
        Commands::Init { write_config } => cmd::cmd_init(&config, *write_config, &out)?,
        Commands::Board { command } => {
            cmd::with_store(&config, |store| cmd::cmd_board(store, command.clone(), &out))?
        }
        Commands::Column { command } => {
            cmd::with_store(&config, |store| cmd::cmd_column(store, command.clone(), &out))?
        }
        Commands::Task { command } => {
            cmd::with_store(&config, |store| cmd::cmd_task(store, command.clone(), &out))?
        }
        Commands::Tag { command } => {
            cmd::with_store(&config, |store| cmd::cmd_tag(store, command.clone(), &out))?
        }
    }

    Ok(())
}
