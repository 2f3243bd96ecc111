//! Kanban board data layer.
//!
//! Boards own ordered columns, columns own ordered tasks. The services in
//! [`service`] validate input and keep sibling positions in order on top of
//! the SQLite-backed repositories in [`repository`].
//!
//! ```no_run
//! use kanban::service::{BoardService, TaskService};
//! use kanban::store::Store;
//!
//! # fn main() -> kanban::errors::Result<()> {
//! let store = Store::open_path(std::path::Path::new("kanban.db"))?;
//! let board = BoardService::new(&store).create_board("Release 1.0")?;
//! let todo = &board.columns[0];
//! TaskService::new(&store).create_task(todo.id, "Write changelog", None)?;
//! store.close()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

pub use errors::{KanbanError, Result, StorageError, ValidationError};
pub use models::{Board, Column, Priority, Tag, Task};
pub use store::{Store, StoreLocation};
