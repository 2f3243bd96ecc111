//! CLI command implementations.
//!
//! Each submodule owns one `Commands` variant:
//!
//! | Module   | Commands handled |
//! |----------|------------------|
//! | `init`   | `Init`           |
//! | `board`  | `Board`          |
//! | `column` | `Column`         |
//! | `task`   | `Task`           |
//! | `tag`    | `Tag`            |

pub mod board;
pub mod column;
pub mod init;
pub mod tag;
pub mod task;

pub use board::cmd_board;
pub use column::cmd_column;
pub use init::cmd_init;
pub use tag::cmd_tag;
pub use task::cmd_task;

use anyhow::Result;
use serde::Serialize;

use kanban::Store;
use kanban::config::KanbanConfig;

/// Output mode shared by every command.
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Print `value` as pretty JSON, or hand it to `human` for text output.
    pub fn show<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }

    /// Report a mutation that has no record to show.
    pub fn done(&self, message: &str) -> Result<()> {
        if self.json {
            let body = serde_json::json!({ "ok": true, "message": message });
            println!("{}", serde_json::to_string_pretty(&body)?);
        } else {
            println!("{}", message);
        }
        Ok(())
    }
}

/// Open the configured store, run `f`, and close the store again.
pub fn with_store<F>(config: &KanbanConfig, f: F) -> Result<()>
where
    F: FnOnce(&Store) -> Result<()>,
{
    let store = Store::open(&config.store_location())?;
    let result = f(&store);
    let closed = store.close();
    result?;
    closed?;
    Ok(())
}
