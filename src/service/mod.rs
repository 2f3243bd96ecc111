//! Domain services.
//!
//! Services validate input, check that parent entities exist, and maintain
//! sibling ordering before handing records to the repositories. Every
//! validation failure is raised before the first write.
//!
//! | Service         | Owns                                              |
//! |-----------------|---------------------------------------------------|
//! | `BoardService`  | boards and their three default columns            |
//! | `ColumnService` | columns, appended at `count + 1` within a board   |
//! | `TaskService`   | tasks, appended at `max + 1` within a column      |
//! | `TagService`    | tags and task/tag links                           |

mod board_service;
mod column_service;
mod tag_service;
mod task_service;
pub mod validation;

pub use board_service::{BoardService, DEFAULT_COLUMNS};
pub use column_service::ColumnService;
pub use tag_service::TagService;
pub use task_service::TaskService;

use chrono::{NaiveDateTime, Utc};

/// Timestamp recorded on newly created boards and tasks (UTC, matching the
/// store's `CURRENT_TIMESTAMP` default).
pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
