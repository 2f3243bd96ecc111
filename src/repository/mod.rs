//! Repository layer.
//!
//! Each repository borrows the [`Store`](crate::store::Store) connection and
//! translates between rows and entity records. Mapping from a row to a record
//! lives in one [`FromRow`] impl per entity; the parameters going the other
//! way are built next to the statement that uses them.

mod board_repo;
mod column_repo;
mod tag_repo;
mod task_repo;

use rusqlite::{Connection, Params, Row};

use crate::errors::{Result, StorageContext};

pub use board_repo::BoardRepository;
pub use column_repo::ColumnRepository;
pub use tag_repo::TagRepository;
pub use task_repo::TaskRepository;

/// Pure mapping from a result row to an entity record.
///
/// `COLUMNS` is the select list the mapping expects, in order.
pub(crate) trait FromRow: Sized {
    const COLUMNS: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Run a query expected to yield at most one row.
pub(crate) fn query_one<T: FromRow, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    context: &'static str,
) -> Result<Option<T>> {
    let mut stmt = conn.prepare(sql).storage(context)?;
    let mut rows = stmt.query_map(params, |row| T::from_row(row)).storage(context)?;
    match rows.next() {
        Some(row) => Ok(Some(row.storage(context)?)),
        None => Ok(None),
    }
}

/// Run a query and collect every row.
pub(crate) fn query_all<T: FromRow, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    context: &'static str,
) -> Result<Vec<T>> {
    let mut stmt = conn.prepare(sql).storage(context)?;
    let rows = stmt.query_map(params, |row| T::from_row(row)).storage(context)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row.storage(context)?);
    }
    Ok(out)
}
