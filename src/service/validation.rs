//! Input rules shared by the services.
//!
//! Emptiness is judged on the trimmed value; length limits count characters
//! of the value exactly as given.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::errors::ValidationError;

pub const BOARD_NAME_MAX: usize = 100;
pub const COLUMN_NAME_MAX: usize = 50;
pub const TASK_TITLE_MAX: usize = 200;
pub const TAG_NAME_MAX: usize = 50;

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

fn non_empty_bounded(value: &str, label: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        warn!(field = label, "rejected empty value");
        return Err(ValidationError::new(format!("{} cannot be empty", label)));
    }
    if value.chars().count() > max {
        warn!(field = label, max, "rejected over-long value");
        return Err(ValidationError::new(format!(
            "{} cannot be longer than {} characters",
            label, max
        )));
    }
    Ok(())
}

pub fn board_name(name: &str) -> Result<(), ValidationError> {
    non_empty_bounded(name, "Board name", BOARD_NAME_MAX)
}

pub fn column_name(name: &str) -> Result<(), ValidationError> {
    non_empty_bounded(name, "Column name", COLUMN_NAME_MAX)
}

pub fn task_title(title: &str) -> Result<(), ValidationError> {
    non_empty_bounded(title, "Task title", TASK_TITLE_MAX)
}

pub fn tag_name(name: &str) -> Result<(), ValidationError> {
    non_empty_bounded(name, "Tag name", TAG_NAME_MAX)
}

/// `#RRGGBB`, either case.
pub fn color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_REGEX.is_match(color) {
        Ok(())
    } else {
        warn!(color, "rejected color");
        Err(ValidationError::new("Color must be in hex format (#RRGGBB)"))
    }
}
