//! `kanban init`: create the database file and, on request, a config file.

use anyhow::{Context, Result};

use kanban::config::{CONFIG_FILE_NAME, KanbanConfig};
use kanban::{Store, StoreLocation};

use super::Output;

pub fn cmd_init(config: &KanbanConfig, write_config: bool, out: &Output) -> Result<()> {
    let location = config.store_location();
    if let StoreLocation::File(path) = &location {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    Store::open(&location)?.close()?;

    if write_config {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let config_path = cwd.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            eprintln!("{} already exists, leaving it untouched", config_path.display());
        } else {
            config.save(&config_path)?;
            eprintln!("Wrote {}", config_path.display());
        }
    }

    out.done(&format!("Kanban database initialized at {}", location))
}
