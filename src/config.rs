//! Configuration for the Kanban store and CLI.
//!
//! Settings are layered: `kanban.toml` → environment → command line.
//!
//! # Configuration File Format
//!
//! ```toml
//! [database]
//! path = "kanban.db"   # or ":memory:"
//!
//! [logging]
//! level = "warn"       # any tracing EnvFilter directive
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::StoreLocation;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "kanban.toml";

/// Environment variable overriding `database.path`.
pub const DB_ENV_VAR: &str = "KANBAN_DB";

const IN_MEMORY_PATH: &str = ":memory:";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseSection {
    /// SQLite file, or `:memory:` for a throwaway store
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("kanban.db")
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KanbanConfig {
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

impl KanbanConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse kanban.toml")
    }

    /// Load `kanban.toml` from `dir`, or defaults if there is none.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize kanban.toml")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DB_ENV_VAR).filter(|p| !p.trim().is_empty()) {
            self.database.path = PathBuf::from(path);
        }
    }

    /// Apply command-line overrides, which win over file and environment.
    pub fn apply_cli(&mut self, db_path: Option<PathBuf>, verbose: bool) {
        if let Some(path) = db_path {
            self.database.path = path;
        }
        if verbose {
            self.logging.level = "debug".to_string();
        }
    }

    pub fn store_location(&self) -> StoreLocation {
        if self.database.path.as_os_str() == IN_MEMORY_PATH {
            StoreLocation::InMemory
        } else {
            StoreLocation::File(self.database.path.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KanbanConfig::default();
        assert_eq!(config.database.path, PathBuf::from("kanban.db"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(
            config.store_location(),
            StoreLocation::File(PathBuf::from("kanban.db"))
        );
    }

    #[test]
    fn test_parse_partial_file_fills_defaults() -> Result<()> {
        let config = KanbanConfig::parse("[database]\npath = \"boards.db\"\n")?;
        assert_eq!(config.database.path, PathBuf::from("boards.db"));
        assert_eq!(config.logging.level, "warn");

        let empty = KanbanConfig::parse("")?;
        assert_eq!(empty, KanbanConfig::default());
        Ok(())
    }

    #[test]
    fn test_parse_rejects_invalid_toml() {
        assert!(KanbanConfig::parse("[database\npath = 1").is_err());
    }

    #[test]
    fn test_in_memory_location() -> Result<()> {
        let config = KanbanConfig::parse("[database]\npath = \":memory:\"\n")?;
        assert_eq!(config.store_location(), StoreLocation::InMemory);
        Ok(())
    }

    #[test]
    fn test_layering_file_then_env_then_cli() {
        let mut config = KanbanConfig::default();

        config.apply_env(|key| (key == DB_ENV_VAR).then(|| "/env/kanban.db".to_string()));
        assert_eq!(config.database.path, PathBuf::from("/env/kanban.db"));

        config.apply_cli(Some(PathBuf::from("/cli/kanban.db")), true);
        assert_eq!(config.database.path, PathBuf::from("/cli/kanban.db"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_blank_env_value_is_ignored() {
        let mut config = KanbanConfig::default();
        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config.database.path, PathBuf::from("kanban.db"));

        config.apply_cli(None, false);
        assert_eq!(config, KanbanConfig::default());
    }

    #[test]
    fn test_save_and_load_or_default() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert_eq!(KanbanConfig::load_or_default(dir.path())?, KanbanConfig::default());

        let mut config = KanbanConfig::default();
        config.database.path = PathBuf::from("team.db");
        config.logging.level = "info".to_string();
        config.save(&dir.path().join(CONFIG_FILE_NAME))?;

        assert_eq!(KanbanConfig::load_or_default(dir.path())?, config);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = KanbanConfig::load(Path::new("/definitely/not/here/kanban.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
