//! # Settings
//!
//! Command line flags and layered settings for the `gamestore` binary.
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Settings Resolution (last wins)                      │
//! │                                                                         │
//! │  1. Built-in defaults      database_name = "games_db", max_connections=1│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. TOML file              --config FILE, else <config dir>/gamestore.toml│
//! │       │                    (the default file is optional)               │
//! │       ▼                                                                 │
//! │  3. Environment            GAMESTORE_DATA_DIR, GAMESTORE_DATABASE_NAME, │
//! │       │                    GAMESTORE_MAX_CONNECTIONS, ...               │
//! │       ▼                                                                 │
//! │  4. Command line flags     --data-dir, --database-name, --in-memory ... │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is an embedded SQLite file, so its "address" is a directory
//! plus a database name; there is no user or password.

use clap::Parser;
use config::{Config, Environment, File, FileFormat, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use gamestore_db::DbConfig;

/// Environment variable prefix (`GAMESTORE_DATA_DIR`, ...).
pub const ENV_PREFIX: &str = "GAMESTORE";

/// Settings file looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "gamestore.toml";

pub const DEFAULT_DATABASE_NAME: &str = "games_db";

/// Quiet by default so log lines don't interleave with the menu.
pub const DEFAULT_LOG_FILTER: &str = "warn,gamestore=info,sqlx=warn";

// =============================================================================
// Command Line
// =============================================================================

/// Command line flags. Every flag overrides the matching setting.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "gamestore",
    version,
    about = "Game store inventory and order tracker"
)]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the database file
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Database name; the file is <DATA_DIR>/<NAME>.db
    #[arg(long, value_name = "NAME")]
    pub database_name: Option<String>,

    /// Connection pool size
    #[arg(long, value_name = "N")]
    pub max_connections: Option<u32>,

    /// Log filter, e.g. "debug" or "gamestore_db=trace" (RUST_LOG wins)
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Run against a throwaway in-memory database
    #[arg(long)]
    pub in_memory: bool,
}

// =============================================================================
// Settings
// =============================================================================

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// `None` only when the platform has no data directory and nothing
    /// overrode it.
    pub data_dir: Option<PathBuf>,
    pub database_name: String,
    pub max_connections: u32,
    pub log_filter: String,
    #[serde(default)]
    pub in_memory: bool,
}

impl Settings {
    /// Loads settings from every layer, reading the process environment.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_env(cli, None)
    }

    /// Loads settings with `env` standing in for the process environment
    /// when given.
    pub fn load_with_env(
        cli: &Cli,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let dirs = project_dirs();

        let mut builder = Config::builder()
            .set_default("database_name", DEFAULT_DATABASE_NAME)?
            .set_default("max_connections", 1_i64)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .set_default("in_memory", false)?;

        if let Some(dirs) = &dirs {
            builder = builder.set_default("data_dir", path_value(dirs.data_dir()))?;
        }

        builder = match (&cli.config, &dirs) {
            (Some(path), _) => builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            ),
            (None, Some(dirs)) => builder.add_source(
                File::from(dirs.config_dir().join(CONFIG_FILE_NAME))
                    .format(FileFormat::Toml)
                    .required(false),
            ),
            (None, None) => builder,
        };

        builder = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .set_override_option("data_dir", cli.data_dir.as_deref().map(path_value))?
            .set_override_option("database_name", cli.database_name.clone())?
            .set_override_option("max_connections", cli.max_connections.map(i64::from))?
            .set_override_option("log_filter", cli.log_filter.clone())?;

        if cli.in_memory {
            builder = builder.set_override("in_memory", true)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let name = self.database_name.trim();
        if name.is_empty() {
            return Err(ConfigError::invalid("database_name", "must not be empty"));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ConfigError::invalid(
                "database_name",
                "must be a plain name, not a path",
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::invalid("max_connections", "must be at least 1"));
        }
        Ok(())
    }

    /// Path of the database file: `<data_dir>/<database_name>.db`.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let data_dir = self.data_dir.as_ref().ok_or(ConfigError::NoDataDir)?;
        Ok(data_dir.join(format!("{}.db", self.database_name.trim())))
    }

    /// Store configuration for these settings, creating the data
    /// directory when it is missing.
    pub fn db_config(&self) -> Result<DbConfig, ConfigError> {
        if self.in_memory {
            return Ok(DbConfig::in_memory());
        }

        let path = self.database_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::DataDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        Ok(DbConfig::new(path).max_connections(self.max_connections))
    }

    /// Human-readable store location for the startup log line.
    pub fn store_label(&self) -> String {
        if self.in_memory {
            return "in-memory".to_string();
        }
        match self.database_path() {
            Ok(path) => path.display().to_string(),
            Err(_) => "unresolved".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "gamestore", "gamestore")
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// =============================================================================
// Errors
// =============================================================================

/// Settings errors. All of them stop the process before the menu starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Could not determine a data directory; set GAMESTORE_DATA_DIR or pass --data-dir")]
    NoDataDir,

    #[error("Could not create data directory {}: {source}", .path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    fn invalid(key: &str, reason: &str) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
