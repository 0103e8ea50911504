//! Per-user YAML configuration.
//!
//! Lives at `~/.rtally/rtally.conf` (`%APPDATA%\rtally\rtally.conf` on
//! Windows) next to the SQLite database. Every field except the database
//! path has a serde default, so older config files keep loading.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_location")]
    pub default_location: String,
    #[serde(default = "default_stake")]
    pub default_stake: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_location() -> String {
    String::new()
}
fn default_stake() -> String {
    "30/10".to_string()
}
fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_location: default_location(),
            default_stake: default_stake(),
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Platform configuration directory: `~/.rtally` or `%APPDATA%\rtally`.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtally")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtally")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtally.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtally.sqlite")
    }

    /// Load the configuration file, or fall back to defaults when absent.
    /// An unreadable or malformed file is surfaced, never papered over.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Resolve a user-supplied database name against the config directory.
    /// Absolute paths are taken as-is.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Seed the config directory, the config file and an empty database.
    /// In test mode the user's config file is never rewritten.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;

        let db_path = match custom_name {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
