/// Environment configuration loader.
///
/// All settings come from the environment (a `.env` file is honored if
/// present). Everything is required — a missing variable stops the run
/// before any connection is attempted, with a message naming the variable,
/// rather than proceeding with empty values.

use std::env;

/// Settings for one notification run, loaded once at process entry and
/// passed explicitly into the reader and notifier.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database host (`DB_SERVER`).
    pub db_server: String,
    /// Database name (`DB_DATABASE`).
    pub db_database: String,
    /// Database user (`DB_USERNAME`).
    pub db_username: String,
    /// Database password (`DB_PASSWORD`).
    pub db_password: String,
    /// Base URL of the monitoring API (`API_BASE_URL`), without a
    /// trailing slash.
    pub api_base_url: String,
}

/// Configuration validation error
#[derive(Debug)]
pub enum ConfigError {
    /// A required environment variable is not set or is empty.
    MissingVariable(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVariable(name) => {
                write!(f, "Required environment variable {} is not set.\n\n", name)?;
                write!(f, "  Required Setup:\n")?;
                write!(f, "  1. Copy .env.example to .env: cp .env.example .env\n")?;
                write!(
                    f,
                    "  2. Edit .env and set DB_SERVER, DB_DATABASE, DB_USERNAME, DB_PASSWORD and API_BASE_URL"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first if one exists (real environment variables win).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup. Split out
    /// from `from_env` so tests can inject settings without touching the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(ConfigError::MissingVariable(name)),
            }
        };

        Ok(Config {
            db_server: require("DB_SERVER")?,
            db_database: require("DB_DATABASE")?,
            db_username: require("DB_USERNAME")?,
            db_password: require("DB_PASSWORD")?,
            api_base_url: require("API_BASE_URL")?.trim_end_matches('/').to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
