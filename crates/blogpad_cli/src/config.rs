//! Environment-derived runtime settings.
//!
//! # Responsibility
//! - Resolve database path, log directory, and log level once at
//!   startup. The surface is the interactive menu; there are no CLI
//!   flags.

use blogpad_core::default_log_level;
use std::env;
use std::path::PathBuf;

const DB_PATH_VAR: &str = "BLOGPAD_DB";
const LOG_DIR_VAR: &str = "BLOGPAD_LOG_DIR";
const LOG_LEVEL_VAR: &str = "BLOGPAD_LOG_LEVEL";

const DEFAULT_DB_FILE: &str = "blogpad.sqlite3";
const DEFAULT_LOG_DIR: &str = "logs";

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Reads configuration from process environment variables,
    /// falling back to cwd-relative defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            db_path: lookup(DB_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE)),
            log_dir: lookup(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            log_level: lookup(LOG_LEVEL_VAR)
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use blogpad_core::default_log_level;
    use std::path::Path;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = AppConfig::from_lookup(|_| None);

        assert_eq!(config.db_path, Path::new("blogpad.sqlite3"));
        assert_eq!(config.log_dir, Path::new("logs"));
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn environment_overrides_take_precedence() {
        let config = AppConfig::from_lookup(|name| match name {
            "BLOGPAD_DB" => Some("/tmp/blog.db".to_string()),
            "BLOGPAD_LOG_DIR" => Some("/tmp/blog-logs".to_string()),
            "BLOGPAD_LOG_LEVEL" => Some("warn".to_string()),
            _ => None,
        });

        assert_eq!(config.db_path, Path::new("/tmp/blog.db"));
        assert_eq!(config.log_dir, Path::new("/tmp/blog-logs"));
        assert_eq!(config.log_level, "warn");
    }
}
