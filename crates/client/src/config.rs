//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Errors raised while reading configuration values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} (expected true/false)")]
    InvalidValue { key: &'static str, value: String },
}

/// Arena client configuration.
///
/// Gameplay is fixed; these settings only cover how the binary behaves
/// around the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Wait for a line on stdin before exiting.
    pub pause_on_exit: bool,
    /// Directory for `arena.log`. `None` uses the platform cache directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            pause_on_exit: true,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    pub const PAUSE_ON_EXIT_VAR: &'static str = "ARENA_PAUSE_ON_EXIT";
    pub const LOG_DIR_VAR: &'static str = "ARENA_LOG_DIR";

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_PAUSE_ON_EXIT` - Wait for Enter before exiting (default: true)
    /// - `ARENA_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::PAUSE_ON_EXIT_VAR) {
            config.pause_on_exit = parse_bool(&raw).ok_or(ConfigError::InvalidValue {
                key: Self::PAUSE_ON_EXIT_VAR,
                value: raw,
            })?;
        }

        if let Some(dir) = lookup(Self::LOG_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Log directory to use, falling back to the platform default.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(crate::logging::default_log_dir)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
