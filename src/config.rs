//! Configuration file support for rolo.
//!
//! Configuration is loaded from `~/.config/rolo/config.toml` with the following
//! precedence for the roster path:
//! 1. CLI arguments (highest priority)
//! 2. `ROLO_ROSTER` environment variable
//! 3. Configuration file
//! 4. Built-in sample roster (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/rolo/config.toml
//! roster = "~/contacts/team.toml"
//! theme = "dark"
//! ```

#![allow(dead_code)]

use std::path::PathBuf;

use serde::Deserialize;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Path to the contact roster file
    pub roster: Option<PathBuf>,

    /// Theme name to use (reserved for future use)
    pub theme: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rolo")
            .join("config.toml")
    }

    /// Resolve the roster path with precedence: cli_override > env var > config file.
    ///
    /// Returns `None` when nothing is configured; the caller falls back to
    /// the built-in sample roster.
    pub fn roster_path(&self, cli_override: Option<PathBuf>) -> Option<PathBuf> {
        cli_override
            .or_else(|| std::env::var("ROLO_ROSTER").ok().map(PathBuf::from))
            .or_else(|| self.roster.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.roster.is_none());
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            roster = "/home/me/contacts.toml"
            theme = "dark"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.roster, Some(PathBuf::from("/home/me/contacts.toml")));
        assert_eq!(config.theme, Some("dark".to_string()));
    }

    #[test]
    fn test_roster_path_prefers_cli_override() {
        let config = Config {
            roster: Some(PathBuf::from("/from/config.toml")),
            theme: None,
        };

        let resolved = config.roster_path(Some(PathBuf::from("/from/cli.toml")));
        assert_eq!(resolved, Some(PathBuf::from("/from/cli.toml")));
    }

    #[test]
    fn test_roster_path_falls_back_to_config() {
        let config = Config {
            roster: Some(PathBuf::from("/from/config.toml")),
            theme: None,
        };

        let resolved = config.roster_path(None);
        assert_eq!(resolved, Some(PathBuf::from("/from/config.toml")));
    }
}
