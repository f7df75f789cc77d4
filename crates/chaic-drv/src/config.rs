//! Configuration for the chaic driver.
//!
//! Settings come from an optional `chaic.toml`:
//!
//! ```toml
//! [lexer]
//! max_literal_len = 1024
//!
//! [output]
//! emit = "list"
//! ```
//!
//! Every field has a default, and command-line options override the file.

use std::path::{Path, PathBuf};

use chaic_lex::LexerConfig;
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DriverError, Result};
use crate::render::EmitFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "chaic.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-specific configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Token rendering format.
    #[serde(default)]
    pub emit: EmitFormat,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/chaic`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Applies command-line overrides.
    pub fn apply_overrides(&mut self, emit: Option<EmitFormat>, max_literal_len: Option<usize>) {
        if let Some(emit) = emit {
            self.output.emit = emit;
        }
        if let Some(max_literal_len) = max_literal_len {
            self.lexer.max_literal_len = max_literal_len;
        }
    }

    /// Rejects values the lexer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.lexer.max_literal_len == 0 {
            return Err(DriverError::Config(
                "max_literal_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("chaic").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("chaic").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.lexer.max_literal_len, 1024);
        assert_eq!(config.output.emit, EmitFormat::List);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_file() {
        let config = Config::from_toml("[lexer]\nmax_literal_len = 64\n\n[output]\nemit = \"json\"\n")
            .unwrap();
        assert_eq!(config.lexer.max_literal_len, 64);
        assert_eq!(config.output.emit, EmitFormat::Json);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());

        let config = Config::from_toml("[output]\nemit = \"pretty\"\n").unwrap();
        assert_eq!(config.lexer, LexerConfig::default());
        assert_eq!(config.output.emit, EmitFormat::Pretty);

        let config = Config::from_toml("[lexer]\n").unwrap();
        assert_eq!(config.lexer.max_literal_len, 1024);
    }

    #[test]
    fn test_unknown_emit_format_is_rejected() {
        let err = Config::from_toml("[output]\nemit = \"xml\"\n").unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(Some(EmitFormat::None), None);
        assert_eq!(config.output.emit, EmitFormat::None);
        assert_eq!(config.lexer.max_literal_len, 1024);

        config.apply_overrides(None, Some(16));
        assert_eq!(config.output.emit, EmitFormat::None);
        assert_eq!(config.lexer.max_literal_len, 16);
    }

    #[test]
    fn test_zero_literal_limit_is_invalid() {
        let mut config = Config::default();
        config.apply_overrides(None, Some(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let mut original = Config::default();
        original.apply_overrides(Some(EmitFormat::Pretty), Some(99));
        std::fs::write(&config_path, toml::to_string(&original).unwrap()).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/chaic.toml"));
        assert!(matches!(result, Err(DriverError::Config(_))));
    }
}
