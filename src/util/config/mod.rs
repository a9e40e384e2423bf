//! lexlib configuration
//!
//! Library settings only: the fallback normalization and whether the
//! built-in table is seeded. Lexeme definitions are registered in code.
//!
//! # Format
//!
//! ```text
//! (
//!     normalize: (trim: true, collapse_whitespace: true, lowercase: false),
//!     library: (builtins: true),
//! )
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lexlib::util::config::parse_config;
//!
//! let config = parse_config("(library: (builtins: false))").unwrap();
//! assert!(!config.library.builtins);
//! assert!(config.normalize.trim);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "LEXLIB_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Fallback normalization settings
    #[serde(default)]
    pub normalize: NormalizeConfig,
    /// Library seeding settings
    #[serde(default)]
    pub library: SeedConfig,
}

/// Fallback normalization configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Strip surrounding whitespace
    #[serde(default = "default_true")]
    pub trim: bool,
    /// Collapse inner whitespace runs to one space
    #[serde(default = "default_true")]
    pub collapse_whitespace: bool,
    /// Lowercase symbols
    #[serde(default)]
    pub lowercase: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            trim: true,
            collapse_whitespace: true,
            lowercase: false,
        }
    }
}

/// Library seeding configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedConfig {
    /// Register the built-in C math table
    #[serde(default = "default_true")]
    pub builtins: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { builtins: true }
    }
}

/// Config file path from `LEXLIB_CONFIG`, if set
pub fn env_config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).map(PathBuf::from)
}

/// Parse a RON config document
pub fn parse_config(content: &str) -> Result<LibraryConfig, ConfigError> {
    ron::from_str(content).map_err(ConfigError::Parse)
}

/// Load a config file
/// Returns the default config if the file doesn't exist
pub fn load_config(path: &Path) -> Result<LibraryConfig, ConfigError> {
    if !path.exists() {
        return Ok(LibraryConfig::default());
    }
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Render a config as pretty RON
pub fn render_config(config: &LibraryConfig) -> Result<String, ConfigError> {
    ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::default())
        .map_err(ConfigError::Serialize)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(ron::error::SpannedError),
    #[error("Config serialize error: {0}")]
    Serialize(ron::Error),
}
