//! Session configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for one window session
///
/// The viewer binaries construct this in code (titles, sizes and asset
/// paths are fixed at compile time), but a session can also be described
/// by a TOML file via [`SessionConfig::load_from_file`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Whether to initialize the PNG decoding extension
    pub png_support: bool,

    /// Whether loaded assets are converted to the window surface's pixel
    /// format at load time
    pub optimize_surfaces: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            title: "Blit Engine Session".to_string(),
            width: 640,
            height: 480,
            png_support: false,
            optimize_surfaces: false,
        }
    }
}

impl SessionConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing fields fall back to their defaults.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}
