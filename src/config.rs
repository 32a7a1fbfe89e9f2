//! Configuration file handling for howdy.
//!
//! Loads configuration from `<config_dir>/howdy/config.toml` or a custom path.
//! Every key is optional; a missing file means all defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{DEFAULT_CHAR_ASPECT_RATIO, DEFAULT_THRESHOLD, MAX_CELLS};

/// Root URL of the xkcd JSON API.
pub const XKCD_BASE_URL: &str = "https://xkcd.com";

/// Width in characters used when neither `--width` nor `--height` is given.
pub const DEFAULT_WIDTH: u32 = 100;

/// Configuration file structure for howdy.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub xkcd: XkcdConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct XkcdConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout; unset means requests may block indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for XkcdConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub default_width: u32,
    #[serde(default = "default_true")]
    pub dither: bool,
    #[serde(default)]
    pub invert: bool,
    #[serde(default = "default_threshold")]
    pub braille_threshold: u8,
    #[serde(default = "default_char_aspect")]
    pub char_aspect: f32,
    /// Largest output, in character cells, before rendering is refused
    #[serde(default = "default_max_cells")]
    pub max_cells: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            dither: true,
            invert: false,
            braille_threshold: DEFAULT_THRESHOLD,
            char_aspect: DEFAULT_CHAR_ASPECT_RATIO,
            max_cells: MAX_CELLS,
        }
    }
}

fn default_base_url() -> String {
    XKCD_BASE_URL.to_string()
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_true() -> bool {
    true
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

fn default_char_aspect() -> f32 {
    DEFAULT_CHAR_ASPECT_RATIO
}

fn default_max_cells() -> u64 {
    MAX_CELLS
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("howdy").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/howdy/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.xkcd.base_url, XKCD_BASE_URL);
        assert_eq!(config.render.default_width, DEFAULT_WIDTH);
        assert!(config.render.dither);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\ndither = false\ndefault_width = 60").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.render.dither);
        assert_eq!(config.render.default_width, 60);
        assert_eq!(config.render.braille_threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.render.max_cells, MAX_CELLS);
        assert_eq!(config.xkcd, XkcdConfig::default());
    }

    #[test]
    fn test_xkcd_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[xkcd]\nbase_url = \"http://localhost:9999\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.xkcd.base_url, "http://localhost:9999");
        assert_eq!(config.xkcd.timeout_secs, Some(5));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render\ndither = ").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse config file"));
    }

    #[test]
    fn test_default_path_ends_with_howdy_config() {
        assert!(default_path().ends_with("howdy/config.toml"));
    }
}
