//! Shortcode configuration.
//!
//! Two layers live here: the attribute resolver that merges caller-supplied
//! shortcode attributes over named defaults, and the optional file-backed
//! configuration read from `~/.config/underscore-pages/config.toml` at
//! startup. If the file doesn't exist, a default configuration with comments
//! is created. Missing fields in the file use default values.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::Deserialize;

use crate::shortcode::Attrs;

pub const DEFAULT_THUMBNAIL_SIZE: &str = "post-thumbnail";
pub const DEFAULT_COL: i64 = 3;
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Built-in default values for the three recognized shortcode attributes.
///
/// The `defaults` hook chain runs over this value before caller attributes
/// are merged on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub id: i64,
    pub size: String,
    pub col: i64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            id: 0,
            size: DEFAULT_THUMBNAIL_SIZE.to_string(),
            col: DEFAULT_COL,
        }
    }
}

/// Fully resolved configuration for one shortcode invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagesConfig {
    pub id: i64,
    pub size: String,
    pub col: i64,
}

/// Merge caller attributes over defaults, key by key.
///
/// Missing attributes fall back to the default silently; unknown attribute
/// names are ignored. `id` and `col` are coerced with [`intval`].
pub fn resolve(attrs: &Attrs, defaults: &Defaults) -> PagesConfig {
    PagesConfig {
        id: attrs.get("id").map(|v| intval(v)).unwrap_or(defaults.id),
        size: attrs
            .get("size")
            .cloned()
            .unwrap_or_else(|| defaults.size.clone()),
        col: attrs.get("col").map(|v| intval(v)).unwrap_or(defaults.col),
    }
}

/// Integer coercion with PHP `intval` semantics: optional sign, longest run
/// of leading digits, everything else is 0.
pub fn intval(s: &str) -> i64 {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

/// File-backed application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Date format for post date lines (chrono strftime syntax).
    pub date_format: String,
    pub defaults: FileDefaults,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileDefaults {
    pub size: String,
    pub col: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            defaults: FileDefaults::default(),
        }
    }
}

impl Default for FileDefaults {
    fn default() -> Self {
        Self {
            size: DEFAULT_THUMBNAIL_SIZE.to_string(),
            col: DEFAULT_COL,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/underscore-pages/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("underscore-pages").join("config.toml"))
    }

    /// The shortcode defaults this configuration carries. The parent id is
    /// contextual and stays at its built-in value here.
    pub fn shortcode_defaults(&self) -> Defaults {
        Defaults {
            id: 0,
            size: self.defaults.size.clone(),
            col: self.defaults.col,
        }
    }

    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# underscore-pages configuration

# Date format for the date line appended to post excerpts.
# Uses chrono strftime syntax.
date_format = "%B %-d, %Y"

# Defaults applied when a [pages] tag omits an attribute.
[defaults]
# Thumbnail size token passed to the thumbnail renderer.
size = "post-thumbnail"

# Column count encoded into the fragment wrapper class.
col = 3
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
