//! Declarative whitelist configuration.
//!
//! A [`WhitelistConfig`] is plain data that can be written by hand in JSON
//! or YAML, then compiled into a [`ValidatorConfig`]. Compilation is where
//! bad names and regexes are rejected, so a built validator never fails.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pattern::{AttributePattern, PatternError, TagPattern};
use crate::validator::ValidatorConfig;

/// Errors from loading a whitelist config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not `.json`, `.yaml` or `.yml`.
    #[error("Unsupported config format for {}: expected .json, .yaml or .yml", path.display())]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },

    /// JSON content could not be parsed.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML content could not be parsed.
    #[error("Invalid YAML config: {0}")]
    Yaml(String),
}

/// Whitelist as written in a config file.
///
/// ```yaml
/// tags: [a, i, code, strike, strong]
/// tag_patterns: ['</?(em|u)>']
/// attributes: [href, title]
/// attribute_patterns: ['^target="_blank"$']
/// allow_self_closing: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct WhitelistConfig {
    /// Allowed tag names.
    pub tags: Vec<String>,
    /// Allowed tags as regexes, tested against `<name>` and `</name>`.
    pub tag_patterns: Vec<String>,
    /// Allowed attribute names, with any value.
    pub attributes: Vec<String>,
    /// Allowed attributes as regexes, tested against `name="value"`.
    pub attribute_patterns: Vec<String>,
    /// Treat `<name ... />` as self-closing.
    pub allow_self_closing: bool,
}

impl WhitelistConfig {
    /// Parse a JSON config.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] if `content` is not a valid config.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a YAML config.
    ///
    /// # Errors
    /// Returns [`ConfigError::Yaml`] if `content` is not a valid config.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(content).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    /// Read a config file, choosing the format from its extension.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// or does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .map(str::to_ascii_lowercase);
        let is_json = match extension.as_deref() {
            Some("json") => true,
            Some("yaml" | "yml") => false,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_owned(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Compile names and regexes into matchers, preserving order.
    ///
    /// # Errors
    /// Returns the first [`PatternError`] encountered.
    pub fn compile(&self) -> Result<ValidatorConfig, PatternError> {
        let tag_patterns = self
            .tags
            .iter()
            .map(|name| TagPattern::name(name))
            .chain(self.tag_patterns.iter().map(|p| TagPattern::regex(p)))
            .collect::<Result<Vec<_>, _>>()?;
        let attribute_patterns = self
            .attributes
            .iter()
            .map(|name| AttributePattern::name(name))
            .chain(
                self.attribute_patterns
                    .iter()
                    .map(|p| AttributePattern::regex(p)),
            )
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatorConfig::new(tag_patterns, attribute_patterns)
            .with_self_closing(self.allow_self_closing))
    }
}
