#![forbid(unsafe_code)]

//! Console configuration.
//!
//! Collects the tunables of the grouping and paging views into a single
//! [`ConsoleConfig`] that hosts can load from TOML or JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # seqdeck.toml
//! [paging]
//! window_size = 16
//!
//! [grouping]
//! fallback_label = "Other"
//! singleton_policy = "duplicate"
//! prefix_trim = "dangling_char"
//! fallback_layout = "in_place"
//! ```
//!
//! ```rust,ignore
//! let config = ConsoleConfig::from_toml_file("seqdeck.toml")?;
//! let config = ConsoleConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `ConsoleConfig::default()` matches the built-in behavior: a 16-slot
//! window and [`GroupOptions::default`].

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use seqdeck_panels::GroupOptions;
use seqdeck_paging::{DEFAULT_WINDOW_SIZE, PagingError, WindowPaginator};

// ---------------------------------------------------------------------------
// Top-level ConsoleConfig
// ---------------------------------------------------------------------------

/// Top-level console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ConsoleConfig {
    /// Step view paging.
    pub paging: PagingConfig,
    /// Control-name grouping.
    pub grouping: GroupOptions,
}

/// Step view paging parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct PagingConfig {
    /// Slots per window.
    pub window_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl ConsoleConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.paging.window_size == 0 {
            errors.push("paging.window_size must be > 0".into());
        }
        if self.grouping.fallback_label.trim().is_empty() {
            errors.push("grouping.fallback_label must not be blank".into());
        }
        errors
    }

    /// Return the config if it validates.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Grouping options for [`seqdeck_panels::group_with`].
    #[must_use]
    pub fn to_group_options(&self) -> GroupOptions {
        self.grouping.clone()
    }

    /// Build a paginator over `len` elements with the configured window.
    pub fn paginator(&self, len: usize) -> Result<WindowPaginator, PagingError> {
        WindowPaginator::new(len, self.paging.window_size)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a console configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_component_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.paging.window_size, DEFAULT_WINDOW_SIZE);
        assert_eq!(config.to_group_options(), GroupOptions::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn zero_window_fails_validation() {
        let mut config = ConsoleConfig::default();
        config.paging.window_size = 0;
        config.grouping.fallback_label = "  ".into();
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("window_size"));
        assert!(matches!(
            config.clone().validated(),
            Err(ConfigError::Validation(_))
        ));
        assert_eq!(config.paginator(10), Err(PagingError::ZeroWindow));
    }

    #[test]
    fn paginator_uses_configured_window() {
        let config = ConsoleConfig::default();
        let window = config.paginator(20).unwrap();
        assert_eq!(window.window_size(), 16);
        assert_eq!(window.overflow_padding(), 0);
    }
}
