#![forbid(unsafe_code)]

//! Top-level error type.

use std::fmt;

use crate::config::ConfigError;
use seqdeck_paging::PagingError;

/// Errors surfaced by the facade.
#[derive(Debug)]
pub enum Error {
    /// Paginator construction failed.
    Paging(PagingError),
    /// Configuration could not be loaded or is invalid.
    Config(ConfigError),
    /// Log subscriber installation failed.
    Logging(String),
}

/// Standard result type for SeqDeck APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paging(err) => write!(f, "paging: {err}"),
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Logging(msg) => write!(f, "logging: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Paging(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

impl From<PagingError> for Error {
    fn from(err: PagingError) -> Self {
        Self::Paging(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
