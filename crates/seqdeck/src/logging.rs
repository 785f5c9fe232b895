#![forbid(unsafe_code)]

//! JSON log output for console hosts.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Install a global JSON subscriber.
///
/// The filter comes from `RUST_LOG` when set, else from `default_filter`
/// (for example `"seqdeck=debug,seqdeck_paging=debug"`).
///
/// # Errors
///
/// Returns [`Error::Logging`] when the filter does not parse or a global
/// subscriber is already installed.
pub fn init_json_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|err| Error::Logging(err.to_string()))?,
    };
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}
