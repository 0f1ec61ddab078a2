//! Server configuration parsed from environment variables.
//!
//! ERROR HANDLING
//! ==============
//! A malformed `PORT` is fatal. Missing EmailJS settings are not: the site
//! still renders and the quote form reports a failed send until they are set.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;

use quote_flow::EmailJsConfig;
use quote_flow::emailjs::{ENV_API_URL, ENV_PUBLIC_KEY, ENV_SERVICE_ID, ENV_TEMPLATE_ID, ENV_TO_EMAIL};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` when any required EmailJS variable is unset.
    pub emailjs: Option<EmailJsConfig>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`,
    ///   `QUOTE_TO_EMAIL`: all four enable quote delivery
    /// - `EMAILJS_API_URL`: EmailJS send endpoint override
    ///
    /// # Errors
    ///
    /// Returns [`ServerConfigError::InvalidPort`] if `PORT` is not a `u16`.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over any key/value source.
    ///
    /// # Errors
    ///
    /// Returns [`ServerConfigError::InvalidPort`] if `PORT` is not a `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let emailjs = match EmailJsConfig::from_lookup(
            [ENV_SERVICE_ID, ENV_TEMPLATE_ID, ENV_PUBLIC_KEY, ENV_TO_EMAIL, ENV_API_URL],
            &lookup,
        ) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                tracing::warn!(error = %e, "EmailJS not configured; quote requests will fail");
                None
            }
        };
        Ok(Self { port, emailjs })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|source| ServerConfigError::InvalidPort { value: value.to_owned(), source }),
    }
}
