//! EmailJS request contract and configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Quote requests go straight from the browser to the EmailJS REST endpoint.
//! The server reads the identifiers from its environment and renders them as
//! `<meta>` tags; the hydrated client reads them back with the same
//! [`EmailJsConfig::from_lookup`] used here for the environment.

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fields::FormFields;

pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENV_TO_EMAIL: &str = "QUOTE_TO_EMAIL";
pub const ENV_API_URL: &str = "EMAILJS_API_URL";

pub const META_SERVICE_ID: &str = "emailjs-service-id";
pub const META_TEMPLATE_ID: &str = "emailjs-template-id";
pub const META_PUBLIC_KEY: &str = "emailjs-public-key";
pub const META_TO_EMAIL: &str = "quote-to-email";
pub const META_API_URL: &str = "emailjs-api-url";

/// Identifiers for the EmailJS account that receives quote requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Fixed destination address filled into the template's `to_email`.
    pub to_email: String,
    pub api_url: String,
}

impl EmailJsConfig {
    /// Build from environment variables.
    ///
    /// Required: `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`,
    /// `EMAILJS_PUBLIC_KEY`, `QUOTE_TO_EMAIL`.
    /// Optional: `EMAILJS_API_URL` (default [`DEFAULT_API_URL`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(
            [ENV_SERVICE_ID, ENV_TEMPLATE_ID, ENV_PUBLIC_KEY, ENV_TO_EMAIL, ENV_API_URL],
            |key| std::env::var(key).ok(),
        )
    }

    /// Build from any key/value source. `keys` names the service id, template
    /// id, public key, destination address and API URL, in that order.
    /// Blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent key.
    pub fn from_lookup(keys: [&str; 5], lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let [service_key, template_key, public_key_key, to_key, url_key] = keys;
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &str| get(key).ok_or_else(|| ConfigError::Missing { var: key.to_owned() });

        Ok(Self {
            service_id: require(service_key)?,
            template_id: require(template_key)?,
            public_key: require(public_key_key)?,
            to_email: require(to_key)?,
            api_url: get(url_key).unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
        })
    }

    /// `<meta name=... content=...>` pairs rendered into the page head.
    #[must_use]
    pub fn meta_tags(&self) -> [(&'static str, &str); 5] {
        [
            (META_SERVICE_ID, self.service_id.as_str()),
            (META_TEMPLATE_ID, self.template_id.as_str()),
            (META_PUBLIC_KEY, self.public_key.as_str()),
            (META_TO_EMAIL, self.to_email.as_str()),
            (META_API_URL, self.api_url.as_str()),
        ]
    }

    /// Request body for one quote submission.
    #[must_use]
    pub fn send_request(&self, fields: &FormFields) -> SendRequest {
        SendRequest {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            user_id: self.public_key.clone(),
            template_params: fields.template_params(&self.to_email),
        }
    }
}

/// Variables consumed by the EmailJS template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub to_email: String,
}

/// JSON body of `POST /api/v1.0/email/send`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    pub service_id: String,
    pub template_id: String,
    /// The account's public key.
    pub user_id: String,
    pub template_params: TemplateParams,
}
