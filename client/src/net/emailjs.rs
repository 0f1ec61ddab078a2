//! EmailJS transport for quote requests.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`, configured from the
//! `<meta>` tags the server rendered into the page head.
//! Server-side (SSR): every send fails, since submissions only happen in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Missing configuration, network errors, and non-2xx responses all become
//! [`SubmissionFailed`]; the quote flow treats them identically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use quote_flow::emailjs::{META_API_URL, META_PUBLIC_KEY, META_SERVICE_ID, META_TEMPLATE_ID, META_TO_EMAIL};
use quote_flow::{ConfigError, EmailJsConfig, FormFields, QuoteTransport, SubmissionFailed};

const META_KEYS: [&str; 5] = [META_SERVICE_ID, META_TEMPLATE_ID, META_PUBLIC_KEY, META_TO_EMAIL, META_API_URL];

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn meta_selector(name: &str) -> String {
    format!("meta[name=\"{name}\"]")
}

#[cfg(any(test, feature = "hydrate"))]
fn rejected_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("email service responded {status}")
    } else {
        format!("email service responded {status}: {body}")
    }
}

/// Read the EmailJS configuration rendered into the page head.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] naming the first absent `<meta>` tag; on
/// the server no tags can be read.
pub fn config_from_document() -> Result<EmailJsConfig, ConfigError> {
    EmailJsConfig::from_lookup(META_KEYS, read_meta)
}

fn read_meta(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&meta_selector(name)).ok().flatten())
            .and_then(|el| el.get_attribute("content"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Sends quote requests to the EmailJS REST API.
#[derive(Clone, Debug)]
pub struct EmailJsTransport {
    config: Result<EmailJsConfig, ConfigError>,
}

impl EmailJsTransport {
    pub fn new(config: Result<EmailJsConfig, ConfigError>) -> Self {
        Self { config }
    }

    /// Transport configured from the current page's `<meta>` tags.
    pub fn from_document() -> Self {
        Self::new(config_from_document())
    }

    fn config(&self) -> Result<&EmailJsConfig, SubmissionFailed> {
        self.config.as_ref().map_err(|e| SubmissionFailed::from(e.clone()))
    }
}

impl QuoteTransport for EmailJsTransport {
    async fn send(&self, fields: &FormFields) -> Result<(), SubmissionFailed> {
        let config = self.config()?;
        let body = config.send_request(fields);

        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&config.api_url)
                .json(&body)
                .map_err(|e| SubmissionFailed::new(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmissionFailed::new(e.to_string()))?;
            if !resp.ok() {
                let text = resp.text().await.unwrap_or_default();
                return Err(SubmissionFailed::new(rejected_message(resp.status(), &text)));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(SubmissionFailed::new("not available on server"))
        }
    }
}
