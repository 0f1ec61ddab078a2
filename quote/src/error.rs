//! Error types for the quote-request flow.
//!
//! ERROR HANDLING
//! ==============
//! Every outbound failure collapses into [`SubmissionFailed`]; the flow never
//! distinguishes transient from permanent failures. The message is only used
//! for logging. [`SubmitRejected`] covers submits that never reach the wire.

use crate::fields::Field;

/// The outbound call to the email service did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("quote submission failed: {0}")]
pub struct SubmissionFailed(pub String);

impl SubmissionFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

impl From<ConfigError> for SubmissionFailed {
    fn from(err: ConfigError) -> Self {
        Self(err.to_string())
    }
}

/// Form content that does not satisfy the presence/format constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("missing required fields: {}", field_names(.0))]
    Missing(Vec<Field>),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("unknown service: {0}")]
    UnknownService(String),
}

fn field_names(fields: &[Field]) -> String {
    fields.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
}

/// A submit attempt that was refused before any call was issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a quote request is already being sent")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] FieldError),
    #[error("quote form is no longer mounted")]
    Detached,
}

/// EmailJS configuration could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration value: {var}")]
    Missing { var: String },
}
