//! Quote-request core shared by the server and the browser client.
//!
//! This crate owns the form model, the submission state machine, the EmailJS
//! payload contract, and the scroll-lock guard. It has no browser or runtime
//! dependencies so the whole flow can be exercised natively in tests; the
//! `client` crate plugs in the real transport, timer, and `<body>` lock.

pub mod emailjs;
pub mod error;
pub mod fields;
pub mod flow;
pub mod scroll;
pub mod submit;

pub use emailjs::{EmailJsConfig, SendRequest, TemplateParams};
pub use error::{ConfigError, FieldError, SubmissionFailed, SubmitRejected};
pub use fields::{Field, FormFields, ServiceCategory};
pub use flow::{AUTO_CLOSE_DELAY, AutoClose, QuoteFlow, SubmissionStatus, SubmitTicket};
pub use scroll::{ModalVisibility, ScrollGuard, ScrollLock};
pub use submit::{FlowStore, QuoteTransport, submit_quote};
