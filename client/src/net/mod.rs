//! Outbound network calls made from the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no API of its own; `emailjs` talks directly to the
//! transactional-email service on behalf of the quote form.

pub mod emailjs;
