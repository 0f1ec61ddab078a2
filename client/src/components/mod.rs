//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections of the single marketing page plus the quote modal. Sections are
//! static; the navbar, hero and contact section only emit "open the quote
//! form" callbacks back to the page.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod our_story;
pub mod process;
pub mod progress_bar;
pub mod quote_form;
pub mod services;
pub mod testimonials;
pub mod whatsapp_button;
