//! Shared reactive state provided via Leptos context.

pub mod ui;
