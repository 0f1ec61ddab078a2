//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Each one compiles to a no-op (or pure math) outside `hydrate`, so SSR
//! and native tests never touch `web-sys`.

pub mod dark_mode;
pub mod progress;
pub mod scroll_lock;
pub mod whatsapp;
