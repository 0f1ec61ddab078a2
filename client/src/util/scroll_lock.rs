//! `<body>` scroll lock used by modals.
//!
//! Implements [`quote_flow::ScrollLock`] by setting `overflow: hidden` on the
//! document body and removing the inline property again on restore, so any
//! stylesheet value comes back untouched.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

use quote_flow::ScrollLock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn suspend(&self) {
        set_body_overflow(Some("hidden"));
    }

    fn restore(&self) {
        set_body_overflow(None);
    }
}

fn set_body_overflow(value: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let _ = match value {
            Some(v) => style.set_property("overflow", v),
            None => style.remove_property("overflow").map(|_| ()),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}
