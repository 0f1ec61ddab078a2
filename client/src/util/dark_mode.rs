//! Theme preference: light or dark.
//!
//! The choice is stored in `localStorage` under `theme` and applied as the
//! `dark` class on `<html>`, which the stylesheet keys its dark palette on.
//! Without a stored choice the system `prefers-color-scheme` wins. SSR
//! renders the light theme; the browser corrects it after hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Value persisted for a theme choice.
fn stored_value(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Interpret a persisted value; unknown values mean "no preference".
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn parse_stored(value: &str) -> Option<bool> {
    match value {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Read the stored theme, falling back to the system preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(dark) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(parse_stored) {
                return dark;
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Toggle the `dark` class on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.class_list().toggle_with_force("dark", dark);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist the new choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, stored_value(next));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = stored_value(next);
    }
    next
}
