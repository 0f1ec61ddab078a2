//! Reading-progress math for the top progress bar.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Fraction of the page scrolled past, clamped to `0.0..=1.0`.
///
/// A page no taller than the viewport reports `0.0`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// CSS width for a progress fraction, e.g. `"42.5%"`.
pub fn progress_width(progress: f64) -> String {
    format!("{:.1}%", progress.clamp(0.0, 1.0) * 100.0)
}

/// Current page progress from the browser window. `0.0` outside the browser.
pub fn read_window_progress() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let scroll_top = window.scroll_y().unwrap_or(0.0);
        let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        scroll_progress(scroll_top, height, viewport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
