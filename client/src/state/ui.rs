//! Local UI chrome state (theme, mobile navigation).
//!
//! DESIGN
//! ======
//! The quote modal's visibility is deliberately not here: it belongs to the
//! home page, which passes it down to the form as a plain signal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the navbar and page sections.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Mobile navigation drawer expanded.
    pub menu_open: bool,
}

impl UiState {
    /// Collapse the mobile drawer after a navigation click.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
