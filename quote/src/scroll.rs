//! Page scroll lock held while a modal is visible.
//!
//! The lock is page-wide, so it is only ever taken through a [`ScrollGuard`]:
//! whichever path hides the modal (close button, auto-close, teardown), the
//! guard's `Drop` restores scrolling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Suspends and restores scrolling of the enclosing document.
pub trait ScrollLock {
    fn suspend(&self);
    fn restore(&self);
}

/// Holds the page scroll lock until dropped.
#[derive(Debug)]
pub struct ScrollGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollGuard<L> {
    #[must_use]
    pub fn acquire(lock: L) -> Self {
        lock.suspend();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollGuard<L> {
    fn drop(&mut self) {
        self.lock.restore();
    }
}

/// Visibility of one modal, holding the scroll lock exactly while shown.
#[derive(Debug)]
pub struct ModalVisibility<L: ScrollLock + Clone> {
    lock: L,
    guard: Option<ScrollGuard<L>>,
}

impl<L: ScrollLock + Clone> ModalVisibility<L> {
    #[must_use]
    pub fn new(lock: L) -> Self {
        Self { lock, guard: None }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.guard.is_some()
    }

    pub fn show(&mut self) {
        if self.guard.is_none() {
            self.guard = Some(ScrollGuard::acquire(self.lock.clone()));
        }
    }

    pub fn hide(&mut self) {
        self.guard = None;
    }

    pub fn set_visible(&mut self, visible: bool) {
        if visible { self.show() } else { self.hide() }
    }
}
