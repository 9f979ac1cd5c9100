//! Ambient "current page" binding.
//!
//! The renderer threads the page explicitly through every derivation step;
//! this thread-local exists for embedder helpers that need to reference the
//! page being rendered without parameter threading, and it seeds the default
//! `id` attribute. The guard restores the previous binding on drop — not an
//! empty default — so nested renders observe their own context correctly.

use std::cell::RefCell;

use crate::domain::Page;

thread_local! {
    static CURRENT: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// RAII scope for the ambient current page.
pub struct CurrentPage {
    prev: Option<Page>,
}

impl CurrentPage {
    /// Bind `page` as the current page until the guard drops.
    pub fn enter(page: &Page) -> Self {
        let prev = CURRENT.with(|c| c.replace(Some(page.clone())));
        Self { prev }
    }
}

impl Drop for CurrentPage {
    fn drop(&mut self) {
        let prev = self.prev.take();
        CURRENT.with(|c| {
            *c.borrow_mut() = prev;
        });
    }
}

/// The page currently being rendered on this thread, if any.
pub fn current_page() -> Option<Page> {
    CURRENT.with(|c| c.borrow().clone())
}

pub fn current_page_id() -> Option<i64> {
    CURRENT.with(|c| c.borrow().as_ref().map(|p| p.id))
}
