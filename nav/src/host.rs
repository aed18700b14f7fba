//! Host-document capabilities behind a trait, so navigation logic never
//! reaches for `window()` directly and tests can run against [`FakeHost`].

use std::cell::{Cell, RefCell};

/// The few things navigation needs from the surrounding document.
pub trait NavHost {
    /// Stop the document behind an open overlay from scrolling. Idempotent.
    fn lock_scroll(&self);
    /// Undo [`NavHost::lock_scroll`]. Idempotent, safe without a prior lock.
    fn unlock_scroll(&self);
    /// Smooth-scroll the element with this id to the top of the viewport.
    /// Returns `false` when the current page has no such element.
    fn scroll_to_id(&self, id: &str) -> bool;
    /// Full document navigation, for URLs that leave this instance.
    fn set_href(&self, url: &str);
}

/// Production implementation on top of the browser document.
#[cfg(feature = "web")]
#[derive(Default)]
pub struct DomHost {
    locked: Cell<bool>,
    /// Inline `overflow` value the body carried before the lock, restored
    /// verbatim on unlock.
    previous_overflow: RefCell<Option<String>>,
}

#[cfg(feature = "web")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

#[cfg(feature = "web")]
impl NavHost for DomHost {
    fn lock_scroll(&self) {
        if self.locked.get() {
            return;
        }
        let Some(body) = body() else { return };
        let style = body.style();
        let previous = style
            .get_property_value("overflow")
            .ok()
            .filter(|value| !value.is_empty());
        if style.set_property("overflow", "hidden").is_ok() {
            *self.previous_overflow.borrow_mut() = previous;
            self.locked.set(true);
        }
    }

    fn unlock_scroll(&self) {
        if !self.locked.get() {
            return;
        }
        if let Some(body) = body() {
            let style = body.style();
            match self.previous_overflow.borrow_mut().take() {
                Some(value) => {
                    let _ = style.set_property("overflow", &value);
                }
                None => {
                    let _ = style.remove_property("overflow");
                }
            }
        }
        self.locked.set(false);
    }

    fn scroll_to_id(&self, id: &str) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Some(element) = document.get_element_by_id(id) else {
            return false;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        opts.set_inline(web_sys::ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }

    fn set_href(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
}

/// Recording host for tests: every call is counted, scroll targets succeed
/// only for ids listed in `present`.
#[derive(Default)]
pub struct FakeHost {
    pub lock_calls: Cell<u32>,
    pub unlock_calls: Cell<u32>,
    pub scrolls: RefCell<Vec<String>>,
    pub hrefs: RefCell<Vec<String>>,
    pub present: RefCell<Vec<String>>,
    locked: Cell<bool>,
}

impl FakeHost {
    /// A host whose current page contains exactly these element ids.
    pub fn with_sections(ids: &[&str]) -> Self {
        let host = Self::default();
        *host.present.borrow_mut() = ids.iter().map(|id| id.to_string()).collect();
        host
    }

    pub fn locked(&self) -> bool {
        self.locked.get()
    }
}

impl NavHost for FakeHost {
    fn lock_scroll(&self) {
        self.lock_calls.set(self.lock_calls.get() + 1);
        self.locked.set(true);
    }

    fn unlock_scroll(&self) {
        self.unlock_calls.set(self.unlock_calls.get() + 1);
        self.locked.set(false);
    }

    fn scroll_to_id(&self, id: &str) -> bool {
        self.scrolls.borrow_mut().push(id.to_string());
        self.present.borrow().iter().any(|p| p == id)
    }

    fn set_href(&self, url: &str) {
        self.hrefs.borrow_mut().push(url.to_string());
    }
}
