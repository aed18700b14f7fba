//! Full-viewport menu state: open/close with a document scroll lock, plus
//! the timing helpers the themes animate their menu items with.

use std::rc::Rc;

use leptos::prelude::{Get, GetUntracked, LocalStorage, RwSignal, Set, StoredValue, WithValue};

use crate::host::NavHost;

/// Gap between one menu item's entrance and the next, in ms.
pub const ITEM_STAGGER_MS: u32 = 60;

/// Entrance delay for the item at `index`. Strictly increasing, so an item
/// never becomes visible before the one above it.
pub fn entrance_delay_ms(index: usize) -> u32 {
    index as u32 * ITEM_STAGGER_MS
}

/// State of the full-viewport menu. One per mounted instance; cheap to copy
/// into any closure that needs it.
///
/// Opening locks document scroll through the host, closing releases it.
/// Both directions are idempotent, and a route change may force the menu
/// shut without its exit animation.
#[derive(Clone, Copy)]
pub struct OverlayMenu {
    shown: RwSignal<bool>,
    /// Set while a force-close is applied; the panel skips its exit
    /// transition for exactly that close.
    instant: RwSignal<bool>,
    host: StoredValue<Rc<dyn NavHost>, LocalStorage>,
}

impl OverlayMenu {
    pub(crate) fn new(host: Rc<dyn NavHost>) -> Self {
        Self {
            shown: RwSignal::new(false),
            instant: RwSignal::new(false),
            host: StoredValue::new_local(host),
        }
    }

    /// Reactive in a tracking context, plain read otherwise.
    pub fn is_open(&self) -> bool {
        self.shown.get()
    }

    /// Whether the panel should play its exit transition. Only a
    /// [`OverlayMenu::force_close`] turns this off, and the next open
    /// restores it.
    pub fn animate_exit(&self) -> bool {
        !self.instant.get()
    }

    pub fn open(&self) {
        if self.shown.get_untracked() {
            return;
        }
        self.instant.set(false);
        self.shown.set(true);
        self.host.with_value(|host| host.lock_scroll());
    }

    pub fn close(&self) {
        if !self.shown.get_untracked() {
            return;
        }
        self.instant.set(false);
        self.shown.set(false);
        self.host.with_value(|host| host.unlock_scroll());
    }

    /// Synchronous close on route changes: no exit animation, scroll lock
    /// released before the new page renders.
    pub fn force_close(&self) {
        if !self.shown.get_untracked() {
            return;
        }
        self.instant.set(true);
        self.shown.set(false);
        self.host.with_value(|host| host.unlock_scroll());
    }

    pub fn toggle(&self) {
        if self.shown.get_untracked() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Teardown path: whatever state the menu is in, the document must not
    /// stay locked after the owning component unmounts.
    pub(crate) fn release(&self) {
        self.host.with_value(|host| host.unlock_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FakeHost;

    fn menu() -> (OverlayMenu, Rc<FakeHost>) {
        let host = Rc::new(FakeHost::default());
        (OverlayMenu::new(host.clone()), host)
    }

    #[test]
    fn open_locks_and_close_releases() {
        let (menu, host) = menu();
        assert!(!menu.is_open());

        menu.open();
        assert!(menu.is_open());
        assert!(host.locked());

        menu.close();
        assert!(!menu.is_open());
        assert!(!host.locked());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let (menu, host) = menu();
        menu.open();
        menu.open();
        assert_eq!(host.lock_calls.get(), 1);

        menu.close();
        menu.close();
        assert_eq!(host.unlock_calls.get(), 1);
    }

    #[test]
    fn close_without_open_does_nothing() {
        let (menu, host) = menu();
        menu.close();
        assert_eq!(host.unlock_calls.get(), 0);
    }

    #[test]
    fn force_close_skips_the_exit_animation_once() {
        let (menu, host) = menu();
        menu.open();
        assert!(menu.animate_exit());

        menu.force_close();
        assert!(!menu.is_open());
        assert!(!menu.animate_exit());
        assert!(!host.locked());

        menu.open();
        assert!(menu.animate_exit());
    }

    #[test]
    fn toggle_flips_the_state() {
        let (menu, host) = menu();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        assert!(!host.locked());
    }

    #[test]
    fn release_frees_the_lock_even_while_open() {
        let (menu, host) = menu();
        menu.open();
        menu.release();
        assert!(!host.locked());
    }

    #[test]
    fn entrance_delays_grow_strictly() {
        assert_eq!(entrance_delay_ms(0), 0);
        for index in 1..8 {
            assert!(entrance_delay_ms(index) > entrance_delay_ms(index - 1));
        }
    }
}
