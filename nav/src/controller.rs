//! Composition root: one [`NavContext`] per mounted instance ties the
//! mount resolver, scroll tracking, overlay menu and click handling
//! together, and hands the bundle out through context.

use std::rc::Rc;

use leptos::prelude::Effect;
use leptos::prelude::Get;
use leptos::prelude::GetUntracked;
use leptos::prelude::LocalStorage;
use leptos::prelude::Memo;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::StoredValue;
use leptos::prelude::WithValue;
use leptos::prelude::expect_context;
use leptos::prelude::on_cleanup;
use leptos::prelude::provide_context;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;
use leptos_use::use_window_scroll;

#[cfg(feature = "web")]
use crate::host::DomHost;
use crate::host::NavHost;
use crate::items::{NavConfig, NavItem, NavTarget};
use crate::mount::MountContext;
use crate::overlay::OverlayMenu;
use crate::scroll;

/// Everything a theme's components need to render and drive navigation.
/// `Copy`, so closures can capture it freely.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub mount: MountContext,
    pub config: NavConfig,
    pub overlay: OverlayMenu,
    /// Id of the home-page section the reader is currently in, `None`
    /// while tracking is inactive.
    pub active_section: RwSignal<Option<&'static str>>,
    /// Whether the page is scrolled past the theme's header threshold.
    pub scrolled: Memo<bool>,
    /// Section ids currently mounted, in document order.
    pub(crate) registry: RwSignal<Vec<&'static str>>,
    /// Section queued for a scroll once the home page has it on screen.
    pub(crate) pending_section: RwSignal<Option<&'static str>>,
    pub(crate) host: StoredValue<Rc<dyn NavHost>, LocalStorage>,
    pub(crate) pathname: Memo<String>,
    pub(crate) hash: Memo<String>,
}

/// Install navigation for this instance. Call once, inside the router and
/// above every component that uses [`use_nav`].
pub fn provide_nav(mount: MountContext, config: NavConfig) -> NavContext {
    #[cfg(feature = "web")]
    let host: Rc<dyn NavHost> = Rc::new(DomHost::default());
    #[cfg(not(feature = "web"))]
    let host: Rc<dyn NavHost> = Rc::new(crate::host::FakeHost::default());
    provide_nav_with_host(mount, config, host)
}

/// [`provide_nav`] with an explicit host, which is how tests substitute a
/// recording fake for the browser document.
pub fn provide_nav_with_host(
    mount: MountContext,
    config: NavConfig,
    host: Rc<dyn NavHost>,
) -> NavContext {
    let location = use_location();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > config.scrolled_after_px);

    let ctx = NavContext {
        mount,
        config,
        overlay: OverlayMenu::new(host.clone()),
        active_section: RwSignal::new(None),
        scrolled,
        registry: RwSignal::new(Vec::new()),
        pending_section: RwSignal::new(None),
        host: StoredValue::new_local(host),
        pathname: location.pathname,
        hash: location.hash,
    };

    // a route change while the menu is open closes it before the new page
    // renders, without the exit animation
    Effect::new(move |previous: Option<String>| {
        let path = ctx.pathname.get();
        if previous.is_some_and(|prev| prev != path) {
            ctx.overlay.force_close();
        }
        path
    });

    // the document must never stay scroll-locked behind a gone instance
    on_cleanup(move || ctx.overlay.release());

    provide_context(ctx);
    ctx
}

pub fn use_nav() -> NavContext {
    expect_context::<NavContext>()
}

impl NavContext {
    /// Concrete `href` for a nav item on this mount.
    pub fn href_for(&self, item: &NavItem) -> String {
        self.mount.resolve(&item.logical_href())
    }

    /// Mount-independent form of the current route. Reactive.
    pub fn logical_route(&self) -> String {
        let pathname = self.pathname.get();
        self.mount.logical_path(&pathname).to_string()
    }

    /// Whether `item` should render highlighted right now. Reactive.
    pub fn is_active(&self, item: &NavItem) -> bool {
        is_item_active(item, self.active_section.get(), &self.logical_route())
    }

    /// Click handling for a nav item: the menu closes first, then the item
    /// either scrolls or navigates depending on its target and the page
    /// the click happened on.
    pub fn select(&self, item: NavItem, navigate: &impl Fn(&str, NavigateOptions)) {
        self.overlay.close();
        match item.target {
            NavTarget::Section(id) => scroll::scroll_or_defer(self, id, navigate),
            NavTarget::Route(path) => self.navigate_to(path, navigate),
        }
    }

    /// Resolve a logical path against this mount, then [`Self::navigate_url`].
    pub fn navigate_to(&self, logical: &str, navigate: &impl Fn(&str, NavigateOptions)) {
        self.navigate_url(&self.mount.resolve(logical), navigate);
    }

    /// Follow a concrete URL: a router transition when it stays inside this
    /// mount, a full document load otherwise. A `#fragment` naming a known
    /// section is queued so the home page scrolls to it after the
    /// transition settles.
    pub fn navigate_url(&self, url: &str, navigate: &impl Fn(&str, NavigateOptions)) {
        if !self.mount.is_internal(url) {
            self.host.with_value(|host| host.set_href(url));
            return;
        }
        let fragment_target = url
            .split_once('#')
            .and_then(|(_, fragment)| self.section_id_for(fragment));
        if let Some(id) = fragment_target {
            self.pending_section.set(Some(id));
        }
        navigate(
            url,
            NavigateOptions {
                resolve: false,
                scroll: fragment_target.is_none(),
                ..Default::default()
            },
        );
    }

    /// Maps a runtime element id back to a configured section target.
    pub(crate) fn section_id_for(&self, id: &str) -> Option<&'static str> {
        self.config.items.iter().find_map(|item| match item.target {
            NavTarget::Section(section) if section == id => Some(section),
            _ => None,
        })
    }

    pub(crate) fn on_home(&self) -> bool {
        self.mount.is_home(&self.pathname.get_untracked())
    }
}

/// Highlight rule for one item. Section items are active while their
/// section owns the scroll-spy highlight; route items while the logical
/// route sits at or under their target, so `/portfolio` stays lit on
/// `/portfolio/orbit-cms`.
pub fn is_item_active(item: &NavItem, active_section: Option<&str>, logical_route: &str) -> bool {
    match item.target {
        NavTarget::Section(id) => active_section == Some(id),
        NavTarget::Route(path) => route_matches(path, logical_route),
    }
}

fn route_matches(target: &str, current: &str) -> bool {
    if target == "/" {
        return current == "/";
    }
    current == target
        || current
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FakeHost;
    use crate::spy::ScrollSpyConfig;
    use std::cell::RefCell;

    const ITEMS: &[NavItem] = &[
        NavItem::section("home", "hero"),
        NavItem::section("about", "about"),
        NavItem::route("portfolio", "/portfolio"),
        NavItem::section("contact", "contact"),
    ];

    fn test_ctx(base: &'static str, path: &str, host: Rc<FakeHost>) -> NavContext {
        let path = path.to_string();
        let config = NavConfig {
            items: ITEMS,
            spy: ScrollSpyConfig::default(),
            scrolled_after_px: 50.0,
        };
        NavContext {
            mount: MountContext::new(base),
            config,
            overlay: OverlayMenu::new(host.clone()),
            active_section: RwSignal::new(None),
            scrolled: Memo::new(|_| false),
            registry: RwSignal::new(Vec::new()),
            pending_section: RwSignal::new(None),
            host: StoredValue::new_local(host),
            pathname: Memo::new(move |_| path.clone()),
            hash: Memo::new(|_| String::new()),
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str, NavigateOptions)) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let record = move |url: &str, _: NavigateOptions| sink.borrow_mut().push(url.to_string());
        (log, record)
    }

    fn item(key: &str) -> NavItem {
        *ITEMS.iter().find(|item| item.key == key).unwrap()
    }

    #[test]
    fn section_click_on_home_scrolls_in_place() {
        let host = Rc::new(FakeHost::with_sections(&["hero", "about", "contact"]));
        let ctx = test_ctx("/v6", "/v6/", host.clone());
        let (log, navigate) = recorder();

        assert_eq!(ctx.href_for(&item("contact")), "/v6/#contact");
        ctx.select(item("contact"), &navigate);

        assert_eq!(*host.scrolls.borrow(), vec!["contact"]);
        assert!(log.borrow().is_empty());
        assert_eq!(ctx.pending_section.get_untracked(), None);
    }

    #[test]
    fn section_click_elsewhere_rides_home() {
        let host = Rc::new(FakeHost::default());
        let ctx = test_ctx("/v11", "/v11/portfolio/orbit-cms", host.clone());
        let (log, navigate) = recorder();

        ctx.select(item("contact"), &navigate);

        assert_eq!(*log.borrow(), vec!["/v11/#contact"]);
        assert_eq!(ctx.pending_section.get_untracked(), Some("contact"));
        assert!(host.hrefs.borrow().is_empty());
    }

    #[test]
    fn section_click_with_no_target_on_home_degrades_silently() {
        let host = Rc::new(FakeHost::with_sections(&["hero"]));
        let ctx = test_ctx("/v6", "/v6/", host.clone());
        let (log, navigate) = recorder();

        ctx.select(item("contact"), &navigate);

        assert!(log.borrow().is_empty());
        assert_eq!(ctx.pending_section.get_untracked(), None);
    }

    #[test]
    fn reselecting_the_active_section_is_a_noop() {
        let host = Rc::new(FakeHost::with_sections(&["contact"]));
        let ctx = test_ctx("", "/", host.clone());
        let (log, navigate) = recorder();

        ctx.select(item("contact"), &navigate);
        ctx.active_section.set(Some("contact"));
        ctx.select(item("contact"), &navigate);

        assert_eq!(*host.scrolls.borrow(), vec!["contact"]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn route_click_navigates_client_side() {
        let host = Rc::new(FakeHost::default());
        let ctx = test_ctx("/v6", "/v6/", host.clone());
        let (log, navigate) = recorder();

        ctx.select(item("portfolio"), &navigate);

        assert_eq!(*log.borrow(), vec!["/v6/portfolio"]);
        assert!(host.scrolls.borrow().is_empty());
        assert!(host.hrefs.borrow().is_empty());
    }

    #[test]
    fn selecting_always_closes_the_menu_first() {
        let host = Rc::new(FakeHost::with_sections(&["about"]));
        let ctx = test_ctx("", "/", host.clone());
        let (_, navigate) = recorder();

        ctx.overlay.open();
        assert!(host.locked());
        ctx.select(item("about"), &navigate);

        assert!(!ctx.overlay.is_open());
        assert!(!host.locked());
    }

    #[test]
    fn urls_outside_the_mount_are_full_loads() {
        let host = Rc::new(FakeHost::default());
        let ctx = test_ctx("/v6", "/v6/", host.clone());
        let (log, navigate) = recorder();

        ctx.navigate_url("https://github.com/example", &navigate);
        ctx.navigate_url("/v12/", &navigate);

        assert!(log.borrow().is_empty());
        assert_eq!(
            *host.hrefs.borrow(),
            vec!["https://github.com/example", "/v12/"]
        );
    }

    #[test]
    fn deep_link_fragments_queue_a_pending_section() {
        let host = Rc::new(FakeHost::default());
        let ctx = test_ctx("/v6", "/v6/portfolio", host);
        let (log, navigate) = recorder();

        ctx.navigate_url("/v6/#about", &navigate);

        assert_eq!(ctx.pending_section.get_untracked(), Some("about"));
        assert_eq!(*log.borrow(), vec!["/v6/#about"]);
    }

    #[test]
    fn section_items_highlight_from_the_spy() {
        let about = item("about");
        assert!(is_item_active(&about, Some("about"), "/"));
        assert!(!is_item_active(&about, Some("hero"), "/"));
        assert!(!is_item_active(&about, None, "/"));
    }

    #[test]
    fn route_items_highlight_on_their_subtree() {
        let portfolio = item("portfolio");
        assert!(is_item_active(&portfolio, None, "/portfolio"));
        assert!(is_item_active(&portfolio, None, "/portfolio/orbit-cms"));
        assert!(!is_item_active(&portfolio, None, "/portfolio-archive"));
        assert!(!is_item_active(&portfolio, None, "/"));
    }

    #[test]
    fn root_route_items_match_exactly() {
        let home = NavItem::route("home", "/");
        assert!(is_item_active(&home, None, "/"));
        assert!(!is_item_active(&home, None, "/portfolio"));
    }

    #[test]
    fn is_active_sees_through_the_mount_prefix() {
        let host = Rc::new(FakeHost::default());
        let ctx = test_ctx("/v6", "/v6/portfolio/orbit-cms", host);
        assert!(ctx.is_active(&item("portfolio")));
        assert!(!ctx.is_active(&item("about")));
    }
}
