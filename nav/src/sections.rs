//! Section registration and the viewport-observation glue that feeds the
//! scroll-spy engine.
//!
//! The page that owns the anchorable content calls [`track_sections`] once;
//! every [`Section`] below it then registers itself for the lifetime of the
//! page. All geometry comes from an `IntersectionObserver`; browsers
//! without one keep working, only without the section highlight.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html;
use leptos::leptos_dom::logging::console_warn;
use leptos::prelude::Children;
use leptos::prelude::ClassAttribute;
use leptos::prelude::Effect;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::GetUntracked;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::LocalStorage;
use leptos::prelude::NodeRef;
use leptos::prelude::NodeRefAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::StoredValue;
use leptos::prelude::Update;
use leptos::prelude::With;
use leptos::prelude::WithUntracked;
use leptos::prelude::WithValue;
use leptos::prelude::on_cleanup;
use leptos::prelude::provide_context;
use leptos::prelude::use_context;
use leptos::prelude::view;
use leptos::reactive::spawn_local;
use leptos::{IntoView, component};

#[cfg(feature = "web")]
use leptos::leptos_dom::logging::console_error;
#[cfg(feature = "web")]
use leptos::prelude::{SetValue, UpdateValue};
#[cfg(feature = "web")]
use wasm_bindgen::JsCast;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

use crate::controller::{NavContext, use_nav};
use crate::items::{NavItem, NavTarget};
use crate::scroll;
use crate::spy::{ScrollSpyConfig, SpyEngine};

/// The observer and its callback live and die together; the browser side
/// would throw into a freed closure otherwise.
#[cfg(feature = "web")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

/// Per-page tracking handle. `Copy`; [`track_sections`] provides it as
/// context so nested [`Section`]s can register themselves.
#[derive(Clone, Copy)]
pub struct SectionSpy {
    engine: StoredValue<Rc<RefCell<SpyEngine>>, LocalStorage>,
    active: RwSignal<Option<&'static str>>,
    registry: RwSignal<Vec<&'static str>>,
    #[cfg(feature = "web")]
    observer: StoredValue<Option<ObserverHandle>, LocalStorage>,
}

impl SectionSpy {
    fn register(&self, id: &'static str) {
        self.engine.with_value(|engine| engine.borrow_mut().register(id));
        self.registry.update(|ids| {
            if !ids.contains(&id) {
                ids.push(id);
            }
        });
    }

    fn deregister(&self, id: &'static str) {
        let active = self.engine.with_value(|engine| {
            let mut engine = engine.borrow_mut();
            engine.deregister(id);
            engine.active()
        });
        self.registry.update(|ids| ids.retain(|known| *known != id));
        self.sync_active(active);
    }

    /// Pushes the engine's verdict into the signal only on change, so
    /// subscribers do not rerender on every geometry event.
    fn sync_active(&self, next: Option<&'static str>) {
        if self.active.get_untracked() != next {
            self.active.set(next);
        }
    }

    #[cfg(feature = "web")]
    fn observe_element(&self, element: &web_sys::HtmlElement) {
        self.observer.with_value(|handle| {
            if let Some(handle) = handle {
                handle.observer.observe(element.as_ref());
            }
        });
    }

    #[cfg(feature = "web")]
    fn init_observer(&self, config: ScrollSpyConfig) {
        let supported = web_sys::window().is_some_and(|window| {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        });
        if !supported {
            console_warn("IntersectionObserver unavailable; section tracking stays off");
            return;
        }

        let engine = self.engine;
        let active = self.active;
        let sync = move |next| {
            if active.get_untracked() != next {
                active.set(next);
            }
        };
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::wrap(
            Box::new(move |entries: js_sys::Array, _observer| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let id = entry.target().id();
                    let next = engine.with_value(|engine| {
                        engine.borrow_mut().observe(
                            &id,
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            entry.bounding_client_rect().top(),
                        )
                    });
                    sync(next);
                }
            }),
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(config.root_margin);
        init.set_threshold(&threshold_steps(config.min_ratio));
        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => self
                .observer
                .set_value(Some(ObserverHandle { observer, _callback: callback })),
            Err(error) => console_error(&format!("section observer rejected: {error:?}")),
        }
    }

    fn teardown(&self) {
        #[cfg(feature = "web")]
        self.observer.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.observer.disconnect();
            }
        });
        self.engine.with_value(|engine| engine.borrow_mut().clear());
        self.registry.set(Vec::new());
        self.active.set(None);
    }
}

/// Coarse ratio steps give fresh geometry while scrolling, plus the exact
/// gate the engine filters on.
#[cfg(feature = "web")]
fn threshold_steps(min_ratio: f64) -> JsValue {
    let steps = js_sys::Array::new();
    for step in [0.0, 0.25, 0.5, 0.75, 1.0] {
        steps.push(&JsValue::from_f64(step));
    }
    if min_ratio > 0.0 {
        steps.push(&JsValue::from_f64(min_ratio.min(1.0)));
    }
    steps.into()
}

/// Wire up section tracking for the current page. Returns the spy handle
/// and installs it as context; tears itself down when the page unmounts.
///
/// Also drains deferred scroll targets (a cross-page nav click or a deep
/// link like `/v6/#contact`) once the named section has registered.
pub fn track_sections() -> SectionSpy {
    let nav = use_nav();
    let spy = SectionSpy {
        engine: StoredValue::new_local(Rc::new(RefCell::new(SpyEngine::new(nav.config.spy)))),
        active: nav.active_section,
        registry: nav.registry,
        #[cfg(feature = "web")]
        observer: StoredValue::new_local(None),
    };

    #[cfg(feature = "web")]
    spy.init_observer(nav.config.spy);

    // a deep-linked fragment queues exactly like a cross-page nav click
    if nav.pending_section.get_untracked().is_none() {
        let hash = nav.hash.get_untracked();
        if let Some(id) = hash
            .strip_prefix('#')
            .and_then(|fragment| nav.section_id_for(fragment))
        {
            nav.pending_section.set(Some(id));
        }
    }

    Effect::new(move |_| {
        let Some(id) = nav.pending_section.get() else {
            return;
        };
        if !nav.registry.with(|ids| ids.contains(&id)) {
            return;
        }
        nav.pending_section.set(None);
        spawn_local(async move {
            scroll::next_tick().await;
            nav.host.with_value(|host| host.scroll_to_id(id));
        });
    });

    if cfg!(debug_assertions) {
        warn_on_missing_targets(nav);
    }

    on_cleanup(move || spy.teardown());
    provide_context(spy);
    spy
}

/// One anchorable region of the page. Renders a `<section id=...>`,
/// registers the id for scroll tracking while mounted, and reports its
/// viewport visibility. Without a [`track_sections`] above it, it is just
/// a plain `<section>`.
#[component]
pub fn Section(
    /// Anchor id, matching a [`NavTarget::Section`] entry.
    id: &'static str,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();

    if let Some(spy) = use_context::<SectionSpy>() {
        spy.register(id);
        #[cfg(feature = "web")]
        Effect::new(move |_| {
            if let Some(element) = node.get() {
                spy.observe_element(&element);
            }
        });
        on_cleanup(move || spy.deregister(id));
    }

    view! {
        <section id=id class=class node_ref=node>
            {children()}
        </section>
    }
}

/// Nav entries whose section target never rendered. Checked one tick after
/// the page mounts in dev builds; a nonempty answer is a config/markup
/// mismatch, not a crash.
pub(crate) fn missing_targets(
    items: &[NavItem],
    registered: &[&'static str],
) -> Vec<&'static str> {
    items
        .iter()
        .filter_map(|item| match item.target {
            NavTarget::Section(id) if !registered.contains(&id) => Some(id),
            _ => None,
        })
        .collect()
}

fn warn_on_missing_targets(nav: NavContext) {
    spawn_local(async move {
        scroll::next_tick().await;
        let missing = nav
            .registry
            .with_untracked(|ids| missing_targets(nav.config.items, ids));
        for id in missing {
            console_warn(&format!(
                "nav points at section \"{id}\" but the page never rendered it"
            ));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> SectionSpy {
        SectionSpy {
            engine: StoredValue::new_local(Rc::new(RefCell::new(SpyEngine::new(
                ScrollSpyConfig::default(),
            )))),
            active: RwSignal::new(None),
            registry: RwSignal::new(Vec::new()),
            #[cfg(feature = "web")]
            observer: StoredValue::new_local(None),
        }
    }

    #[test]
    fn registration_is_idempotent_and_ordered() {
        let spy = spy();
        spy.register("hero");
        spy.register("about");
        spy.register("hero");
        assert_eq!(spy.registry.get_untracked(), vec!["hero", "about"]);
    }

    #[test]
    fn deregistering_clears_registry_and_highlight() {
        let spy = spy();
        spy.register("hero");
        spy.register("about");
        let active = spy
            .engine
            .with_value(|engine| engine.borrow_mut().observe("hero", true, 1.0, 0.0));
        spy.sync_active(active);
        assert_eq!(spy.active.get_untracked(), Some("hero"));

        spy.deregister("hero");
        assert_eq!(spy.registry.get_untracked(), vec!["about"]);
        assert_eq!(spy.active.get_untracked(), None);
    }

    #[test]
    fn teardown_resets_everything() {
        let spy = spy();
        spy.register("hero");
        let active = spy
            .engine
            .with_value(|engine| engine.borrow_mut().observe("hero", true, 1.0, 0.0));
        spy.sync_active(active);

        spy.teardown();
        assert!(spy.registry.get_untracked().is_empty());
        assert_eq!(spy.active.get_untracked(), None);
    }

    #[test]
    fn missing_targets_reports_only_section_items() {
        let items = [
            NavItem::section("about", "about"),
            NavItem::route("portfolio", "/portfolio"),
            NavItem::section("contact", "contact"),
        ];
        assert_eq!(missing_targets(&items, &["about"]), vec!["contact"]);
        assert!(missing_targets(&items, &["about", "contact"]).is_empty());
    }
}
