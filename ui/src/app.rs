use std::borrow::Cow;

use leptos::*;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use crate::components::header::Header;
use crate::components::overlay::OverlayNav;
use crate::i18n::provide_i18n;
use crate::routes::ThemeRoutes;
use leptos_router::components::Router;

use leptos_meta::Title;
use leptos_meta::provide_meta_context;

use nav::MountContext;
use nav::NavConfig;
use nav::NavItem;
use nav::ScrollSpyConfig;
use nav::SpyStrategy;
use nav::provide_nav;

/// Navigation of this theme. Section ids must match the `Section`s the home
/// page renders; the `key` doubles as the translation key suffix.
const NAV_ITEMS: &[NavItem] = &[
    NavItem::section("home", "hero"),
    NavItem::section("about", "about"),
    NavItem::section("skills", "skills"),
    NavItem::route("portfolio", "/portfolio"),
    NavItem::section("contact", "contact"),
];

/// Sibling theme builds reachable from the footer. Plain anchors on
/// purpose: switching instances is always a full document load.
const OTHER_THEMES: &[(&str, &str)] =
    &[("01", "/"), ("06", "/v6/"), ("11", "/v11/"), ("12", "/v12/")];

fn theme_config() -> NavConfig {
    NavConfig {
        items: NAV_ITEMS,
        // top inset matches the fixed header, negative bottom pulls the
        // handover point above the fold
        spy: ScrollSpyConfig {
            root_margin: "-72px 0px -40% 0px",
            min_ratio: 0.0,
            strategy: SpyStrategy::NearestTop,
        },
        scrolled_after_px: 50.0,
    }
}

#[component]
pub fn App(mount: MountContext) -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text="Folio"/>
      <Router base=Cow::Borrowed(mount.base())>
        <Shell mount/>
      </Router>
    }
}

#[component]
fn Shell(mount: MountContext) -> impl IntoView {
    let nav = provide_nav(mount, theme_config());
    provide_i18n(mount);

    view! {
      <Header/>
      <OverlayNav/>

      <main class="min-h-screen pt-20">
        <ThemeRoutes/>
      </main>

      <footer class="bg-surface text-text py-8">
        <div class="max-w-6xl mx-auto px-6 flex flex-col sm:flex-row justify-between gap-8">
          <p>"© 2026 Folio — one portfolio, many skins."</p>
          <nav class="flex items-center gap-6 underline-offset-4">
            <a href="https://github.com/folio-themes" target="_blank">GitHub</a>
            <span class="flex gap-3" aria-label="Theme picker">
              <For
                  each=move || OTHER_THEMES.iter().copied()
                  key=|(label, _)| *label
                  children=move |(label, href)| {
                      let current = href.trim_end_matches('/') == nav.mount.base();
                      view! {
                          <a
                              href=href
                              class="hover:text-accent"
                              class=("text-accent", move || current)
                          >
                              {label}
                          </a>
                      }
                  }
              />
            </span>
          </nav>
        </div>
      </footer>
    }
}
