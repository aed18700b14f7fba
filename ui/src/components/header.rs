use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::Get;
use leptos::prelude::OnAttribute;
use leptos::prelude::view;
use leptos::{IntoView, component};
use leptos_router::hooks::use_navigate;

use nav::NavItem;
use nav::use_nav;

use crate::i18n::use_i18n;

/// Fixed top bar: brand mark, the desktop nav row, locale switch and the
/// burger that drives the fullscreen menu. Turns opaque once the page is
/// scrolled past the theme threshold.
#[component]
pub fn Header() -> impl IntoView {
    let nav = use_nav();

    view! {
      <header class=move || format!(
          "fixed top-0 inset-x-0 z-40 transition-colors duration-300 {}",
          if nav.scrolled.get() {
              "bg-surface/85 backdrop-blur shadow-md"
          } else {
              "bg-transparent"
          },
      )>
        <div class="max-w-6xl mx-auto flex justify-between items-center px-6 py-4">
          <BrandMark/>

          <nav class="hidden md:flex gap-8 text-text">
            <For
                each=move || nav.config.items.iter().copied()
                key=|item| item.key
                children=move |item| view! { <NavAnchor item/> }
            />
          </nav>

          <div class="flex items-center gap-4">
            <LocaleSwitch/>
            <MenuButton/>
          </div>
        </div>
      </header>
    }
}

#[component]
fn BrandMark() -> impl IntoView {
    let nav = use_nav();
    let navigate = use_navigate();

    view! {
        <a
            href=nav.mount.resolve("/")
            class="text-2xl font-extrabold text-primary"
            on:click=move |ev| {
                ev.prevent_default();
                nav.navigate_to("/", &navigate);
            }
        >"FOLIO"</a>
    }
}

/// One desktop nav link. The active entry follows the scroll-spy for
/// section targets and the route for page targets.
#[component]
fn NavAnchor(item: NavItem) -> impl IntoView {
    let nav = use_nav();
    let i18n = use_i18n();
    let navigate = use_navigate();

    view! {
        <a
            href=nav.href_for(&item)
            class="transition-colors hover:text-accent"
            class=("text-accent", move || nav.is_active(&item))
            aria-current=move || nav.is_active(&item).then_some("true")
            on:click=move |ev| {
                ev.prevent_default();
                nav.select(item, &navigate);
            }
        >
            {move || i18n.t(&format!("nav.{}", item.key))}
        </a>
    }
}

#[component]
fn LocaleSwitch() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <button
            class="text-sm tracking-widest text-text hover:text-accent"
            aria-label="Switch language"
            on:click=move |_| i18n.toggle()
        >
            {move || i18n.locale.get().label()}
        </button>
    }
}

#[component]
fn MenuButton() -> impl IntoView {
    let nav = use_nav();

    view! {
        <button
            class="md:hidden flex flex-col justify-center items-center gap-1.5 h-10 w-10"
            aria-label="Menu"
            aria-expanded=move || nav.overlay.is_open().to_string()
            on:click=move |_| nav.overlay.toggle()
        >
            <span class=move || format!(
                "h-0.5 w-6 bg-text transition-transform {}",
                if nav.overlay.is_open() { "rotate-45 translate-y-2" } else { "" },
            )></span>
            <span class=move || format!(
                "h-0.5 w-6 bg-text transition-opacity {}",
                if nav.overlay.is_open() { "opacity-0" } else { "" },
            )></span>
            <span class=move || format!(
                "h-0.5 w-6 bg-text transition-transform {}",
                if nav.overlay.is_open() { "-rotate-45 -translate-y-2" } else { "" },
            )></span>
        </button>
    }
}
