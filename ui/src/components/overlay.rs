use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::OnAttribute;
use leptos::prelude::StyleAttribute;
use leptos::prelude::view;
use leptos::{IntoView, component};
use leptos_router::hooks::use_navigate;

use nav::NavItem;
use nav::entrance_delay_ms;
use nav::use_nav;

use crate::i18n::use_i18n;

/// Fullscreen menu for small viewports. Stays in the tree permanently so
/// the exit transition can play; visibility is all classes. A force-close
/// (route change) drops the transition for that one close.
#[component]
pub fn OverlayNav() -> impl IntoView {
    let nav = use_nav();

    view! {
      <div
        class=move || format!(
            "fixed inset-0 z-50 bg-surface flex flex-col items-center justify-center gap-8 {} {}",
            if nav.overlay.animate_exit() { "transition-all duration-300" } else { "transition-none" },
            if nav.overlay.is_open() {
                "opacity-100 translate-y-0"
            } else {
                "opacity-0 -translate-y-full pointer-events-none"
            },
        )
        aria-hidden=move || (!nav.overlay.is_open()).to_string()
      >
        <button
            class="absolute top-6 right-6 text-2xl text-text hover:text-accent"
            aria-label="Close menu"
            on:click=move |_| nav.overlay.close()
        >"✕"</button>

        <For
            each=move || nav.config.items.iter().copied().enumerate()
            key=|(_, item)| item.key
            children=move |(index, item)| view! { <OverlayItem index item/> }
        />
      </div>
    }
}

/// One menu entry. Entrance is staggered top to bottom; the delay clears
/// while closed so the panel's own exit is not held back.
#[component]
fn OverlayItem(index: usize, item: NavItem) -> impl IntoView {
    let nav = use_nav();
    let i18n = use_i18n();
    let navigate = use_navigate();

    view! {
        <a
            href=nav.href_for(&item)
            class=move || format!(
                "text-3xl font-display text-text transition-all duration-300 {}",
                if nav.overlay.is_open() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-4"
                },
            )
            class=("text-accent", move || nav.is_active(&item))
            style=move || {
                if nav.overlay.is_open() {
                    format!("transition-delay:{}ms", entrance_delay_ms(index))
                } else {
                    String::new()
                }
            }
            on:click=move |ev| {
                ev.prevent_default();
                nav.select(item, &navigate);
            }
        >
            {move || i18n.t(&format!("nav.{}", item.key))}
        </a>
    }
}
