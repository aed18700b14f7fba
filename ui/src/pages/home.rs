use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::OnAttribute;
use leptos::prelude::view;
use leptos::{IntoView, component};
use leptos_router::hooks::use_navigate;

use nav::Section;
use nav::track_sections;
use nav::use_nav;

use crate::i18n::use_i18n;

/// The single-page part of the site: every block below is an anchorable
/// [`Section`], and mounting this page switches section tracking on.
#[component]
pub fn Home() -> impl IntoView {
    track_sections();

    view! {
        <div class="max-w-6xl mx-auto px-6">
            <Hero/>
            <AboutSection/>
            <SkillsSection/>
            <ContactSection/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let nav = use_nav();
    let i18n = use_i18n();
    let navigate = use_navigate();

    view! {
        <Section id="hero" class="min-h-screen flex flex-col justify-center">
            <h1 class="text-5xl sm:text-7xl font-display text-text mb-6 leading-tight">
                {move || i18n.t("hero.title")}
            </h1>
            <p class="text-lg text-text/80 max-w-xl mb-10">
                {move || i18n.t("hero.tagline")}
            </p>
            <a
                href=nav.mount.resolve("/portfolio")
                class="inline-block self-start bg-primary text-neutral-dark px-8 py-4 rounded-full hover:brightness-90 transition"
                on:click=move |ev| {
                    ev.prevent_default();
                    nav.navigate_to("/portfolio", &navigate);
                }
            >
                {move || i18n.t("hero.cta")}
            </a>
        </Section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Section id="about" class="py-24">
            <h2 class="text-3xl text-text font-bold mb-4">{move || i18n.t("about.title")}</h2>
            <p class="text-text leading-relaxed max-w-2xl">
                {move || i18n.t("about.body")}
            </p>
        </Section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    let i18n = use_i18n();
    let skills = [
        "Rust", "WebAssembly", "TypeScript",
        "PostgreSQL", "CI/CD", "Design systems",
    ];

    view! {
        <Section id="skills" class="py-24">
            <h2 class="text-3xl text-text font-bold mb-8">{move || i18n.t("skills.title")}</h2>
            <ul class="grid grid-cols-2 sm:grid-cols-3 gap-4 text-text">
                {skills
                    .into_iter()
                    .map(|skill| view! {
                        <li class="bg-neutral-light rounded-xl px-4 py-3 shadow-sm">{skill}</li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </Section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Section id="contact" class="py-24">
            <h2 class="text-3xl text-text font-bold mb-4">{move || i18n.t("contact.title")}</h2>
            <p class="text-text leading-relaxed max-w-2xl mb-6">
                {move || i18n.t("contact.body")}
            </p>
            <a
                href="mailto:hello@folio.dev"
                class="inline-block bg-primary text-neutral-dark px-8 py-4 rounded-full hover:brightness-90 transition"
            >"hello@folio.dev"</a>
        </Section>
    }
}
