use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::Get;
use leptos::prelude::IntoAny;
use leptos::prelude::Memo;
use leptos::prelude::OnAttribute;
use leptos::prelude::With;
use leptos::prelude::view;
use leptos::{IntoView, component};
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use nav::use_nav;

use crate::i18n::use_i18n;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    pub year: u16,
}

/// This theme's portfolio entries; cards and detail routes render straight
/// off this table.
pub const PROJECTS: &[Project] = &[
    Project {
        slug: "orbit-cms",
        name: "Orbit CMS",
        summary: "Headless content backend with a block editor and a staged publishing pipeline.",
        stack: &["Rust", "actix-web", "PostgreSQL"],
        year: 2024,
    },
    Project {
        slug: "terra-viz",
        name: "Terra Viz",
        summary: "Interactive map layers for climate datasets, rendered entirely client side.",
        stack: &["Leptos", "WebAssembly", "deck.gl"],
        year: 2025,
    },
    Project {
        slug: "pulse-board",
        name: "Pulse Board",
        summary: "Realtime status dashboard aggregating service health probes across regions.",
        stack: &["Rust", "WebSockets", "Grafana"],
        year: 2023,
    },
];

pub fn find_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.slug == slug)
}

#[component]
pub fn PortfolioIndex() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="max-w-6xl mx-auto px-6 py-24">
            <h1 class="text-4xl text-text font-bold mb-10">{move || i18n.t("portfolio.title")}</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                <For
                    each=|| PROJECTS.iter()
                    key=|project| project.slug
                    children=|project| view! { <ProjectCard project/> }
                />
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let nav = use_nav();
    let navigate = use_navigate();
    let href = nav.mount.resolve(&format!("/portfolio/{}", project.slug));

    view! {
        <a
            href=href.clone()
            class="block bg-neutral-light rounded-xl overflow-hidden shadow hover:shadow-lg transition p-6"
            on:click=move |ev| {
                ev.prevent_default();
                nav.navigate_url(&href, &navigate);
            }
        >
            <h3 class="font-semibold text-lg mb-1">{project.name}</h3>
            <p class="text-sm text-text/80 mb-4">{project.summary}</p>
            <ul class="flex flex-wrap gap-2 text-xs">
                {project.stack.iter().map(|tech| view! {
                    <li class="bg-surface rounded-full px-3 py-1">{*tech}</li>
                }).collect::<Vec<_>>()}
            </ul>
        </a>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let i18n = use_i18n();

    let project = Memo::new(move |_| {
        params.with(|map| map.get("slug").and_then(|slug| find_project(&slug)))
    });

    view! {
        <div class="max-w-3xl mx-auto px-6 py-24">
            {move || match project.get() {
                Some(project) => view! {
                    <article>
                        <h1 class="text-4xl text-text font-bold mb-2">{project.name}</h1>
                        <p class="text-sm text-text/60 mb-8">{project.year}</p>
                        <p class="text-text leading-relaxed mb-8">{project.summary}</p>
                        <ul class="flex flex-wrap gap-2 text-sm">
                            {project.stack.iter().map(|tech| view! {
                                <li class="bg-neutral-light rounded-full px-3 py-1">{*tech}</li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </article>
                }.into_any(),
                None => view! {
                    <p class="text-text">{move || i18n.t("portfolio.missing")}</p>
                }.into_any(),
            }}
        </div>
    }
}
