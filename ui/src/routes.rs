// ui/src/routes.rs
use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{
    home::Home,
    portfolio::{PortfolioIndex, ProjectPage},
};

#[component]
pub fn ThemeRoutes() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <p class="p-8 text-text">"404 – not found"</p> }>
        <Route path=path!("")                    view=Home           />
        <Route path=path!("/portfolio")          view=PortfolioIndex />
        <Route path=path!("/portfolio/:slug")    view=ProjectPage    />
      </Routes>
    }
}
