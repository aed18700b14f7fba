use leptos::*;
#[cfg(feature = "web")]
use mount::mount_to_body;
#[cfg(feature = "web")]
use nav::MountContext;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let mount = MountContext::detect(option_env!("BASE_PATH"));
    mount_to_body(move || view! { <App mount/> });
}

pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod routes;

pub use crate::app::App;
