//! Fetch-backed string table. Labels go through [`I18n::t`]; keys missing
//! from the loaded dictionary render as themselves, so a half-translated
//! locale never blanks the UI.

use std::collections::HashMap;

use gloo_net::http::Request;
use leptos::prelude::Get;
use leptos::prelude::RwSignal;
use leptos::prelude::Update;
use leptos::prelude::expect_context;
use leptos::prelude::provide_context;
use leptos::server::LocalResource;

use nav::MountContext;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::De => "DE",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Locale::En => Locale::De,
            Locale::De => Locale::En,
        }
    }
}

/// One locale's strings, served from `assets/i18n/<code>.json`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Dict(HashMap<String, String>);

impl Dict {
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.0.get(key).map(String::as_str).unwrap_or(key)
    }
}

#[derive(Clone, Copy)]
pub struct I18n {
    pub locale: RwSignal<Locale>,
    dict: LocalResource<Result<Dict, String>>,
}

impl I18n {
    /// Translated label for `key`, or the key itself while the dictionary
    /// is still loading or has no entry.
    pub fn t(&self, key: &str) -> String {
        match self.dict.get() {
            Some(Ok(dict)) => dict.lookup(key).to_string(),
            _ => key.to_string(),
        }
    }

    pub fn toggle(&self) {
        self.locale.update(|locale| *locale = locale.next());
    }
}

/// Loads the dictionary for the current locale off this mount's assets and
/// reloads it whenever the locale flips.
pub fn provide_i18n(mount: MountContext) -> I18n {
    let locale = RwSignal::new(Locale::default());
    let dict = LocalResource::new(move || {
        let url = mount.resolve(&format!("/assets/i18n/{}.json", locale.get().code()));
        async move {
            Request::get(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?
                .json::<Dict>()
                .await
                .map_err(|e| e.to_string())
        }
    });

    let i18n = I18n { locale, dict };
    provide_context(i18n);
    i18n
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}
