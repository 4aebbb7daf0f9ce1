//! Locale management for the application.
//!
//! The active language comes from the first URL path segment (`/en`, `/ar`),
//! then from localStorage, then from the embedded config. Changing it
//! rewrites the path prefix without a reload and updates `lang`/`dir` on the
//! document root so Arabic renders right-to-left.

mod language_switcher;

pub use language_switcher::LanguageSwitcher;

use contracts::shared::config::config;
use contracts::shared::i18n::{t, Locale, MessageKey};
use leptos::prelude::*;
use web_sys::window;

const LOCALE_STORAGE_KEY: &str = "app-locale";

fn load_locale_code_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
}

fn save_locale_to_storage(locale: Locale) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.code());
    }
}

/// Set `lang` and `dir` on `<html>`.
fn apply_locale(locale: Locale) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("lang", locale.code());
    let _ = root.set_attribute("dir", locale.dir());
}

/// Replace the locale prefix of the current path, keeping the query string.
fn replace_locale_path(locale: Locale) {
    let Some(w) = window() else {
        return;
    };
    let search = w.location().search().unwrap_or_default();
    let new_url = format!("{}{}", locale.path(), search);
    if let Ok(history) = w.history() {
        if let Err(err) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
        {
            log::warn!("Failed to update locale path: {:?}", err);
        }
    }
}

/// Locale context type.
#[derive(Clone, Copy)]
pub struct LocaleContext {
    /// Current locale signal.
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    /// Switch language, persist it and update the URL and document direction.
    pub fn set_locale(&self, locale: Locale) {
        if self.locale.get_untracked() == locale {
            return;
        }
        log::debug!("Switching locale to {}", locale.code());
        self.locale.set(locale);
        save_locale_to_storage(locale);
        apply_locale(locale);
        replace_locale_path(locale);
    }

    pub fn get_locale(&self) -> Locale {
        self.locale.get()
    }

    /// Translate in the current locale (tracks the locale signal).
    pub fn t(&self, key: MessageKey) -> &'static str {
        t(self.locale.get(), key)
    }
}

/// Provides locale context to children components.
#[component]
pub fn LocaleProvider(children: Children) -> impl IntoView {
    let path = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let stored = load_locale_code_from_storage();
    let initial = Locale::resolve(&path, stored.as_deref(), config().locale.default);

    apply_locale(initial);
    if Locale::from_path(&path).is_none() {
        replace_locale_path(initial);
    }

    provide_context(LocaleContext {
        locale: RwSignal::new(initial),
    });

    children()
}

/// Hook to use the locale context.
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>()
        .expect("LocaleContext not found. Wrap your app with LocaleProvider.")
}

/// Reactive text for a message key, usable directly as a view child.
pub fn tr(key: MessageKey) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    let ctx = use_locale();
    move || ctx.t(key)
}

/// Same as [`tr`], as a `Signal<String>` for component props.
pub fn tr_signal(key: MessageKey) -> Signal<String> {
    let ctx = use_locale();
    Signal::derive(move || ctx.t(key).to_string())
}
