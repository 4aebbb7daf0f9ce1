use crate::shared::i18n::{tr, LanguageSwitcher};
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <h1 class="header__title">{tr(MessageKey::AppTitle)}</h1>
                <p class="header__subtitle">{tr(MessageKey::AppSubtitle)}</p>
            </div>
            <div class="header__actions">
                <LanguageSwitcher />
            </div>
        </header>
    }
}
