use super::use_locale;
use crate::shared::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::shared::icons::icon;
use contracts::shared::i18n::{Locale, MessageKey};
use leptos::prelude::*;

/// Language dropdown in the page header
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ctx = use_locale();
    let is_open = RwSignal::new(false);

    let select_locale = move |locale: Locale| {
        ctx.set_locale(locale);
        is_open.set(false);
    };

    view! {
        <div class="language-switcher">
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Small
                aria_label=Signal::derive(move || ctx.t(MessageKey::ChangeLanguage).to_string())
                on_click=Callback::new(move |_| is_open.update(|v| *v = !*v))
            >
                {icon("globe")}
                <span class="language-switcher__code">
                    {move || ctx.get_locale().code().to_uppercase()}
                </span>
            </Button>

            <Show when=move || is_open.get()>
                <div class="language-switcher__dropdown">
                    {Locale::all().into_iter().map(|locale| {
                        let is_active = move || ctx.get_locale() == locale;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "language-switcher__item language-switcher__item--active"
                                    } else {
                                        "language-switcher__item"
                                    }
                                }
                                lang=locale.code()
                                on:click=move |_| select_locale(locale)
                            >
                                {locale.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
