//! Booking form page (MVVM)
//!
//! Creates the ViewModel, renders the tab bar, the active tab and the
//! Back/Next/Submit footer.

use super::tabs::{AgreementTab, AvailabilityTab, BusinessTab, PlansTab};
use super::view_model::BookingFormVm;
use crate::shared::components::ui::{Badge, Button, ButtonVariant};
use crate::shared::i18n::{tr, use_locale};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_booking_request::FormTab;
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;

fn tab_icon(tab: FormTab) -> &'static str {
    match tab {
        FormTab::Business => "briefcase",
        FormTab::Availability => "clock",
        FormTab::Plans => "credit-card",
        FormTab::Agreement => "file-text",
    }
}

#[component]
pub fn BookingFormPage() -> impl IntoView {
    let vm = BookingFormVm::new(use_toast());

    view! {
        <div class="page booking-page">
            <form
                class="booking-form"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <TabBar vm=vm />
                <div class="booking-form__content">
                    <TabContent vm=vm />
                </div>
                <Footer vm=vm />
            </form>
        </div>
    }
}

#[component]
fn TabBar(vm: BookingFormVm) -> impl IntoView {
    let locale = use_locale();
    let active_tab = vm.active_tab;

    view! {
        <div class="tab-bar" role="tablist">
            {FormTab::all()
                .into_iter()
                .map(|tab| {
                    let is_active = move || active_tab.get() == tab;
                    let error_count = move || vm.error_count(tab);
                    view! {
                        <button
                            type="button"
                            role="tab"
                            id=format!("tab-{}", tab.as_str())
                            data-value=tab.as_str()
                            aria-selected=move || is_active().to_string()
                            class=move || {
                                if is_active() { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" }
                            }
                            on:click=move |_| vm.set_tab(tab)
                        >
                            <span class="tab-icon">{icon(tab_icon(tab))}</span>
                            <span class="tab-bar__title">{move || locale.t(tab.title_key())}</span>
                            <Show when=move || { error_count() > 0 }>
                                <Badge
                                    variant="error"
                                    title=Signal::derive(move || locale.t(MessageKey::SubmitRejectedBody).to_string())
                                >
                                    {error_count}
                                </Badge>
                            </Show>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TabContent(vm: BookingFormVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        <div role="tabpanel" aria-labelledby=move || format!("tab-{}", active_tab.get().as_str())>
            {move || match active_tab.get() {
                FormTab::Business => view! { <BusinessTab vm=vm /> }.into_any(),
                FormTab::Availability => view! { <AvailabilityTab vm=vm /> }.into_any(),
                FormTab::Plans => view! { <PlansTab vm=vm /> }.into_any(),
                FormTab::Agreement => view! { <AgreementTab vm=vm /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn Footer(vm: BookingFormVm) -> impl IntoView {
    let locale = use_locale();
    let active_tab = vm.active_tab;
    let has_prev = move || active_tab.get().prev().is_some();

    view! {
        <div class=move || {
            if has_prev() { "booking-form__footer" } else { "booking-form__footer booking-form__footer--end" }
        }>
            <Show when=has_prev>
                <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| vm.prev_tab())>
                    {tr(MessageKey::Back)}
                </Button>
            </Show>
            {move || match active_tab.get().next_button_key() {
                Some(key) => view! {
                    <Button on_click=Callback::new(move |_| vm.next_tab())>
                        {move || locale.t(key)}
                    </Button>
                }
                .into_any(),
                None => view! {
                    <Button submit=true>
                        {tr(MessageKey::Submit)}
                    </Button>
                }
                .into_any(),
            }}
        </div>
    }
}
