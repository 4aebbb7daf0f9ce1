//! Tab components for the booking form

mod agreement;
mod availability;
mod business;
mod plans;

pub use agreement::AgreementTab;
pub use availability::AvailabilityTab;
pub use business::BusinessTab;
pub use plans::PlansTab;

use super::view_model::BookingFormVm;
use crate::shared::i18n::use_locale;
use contracts::domain::a001_booking_request::FormField;
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;

/// Error text for a field in the active locale
fn error_text(vm: BookingFormVm, field: FormField) -> Signal<Option<String>> {
    let locale = use_locale();
    Signal::derive(move || vm.error(field).map(|key| locale.t(key).to_string()))
}

/// Card header shared by all tabs
#[component]
fn TabHeader(title: MessageKey, description: MessageKey) -> impl IntoView {
    let locale = use_locale();
    view! {
        <div class="card__header">
            <h2 class="card__title">{move || locale.t(title)}</h2>
            <p class="card__description">{move || locale.t(description)}</p>
        </div>
    }
}
