use super::super::view_model::BookingFormVm;
use super::{error_text, TabHeader};
use crate::shared::components::ui::Checkbox;
use crate::shared::i18n::{tr, tr_signal};
use contracts::domain::a001_booking_request::FormField;
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;

const SECTIONS: [(MessageKey, MessageKey); 6] = [
    (MessageKey::AgreementScopeHeading, MessageKey::AgreementScopeBody),
    (MessageKey::AgreementThirdPartyHeading, MessageKey::AgreementThirdPartyBody),
    (MessageKey::AgreementDataHeading, MessageKey::AgreementDataBody),
    (MessageKey::AgreementLiabilityHeading, MessageKey::AgreementLiabilityBody),
    (MessageKey::AgreementPaymentHeading, MessageKey::AgreementPaymentBody),
    (MessageKey::AgreementAcceptanceHeading, MessageKey::AgreementAcceptanceBody),
];

#[component]
pub fn AgreementTab(vm: BookingFormVm) -> impl IntoView {
    view! {
        <div class="card">
            <TabHeader
                title=MessageKey::AgreementTitle
                description=MessageKey::AgreementDescription
            />
            <div class="card__content">
                <div class="agreement-text">
                    <p>{tr(MessageKey::AgreementIntro)}</p>
                    {SECTIONS
                        .into_iter()
                        .map(|(heading, body)| view! {
                            <p class="agreement-text__heading">{tr(heading)}</p>
                            <p>{tr(body)}</p>
                        })
                        .collect_view()}
                </div>

                <Checkbox
                    id=FormField::Agreement.input_id()
                    label=tr_signal(MessageKey::AgreementCheckbox)
                    checked=Signal::derive(move || vm.form.with(|f| f.agreement))
                    on_change=Callback::new(move |checked: bool| vm.set_agreement(checked))
                    error=error_text(vm, FormField::Agreement)
                />
            </div>
        </div>
    }
}
