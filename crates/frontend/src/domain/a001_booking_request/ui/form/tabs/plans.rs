//! Plan selection and payment tab

use super::super::view_model::BookingFormVm;
use super::TabHeader;
use crate::shared::components::ui::{Radio, RadioGroup, Textarea};
use crate::shared::i18n::{tr, tr_signal, use_locale};
use contracts::enums::{PaymentMethod, Plan};
use contracts::shared::config::config;
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;

#[component]
pub fn PlansTab(vm: BookingFormVm) -> impl IntoView {
    let locale = use_locale();
    let plan = Signal::derive(move || vm.form.with(|f| f.plan.code().to_string()));
    let payment_method =
        Signal::derive(move || vm.form.with(|f| f.payment_method.code().to_string()));

    let on_plan = Callback::new(move |code: String| {
        if let Some(plan) = Plan::from_code(&code) {
            vm.update(None, |f| f.plan = plan);
        }
    });
    let on_payment = Callback::new(move |code: String| {
        if let Some(method) = PaymentMethod::from_code(&code) {
            vm.update(None, |f| f.payment_method = method);
        }
    });

    let payment_options = PaymentMethod::all()
        .into_iter()
        .map(|m| (m.code().to_string(), tr_signal(m.label_key())))
        .collect::<Vec<_>>();

    view! {
        <div class="card">
            <TabHeader title=MessageKey::PlansTitle description=MessageKey::PlansDescription />
            <div class="card__content">
                <div class="form__group" role="radiogroup">
                    <span class="form__label">{tr(MessageKey::PlanLabel)}</span>
                    <div class="form__radio-group form__radio-group--cards">
                        {Plan::all()
                            .into_iter()
                            .map(|p| {
                                let title = Signal::derive(move || match config().plan_price(p) {
                                    Some(price) => format!(
                                        "{} - {} {}/{}",
                                        locale.t(p.title_key()),
                                        price.monthly_price,
                                        price.currency,
                                        locale.t(MessageKey::PerMonth)
                                    ),
                                    None => locale.t(p.title_key()).to_string(),
                                });
                                view! {
                                    <Radio
                                        name="plan"
                                        value=p.code()
                                        label=title
                                        checked_value=plan
                                        on_change=on_plan
                                    >
                                        <ul class="plan-features">
                                            {p.feature_keys()
                                                .iter()
                                                .map(|key| view! { <li>{tr(*key)}</li> })
                                                .collect_view()}
                                        </ul>
                                    </Radio>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <hr class="separator" />

                <RadioGroup
                    name="paymentMethod"
                    label=tr_signal(MessageKey::PaymentMethodLabel)
                    value=payment_method
                    on_change=on_payment
                    options=payment_options
                />

                <Textarea
                    id="paymentNotes"
                    label=tr_signal(MessageKey::PaymentNotesLabel)
                    placeholder=tr_signal(MessageKey::PaymentNotesPlaceholder)
                    value=Signal::derive(move || vm.form.with(|f| f.payment_notes.clone()))
                    on_input=Callback::new(move |text: String| vm.update(None, |f| f.payment_notes = text))
                />
            </div>
        </div>
    }
}
