use super::super::view_model::BookingFormVm;
use super::{error_text, TabHeader};
use crate::shared::components::time_picker::DaysTimePicker;
use crate::shared::components::ui::Textarea;
use crate::shared::i18n::{tr, tr_signal};
use contracts::domain::a001_booking_request::{FormField, WorkingDay};
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;

#[component]
pub fn AvailabilityTab(vm: BookingFormVm) -> impl IntoView {
    let days = Signal::derive(move || vm.form.with(|f| f.working_days.clone()));
    let day_errors = Signal::derive(move || vm.day_errors.get());
    let days_error = error_text(vm, FormField::WorkingDays);

    view! {
        <div class="card">
            <TabHeader
                title=MessageKey::AvailabilityTitle
                description=MessageKey::AvailabilityDescription
            />
            <div class="card__content">
                <div class="form__group" id=FormField::WorkingDays.input_id()>
                    <span class="form__label">{tr(MessageKey::WorkingDaysLabel)}</span>
                    <DaysTimePicker
                        days=days
                        day_errors=day_errors
                        on_day_change=Callback::new(move |day: WorkingDay| vm.update_day(day))
                        on_all_start=Callback::new(move |time: String| vm.set_all_start_times(time))
                        on_all_end=Callback::new(move |time: String| vm.set_all_end_times(time))
                    />
                    {move || days_error.get().map(|e| view! {
                        <p class="form__error" role="alert">{e}</p>
                    })}
                </div>

                <Textarea
                    id="holidays"
                    label=tr_signal(MessageKey::HolidaysLabel)
                    placeholder=tr_signal(MessageKey::HolidaysPlaceholder)
                    description=tr_signal(MessageKey::HolidaysDescription)
                    value=Signal::derive(move || vm.form.with(|f| f.holidays.clone()))
                    on_input=Callback::new(move |text: String| vm.update(None, |f| f.holidays = text))
                />
            </div>
        </div>
    }
}
