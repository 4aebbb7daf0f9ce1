//! Time pickers for the availability tab.
//!
//! Values are `"hh:mm AM"` strings; every change emits the composed string.

use crate::shared::components::ui::{Checkbox, Select};
use crate::shared::i18n::{tr, tr_signal, use_locale};
use contracts::domain::a001_booking_request::{DayError, DayErrors, WorkingDay};
use contracts::shared::config::config;
use contracts::shared::i18n::MessageKey;
use contracts::shared::time_of_day::{
    compose_time, picker_hours, Meridiem, TimeOfDay, PICKER_MINUTES,
};
use leptos::prelude::*;

/// Split a stored value into picker parts; unparsable values show 12:00 AM
fn split_time(value: &str) -> (String, String, Meridiem) {
    match TimeOfDay::parse(value) {
        Ok(time) => (
            format!("{:02}", time.hour12()),
            format!("{:02}", time.minute()),
            time.meridiem(),
        ),
        Err(_) => ("12".to_string(), "00".to_string(), Meridiem::Am),
    }
}

fn minute_options(current: &str) -> Vec<(String, String)> {
    let mut minutes: Vec<String> = PICKER_MINUTES.iter().map(|m| m.to_string()).collect();
    // keep off-grid values selectable
    if !minutes.iter().any(|m| m == current) {
        minutes.push(current.to_string());
        minutes.sort();
    }
    minutes.into_iter().map(|m| (m.clone(), m)).collect()
}

/// Hour / minute / AM-PM selects bound to one time string
#[component]
pub fn SingleTimePicker(
    /// Current value, "hh:mm AM"
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Prefix for element ids
    #[prop(into)]
    id: String,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let parts = Memo::new(move |_| split_time(&value.get()));

    let hour = Signal::derive(move || parts.get().0);
    let minute = Signal::derive(move || parts.get().1);
    let period = Signal::derive(move || parts.get().2.as_str().to_string());

    let hour_options = Signal::derive(|| {
        picker_hours()
            .into_iter()
            .map(|h| (h.clone(), h))
            .collect::<Vec<_>>()
    });
    let minutes = Signal::derive(move || minute_options(&minute.get()));
    let periods = Signal::derive(|| {
        Meridiem::all()
            .into_iter()
            .map(|m| (m.as_str().to_string(), m.as_str().to_string()))
            .collect::<Vec<_>>()
    });

    let emit = move |hour: String, minute: String, meridiem: Meridiem| {
        on_change.run(compose_time(&hour, &minute, meridiem));
    };

    view! {
        <div class="time-picker">
            <Select
                id=format!("{}-hour", id)
                aria_label=tr_signal(MessageKey::TimeHour)
                value=hour
                options=hour_options
                disabled=disabled
                on_change=Callback::new(move |h: String| {
                    let (_, m, p) = parts.get_untracked();
                    emit(h, m, p);
                })
            />
            <span class="time-picker__separator">":"</span>
            <Select
                id=format!("{}-minute", id)
                aria_label=tr_signal(MessageKey::TimeMinute)
                value=minute
                options=minutes
                disabled=disabled
                on_change=Callback::new(move |m: String| {
                    let (h, _, p) = parts.get_untracked();
                    emit(h, m, p);
                })
            />
            <Select
                id=format!("{}-period", id)
                aria_label=tr_signal(MessageKey::TimePeriod)
                value=period
                options=periods
                disabled=disabled
                on_change=Callback::new(move |p: String| {
                    let (h, m, current) = parts.get_untracked();
                    let meridiem = p.parse().unwrap_or(current);
                    emit(h, m, meridiem);
                })
            />
        </div>
    }
}

/// One working day row: enable checkbox plus From/To pickers
#[component]
pub fn DayTimePicker(
    #[prop(into)] day: Signal<WorkingDay>,
    #[prop(into)] error: Signal<Option<DayError>>,
    on_change: Callback<WorkingDay>,
) -> impl IntoView {
    let locale = use_locale();
    let day_id = day.get_untracked().id;

    let label = Signal::derive(move || {
        let current = day.get();
        match current.label_key() {
            Some(key) => locale.t(key).to_string(),
            None => current.label,
        }
    });
    let enabled = Signal::derive(move || day.get().enabled);
    let disabled = Signal::derive(move || !day.get().enabled);
    let start = Signal::derive(move || day.get().start_time);
    let end = Signal::derive(move || day.get().end_time);

    let message = move |pick: fn(&DayError) -> Option<MessageKey>| {
        move || {
            error
                .get()
                .as_ref()
                .and_then(pick)
                .map(|key| view! { <p class="form__error" role="alert">{locale.t(key)}</p> })
        }
    };

    view! {
        <div class=move || {
            if enabled.get() { "day-row" } else { "day-row day-row--disabled" }
        }>
            <Checkbox
                id=format!("day-{}", day_id)
                label=label
                checked=enabled
                on_change=Callback::new(move |checked: bool| {
                    let mut updated = day.get_untracked();
                    updated.enabled = checked;
                    on_change.run(updated);
                })
            />
            <div class="day-row__times">
                <div class="day-row__time">
                    <span class="day-row__caption">{tr(MessageKey::TimeFrom)}</span>
                    <SingleTimePicker
                        id=format!("{}-start", day_id)
                        value=start
                        disabled=disabled
                        on_change=Callback::new(move |time: String| {
                            let mut updated = day.get_untracked();
                            updated.start_time = time;
                            on_change.run(updated);
                        })
                    />
                    {message(|e| e.start)}
                </div>
                <div class="day-row__time">
                    <span class="day-row__caption">{tr(MessageKey::TimeTo)}</span>
                    <SingleTimePicker
                        id=format!("{}-end", day_id)
                        value=end
                        disabled=disabled
                        on_change=Callback::new(move |time: String| {
                            let mut updated = day.get_untracked();
                            updated.end_time = time;
                            on_change.run(updated);
                        })
                    />
                    {message(|e| e.end)}
                </div>
            </div>
            {message(|e| e.range)}
        </div>
    }
}

/// All working days plus the "set hours for all days" pair
#[component]
pub fn DaysTimePicker(
    #[prop(into)] days: Signal<Vec<WorkingDay>>,
    #[prop(into)] day_errors: Signal<DayErrors>,
    on_day_change: Callback<WorkingDay>,
    on_all_start: Callback<String>,
    on_all_end: Callback<String>,
) -> impl IntoView {
    let defaults = &config().form;
    let all_start = RwSignal::new(defaults.default_start.clone());
    let all_end = RwSignal::new(defaults.default_end.clone());

    view! {
        <div class="days-picker">
            <div class="days-picker__all">
                <span class="form__label">{tr(MessageKey::SetHoursForAllDays)}</span>
                <div class="day-row__times">
                    <div class="day-row__time">
                        <span class="day-row__caption">{tr(MessageKey::TimeFrom)}</span>
                        <SingleTimePicker
                            id="all-start"
                            value=all_start
                            on_change=Callback::new(move |time: String| {
                                all_start.set(time.clone());
                                on_all_start.run(time);
                            })
                        />
                    </div>
                    <div class="day-row__time">
                        <span class="day-row__caption">{tr(MessageKey::TimeTo)}</span>
                        <SingleTimePicker
                            id="all-end"
                            value=all_end
                            on_change=Callback::new(move |time: String| {
                                all_end.set(time.clone());
                                on_all_end.run(time);
                            })
                        />
                    </div>
                </div>
            </div>

            <For
                each=move || days.get()
                key=|day| day.id.clone()
                children=move |initial| {
                    let id = initial.id.clone();
                    let id_for_error = id.clone();
                    let day = Signal::derive(move || {
                        days.get()
                            .into_iter()
                            .find(|d| d.id == id)
                            .unwrap_or_else(|| initial.clone())
                    });
                    let error = Signal::derive(move || day_errors.get().get(&id_for_error).copied());
                    view! { <DayTimePicker day=day error=error on_change=on_day_change /> }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_time() {
        assert_eq!(
            split_time("09:30 PM"),
            ("09".to_string(), "30".to_string(), Meridiem::Pm)
        );
        assert_eq!(
            split_time("garbage"),
            ("12".to_string(), "00".to_string(), Meridiem::Am)
        );
    }

    #[test]
    fn test_minute_options_keep_off_grid_value() {
        let grid: Vec<String> = minute_options("15").into_iter().map(|(v, _)| v).collect();
        assert_eq!(grid, ["00", "15", "30", "45"]);

        let off: Vec<String> = minute_options("07").into_iter().map(|(v, _)| v).collect();
        assert_eq!(off, ["00", "07", "15", "30", "45"]);
    }
}
