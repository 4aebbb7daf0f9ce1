//! Editable state of the booking form and its transitions
//!
//! The frontend view model keeps one [`BookingFormState`] in a signal and
//! forwards every user command here, so the error bookkeeping can be
//! tested without a browser.

use super::aggregate::{BookingRequestDto, FormField, FormTab, WorkingDay};
use super::submission::{submit, SubmitOutcome};
use super::validation::{validate_working_days, DayErrors, ValidationErrors};
use crate::shared::logo::LogoInfo;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingFormState {
    pub form: BookingRequestDto,
    pub errors: ValidationErrors,
    pub day_errors: DayErrors,
    pub active_tab: FormTab,
}

impl BookingFormState {
    pub fn new(active_tab: FormTab) -> Self {
        Self {
            active_tab,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Field editing
    // ------------------------------------------------------------------

    /// Apply an edit; the field's error, if any, is cleared
    pub fn edit(&mut self, field: Option<FormField>, apply: impl FnOnce(&mut BookingRequestDto)) {
        apply(&mut self.form);
        if let Some(field) = field {
            self.errors.remove(field);
        }
    }

    pub fn set_agreement(&mut self, checked: bool) {
        self.edit(Some(FormField::Agreement), |f| f.agreement = checked);
    }

    /// Number of errors owned by a tab
    pub fn error_count(&self, tab: FormTab) -> usize {
        self.errors.fields().filter(|f| f.tab() == tab).count()
    }

    // ------------------------------------------------------------------
    // Working days
    // ------------------------------------------------------------------

    pub fn update_day(&mut self, day: WorkingDay) {
        self.form.update_day(day);
        self.days_changed();
    }

    pub fn set_all_start_times(&mut self, time: &str) {
        self.form.set_all_start_times(time);
        self.days_changed();
    }

    pub fn set_all_end_times(&mut self, time: &str) {
        self.form.set_all_end_times(time);
        self.days_changed();
    }

    /// Per-day errors follow the days live; the summary error waits for
    /// the next submit
    fn days_changed(&mut self) {
        self.day_errors = validate_working_days(&self.form.working_days);
        self.errors.remove(FormField::WorkingDays);
    }

    // ------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------

    /// Returns true if the active tab changed
    pub fn set_tab(&mut self, tab: FormTab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn next_tab(&mut self) -> bool {
        match self.active_tab.next() {
            Some(next) => self.set_tab(next),
            None => false,
        }
    }

    pub fn prev_tab(&mut self) -> bool {
        match self.active_tab.prev() {
            Some(prev) => self.set_tab(prev),
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    /// Validate the form and apply the outcome: acceptance clears every
    /// error, rejection stores the fresh report and moves to its tab
    pub fn submit(&mut self, logo: Option<LogoInfo>) -> SubmitOutcome {
        let outcome = submit(&self.form, logo);
        match &outcome {
            SubmitOutcome::Accepted(_) => {
                self.errors = ValidationErrors::new();
                self.day_errors = DayErrors::new();
            }
            SubmitOutcome::Rejected { report, focus } => {
                self.errors = report.errors.clone();
                self.day_errors = report.day_errors.clone();
                self.active_tab = *focus;
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::MessageKey;

    fn filled() -> BookingFormState {
        let mut state = BookingFormState::new(FormTab::Business);
        state.edit(None, |f| {
            f.business_name = "Sahara Spa".into();
            f.business_type = "Spa".into();
            f.business_address = "Jumeirah Beach Road, Dubai".into();
            f.phone_number = "+971 4 123 4567".into();
            f.email = "book@saharaspa.ae".into();
            f.social_link = "https://instagram.com/saharaspa".into();
        });
        state.set_agreement(true);
        state
    }

    #[test]
    fn test_edit_clears_only_that_field_error() {
        let mut state = BookingFormState::default();
        state.submit(None);
        assert!(state.errors.contains(FormField::Email));
        assert!(state.errors.contains(FormField::PhoneNumber));

        state.edit(Some(FormField::Email), |f| f.email = "a".into());
        assert!(!state.errors.contains(FormField::Email));
        assert!(state.errors.contains(FormField::PhoneNumber));
        assert_eq!(state.form.email, "a");
    }

    #[test]
    fn test_edit_without_field_keeps_errors() {
        let mut state = BookingFormState::default();
        state.submit(None);
        let before = state.errors.clone();
        state.edit(None, |f| f.holidays = "Eid".into());
        assert_eq!(state.errors, before);
    }

    #[test]
    fn test_agreement_toggle_clears_its_error() {
        let mut state = filled();
        state.set_agreement(false);
        state.submit(None);
        assert_eq!(state.error_count(FormTab::Agreement), 1);
        state.set_agreement(true);
        assert_eq!(state.error_count(FormTab::Agreement), 0);
    }

    #[test]
    fn test_day_change_recomputes_day_errors() {
        let mut state = filled();
        let mut monday = state.form.working_days[0].clone();
        monday.end_time = "08:00 AM".into();
        state.update_day(monday.clone());
        assert_eq!(
            state.day_errors.get("monday").and_then(|e| e.range),
            Some(MessageKey::EndBeforeStart)
        );

        monday.end_time = "06:00 PM".into();
        state.update_day(monday);
        assert!(state.day_errors.is_empty());
    }

    #[test]
    fn test_day_change_clears_working_days_error() {
        let mut state = filled();
        for day in state.form.working_days.clone() {
            state.update_day(WorkingDay { enabled: false, ..day });
        }
        state.submit(None);
        assert_eq!(state.errors.get(FormField::WorkingDays), Some(MessageKey::WorkingDaysNone));

        let friday = state.form.working_days[4].clone();
        state.update_day(WorkingDay { enabled: true, ..friday });
        assert!(!state.errors.contains(FormField::WorkingDays));
    }

    #[test]
    fn test_bulk_times_report_enabled_days_only() {
        let mut state = filled();
        state.set_all_start_times("06:00 PM");
        let enabled: Vec<_> = state.form.enabled_days().map(|d| d.id.clone()).collect();
        assert_eq!(state.day_errors.len(), enabled.len());
        assert!(enabled.iter().all(|id| state.day_errors.contains_key(id)));
        assert!(!state.day_errors.contains_key("saturday"));

        state.set_all_end_times("11:00 PM");
        assert!(state.day_errors.is_empty());
    }

    #[test]
    fn test_rejected_submit_moves_to_first_invalid_tab() {
        let mut state = filled();
        state.set_tab(FormTab::Agreement);
        state.edit(Some(FormField::SocialLink), |f| f.social_link = "saharaspa".into());

        let outcome = state.submit(None);
        assert!(matches!(outcome, SubmitOutcome::Rejected { focus: FormTab::Business, .. }));
        assert_eq!(state.active_tab, FormTab::Business);
        assert_eq!(state.errors.get(FormField::SocialLink), Some(MessageKey::SocialLinkInvalid));
        assert_eq!(state.error_count(FormTab::Business), 1);
    }

    #[test]
    fn test_accepted_submit_clears_errors_and_keeps_values() {
        let mut state = filled();
        state.set_all_start_times("06:00 PM");
        state.set_agreement(false);
        state.submit(None);
        assert!(!state.errors.is_empty());
        assert!(!state.day_errors.is_empty());

        state.set_all_start_times("09:00 AM");
        state.set_agreement(true);
        state.set_tab(FormTab::Plans);
        let outcome = state.submit(None);

        assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
        assert!(state.errors.is_empty());
        assert!(state.day_errors.is_empty());
        assert_eq!(state.active_tab, FormTab::Plans);
        assert_eq!(state.form.business_name, "Sahara Spa");
    }

    #[test]
    fn test_tab_navigation_stops_at_ends() {
        let mut state = BookingFormState::new(FormTab::Business);
        assert!(!state.prev_tab());
        assert!(state.next_tab());
        assert!(state.next_tab());
        assert!(state.next_tab());
        assert_eq!(state.active_tab, FormTab::Agreement);
        assert!(!state.next_tab());
        assert!(!state.set_tab(FormTab::Agreement));
        assert!(state.prev_tab());
        assert_eq!(state.active_tab, FormTab::Plans);
    }
}
