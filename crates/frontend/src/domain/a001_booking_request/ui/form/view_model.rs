use super::model::{self, SelectedLogo};
use crate::shared::toast::ToastService;
use contracts::domain::a001_booking_request::{
    BookingFormState, BookingRequestDto, DayErrors, FormField, FormTab, SubmitOutcome, WorkingDay,
};
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;
use web_sys::File;

/// View model of the booking intake form
///
/// All form transitions live in [`BookingFormState`]; the memos below let
/// views track one slice of it.
#[derive(Clone, Copy)]
pub struct BookingFormVm {
    state: RwSignal<BookingFormState>,
    pub form: Memo<BookingRequestDto>,
    pub day_errors: Memo<DayErrors>,
    pub active_tab: Memo<FormTab>,
    pub logo: RwSignal<Option<SelectedLogo>>,
    toast: ToastService,
}

impl BookingFormVm {
    pub fn new(toast: ToastService) -> Self {
        let state = RwSignal::new(BookingFormState::new(model::read_tab_from_query()));
        let vm = Self {
            state,
            form: Memo::new(move |_| state.with(|s| s.form.clone())),
            day_errors: Memo::new(move |_| state.with(|s| s.day_errors.clone())),
            active_tab: Memo::new(move |_| state.with(|s| s.active_tab)),
            logo: RwSignal::new(None),
            toast,
        };
        vm.init_query_sync();
        vm
    }

    /// Mirror the active tab into `?tab=`
    fn init_query_sync(&self) {
        let active_tab = self.active_tab;
        Effect::new(move |_| {
            model::write_tab_to_query(active_tab.get());
        });
    }

    // ------------------------------------------------------------------
    // Field editing
    // ------------------------------------------------------------------

    pub fn update(&self, field: Option<FormField>, apply: impl FnOnce(&mut BookingRequestDto)) {
        self.state.update(|s| s.edit(field, apply));
    }

    /// Localized error key for a field (tracks errors)
    pub fn error(&self, field: FormField) -> Option<MessageKey> {
        self.state.with(|s| s.errors.get(field))
    }

    pub fn error_count(&self, tab: FormTab) -> usize {
        self.state.with(|s| s.error_count(tab))
    }

    pub fn set_agreement(&self, checked: bool) {
        self.state.update(|s| s.set_agreement(checked));
    }

    // ------------------------------------------------------------------
    // Working days
    // ------------------------------------------------------------------

    pub fn update_day(&self, day: WorkingDay) {
        self.state.update(|s| s.update_day(day));
    }

    pub fn set_all_start_times(&self, time: String) {
        self.state.update(|s| s.set_all_start_times(&time));
    }

    pub fn set_all_end_times(&self, time: String) {
        self.state.update(|s| s.set_all_end_times(&time));
    }

    // ------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------

    pub fn set_tab(&self, tab: FormTab) {
        self.state.update(|s| {
            s.set_tab(tab);
        });
    }

    pub fn next_tab(&self) {
        self.state.update(|s| {
            s.next_tab();
        });
    }

    pub fn prev_tab(&self) {
        self.state.update(|s| {
            s.prev_tab();
        });
    }

    // ------------------------------------------------------------------
    // Logo
    // ------------------------------------------------------------------

    /// Accept a chosen file or report why it was rejected; a rejected file
    /// leaves the current logo in place
    pub fn select_logo(&self, file: File) {
        match model::read_logo(&file) {
            Ok(selected) => {
                log::debug!(
                    "Logo selected: {} ({} bytes)",
                    selected.info.name,
                    selected.info.size
                );
                if let Some(previous) = self.logo.get_untracked() {
                    model::release_logo(&previous);
                }
                self.logo.set(Some(selected));
            }
            Err(err) => {
                log::warn!("Logo rejected: {}", err);
                self.toast.error(MessageKey::ErrorTitle, err.message_key());
            }
        }
    }

    pub fn remove_logo(&self) {
        if let Some(previous) = self.logo.get_untracked() {
            model::release_logo(&previous);
        }
        self.logo.set(None);
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    pub fn submit(&self) {
        let logo = self.logo.with_untracked(|l| l.as_ref().map(|l| l.info.clone()));
        let Some(outcome) = self.state.try_update(|s| s.submit(logo)) else {
            return;
        };

        match outcome {
            SubmitOutcome::Accepted(receipt) => {
                model::log_submission(&receipt);
                self.toast
                    .success(MessageKey::SubmitSuccessTitle, MessageKey::SubmitSuccessBody);
            }
            SubmitOutcome::Rejected { report, focus } => {
                log::debug!(
                    "Submit rejected: {} field error(s), focus '{}'",
                    report.errors.len(),
                    focus.as_str()
                );
                self.toast
                    .error(MessageKey::SubmitRejectedTitle, MessageKey::SubmitRejectedBody);
            }
        }
    }
}
