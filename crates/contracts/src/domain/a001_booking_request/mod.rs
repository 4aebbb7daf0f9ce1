pub mod aggregate;
pub mod form_state;
pub mod submission;
pub mod validation;

pub use aggregate::{BookingRequestDto, FormField, FormTab, WorkingDay};
pub use form_state::BookingFormState;
pub use submission::{submit, SubmissionReceipt, SubmitOutcome};
pub use validation::{
    first_invalid_tab, validate, validate_working_days, DayError, DayErrors, ValidationErrors,
    ValidationReport,
};
