pub mod form;

pub use form::BookingFormPage;
