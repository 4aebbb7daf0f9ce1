pub mod time_picker;
pub mod ui;
