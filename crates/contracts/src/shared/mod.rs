pub mod config;
pub mod i18n;
pub mod logo;
pub mod time_of_day;
