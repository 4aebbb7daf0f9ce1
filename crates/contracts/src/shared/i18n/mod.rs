//! Interface localization (en / ar)

mod locale;
mod messages;

pub use locale::Locale;
pub use messages::{t, MessageKey};
