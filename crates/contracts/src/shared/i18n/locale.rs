use serde::{Deserialize, Serialize};

/// Interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Language code, used in the URL and the `lang` attribute
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Language name in the language itself
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Value for the `dir` attribute of the document root
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn all() -> [Locale; 2] {
        [Locale::En, Locale::Ar]
    }

    /// Parse a language code, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Locale from the first segment of a URL path (`/ar/...` -> Ar),
    /// `None` when the path carries no known prefix
    pub fn from_path(path: &str) -> Option<Self> {
        path.trim_start_matches('/')
            .split('/')
            .next()
            .and_then(Locale::from_code)
    }

    /// Startup locale: the path prefix wins, then the stored code, then
    /// `default`
    pub fn resolve(path: &str, stored: Option<&str>, default: Locale) -> Self {
        Locale::from_path(path)
            .or_else(|| stored.and_then(Locale::from_code))
            .unwrap_or(default)
    }

    /// Path prefix for this locale
    pub fn path(&self) -> String {
        format!("/{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Locale::from_path("/ar"), Some(Locale::Ar));
        assert_eq!(Locale::from_path("/ar/booking"), Some(Locale::Ar));
        assert_eq!(Locale::from_path("/EN"), Some(Locale::En));
        assert_eq!(Locale::from_path("/"), None);
        assert_eq!(Locale::from_path("/fr"), None);
        assert_eq!(Locale::from_path("/arabic/en"), None);
        assert_eq!(Locale::from_path(""), None);
    }

    #[test]
    fn test_resolve_order() {
        assert_eq!(Locale::resolve("/ar", Some("en"), Locale::En), Locale::Ar);
        assert_eq!(Locale::resolve("/", Some("ar"), Locale::En), Locale::Ar);
        assert_eq!(Locale::resolve("/fr", Some("de"), Locale::En), Locale::En);
        assert_eq!(Locale::resolve("", None, Locale::En), Locale::En);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
        assert_eq!(Locale::Ar.path(), "/ar");
    }
}
