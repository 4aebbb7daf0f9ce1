//! Validation of the booking request form
//!
//! Validation never fails: it returns a [`ValidationReport`] with message
//! keys per field and per working day. The UI resolves the keys in the
//! active locale.

use super::aggregate::{BookingRequestDto, FormField, FormTab, WorkingDay};
use crate::shared::i18n::MessageKey;
use crate::shared::time_of_day::TimeOfDay;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+").expect("url pattern compiles"));

// ============================================================================
// Field rules
// ============================================================================

/// Rules for a single text field
#[derive(Clone, Copy)]
struct TextRule {
    field: FormField,
    required: MessageKey,
    pattern: Option<(&'static Lazy<Regex>, MessageKey)>,
}

impl TextRule {
    fn check(&self, value: &str) -> Option<MessageKey> {
        if value.trim().is_empty() {
            return Some(self.required);
        }
        match self.pattern {
            Some((re, invalid)) if !re.is_match(value) => Some(invalid),
            _ => None,
        }
    }
}

fn text_rules() -> [(TextRule, fn(&BookingRequestDto) -> &str); 6] {
    [
        (
            TextRule {
                field: FormField::BusinessName,
                required: MessageKey::BusinessNameRequired,
                pattern: None,
            },
            |f| f.business_name.as_str(),
        ),
        (
            TextRule {
                field: FormField::BusinessType,
                required: MessageKey::BusinessTypeRequired,
                pattern: None,
            },
            |f| f.business_type.as_str(),
        ),
        (
            TextRule {
                field: FormField::BusinessAddress,
                required: MessageKey::BusinessAddressRequired,
                pattern: None,
            },
            |f| f.business_address.as_str(),
        ),
        (
            TextRule {
                field: FormField::PhoneNumber,
                required: MessageKey::PhoneRequired,
                pattern: None,
            },
            |f| f.phone_number.as_str(),
        ),
        (
            TextRule {
                field: FormField::Email,
                required: MessageKey::EmailRequired,
                pattern: Some((&EMAIL_RE, MessageKey::EmailInvalid)),
            },
            |f| f.email.as_str(),
        ),
        (
            TextRule {
                field: FormField::SocialLink,
                required: MessageKey::SocialLinkRequired,
                pattern: Some((&URL_RE, MessageKey::SocialLinkInvalid)),
            },
            |f| f.social_link.as_str(),
        ),
    ]
}

// ============================================================================
// Error containers
// ============================================================================

/// Field -> message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<FormField, MessageKey>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> Option<MessageKey> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: FormField, message: MessageKey) {
        self.0.insert(field, message);
    }

    /// Returns true if an error was present
    pub fn remove(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, MessageKey)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }
}

/// Errors of one working day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayError {
    pub start: Option<MessageKey>,
    pub end: Option<MessageKey>,
    pub range: Option<MessageKey>,
}

impl DayError {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.range.is_none()
    }
}

/// Day id -> errors
pub type DayErrors = BTreeMap<String, DayError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: ValidationErrors,
    pub day_errors: DayErrors,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.day_errors.is_empty()
    }

    /// Tab to show after a failed submit
    pub fn first_invalid_tab(&self) -> Option<FormTab> {
        first_invalid_tab(&self.errors)
    }
}

// ============================================================================
// Validation
// ============================================================================

fn validate_day(day: &WorkingDay) -> DayError {
    let mut error = DayError::default();
    if day.start_time.trim().is_empty() {
        error.start = Some(MessageKey::StartTimeRequired);
    }
    if day.end_time.trim().is_empty() {
        error.end = Some(MessageKey::EndTimeRequired);
    }
    if !error.is_empty() {
        return error;
    }

    match (TimeOfDay::parse(&day.start_time), TimeOfDay::parse(&day.end_time)) {
        (Ok(start), Ok(end)) if end <= start => error.range = Some(MessageKey::EndBeforeStart),
        (Ok(_), Ok(_)) => {}
        _ => error.range = Some(MessageKey::InvalidTime),
    }
    error
}

/// Per-day checks for enabled days; disabled days are never reported
pub fn validate_working_days(days: &[WorkingDay]) -> DayErrors {
    days.iter()
        .filter(|d| d.enabled)
        .map(|d| (d.id.clone(), validate_day(d)))
        .filter(|(_, e)| !e.is_empty())
        .collect()
}

/// Summary message for the availability section, if any
fn working_days_error(days: &[WorkingDay], day_errors: &DayErrors) -> Option<MessageKey> {
    let mut enabled = days.iter().filter(|d| d.enabled).peekable();
    if enabled.peek().is_none() {
        return Some(MessageKey::WorkingDaysNone);
    }
    if enabled.any(|d| d.start_time.trim().is_empty() || d.end_time.trim().is_empty()) {
        return Some(MessageKey::WorkingHoursRequired);
    }
    if !day_errors.is_empty() {
        return Some(MessageKey::WorkingDaysFixRanges);
    }
    None
}

/// Validate the whole form
pub fn validate(form: &BookingRequestDto) -> ValidationReport {
    let mut errors = ValidationErrors::new();

    for (rule, value) in text_rules() {
        if let Some(message) = rule.check(value(form)) {
            errors.insert(rule.field, message);
        }
    }

    let day_errors = validate_working_days(&form.working_days);
    if let Some(message) = working_days_error(&form.working_days, &day_errors) {
        errors.insert(FormField::WorkingDays, message);
    }

    if !form.agreement {
        errors.insert(FormField::Agreement, MessageKey::AgreementRequired);
    }

    ValidationReport { errors, day_errors }
}

/// First tab, in tab order, that owns an invalid field
pub fn first_invalid_tab(errors: &ValidationErrors) -> Option<FormTab> {
    FormTab::all()
        .into_iter()
        .find(|tab| errors.fields().any(|f| f.tab() == *tab))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> BookingRequestDto {
        BookingRequestDto {
            business_name: "Layla Beauty".into(),
            business_type: "Salon".into(),
            business_address: "Al Wasl Road, Dubai".into(),
            phone_number: "+971 50 123 4567".into(),
            email: "owner@layla.ae".into(),
            social_link: "https://instagram.com/laylabeauty".into(),
            agreement: true,
            ..BookingRequestDto::default()
        }
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let mut form = BookingRequestDto::default();
        for day in &mut form.working_days {
            day.enabled = false;
        }
        let report = validate(&form);

        assert_eq!(report.errors.get(FormField::BusinessName), Some(MessageKey::BusinessNameRequired));
        assert_eq!(report.errors.get(FormField::BusinessType), Some(MessageKey::BusinessTypeRequired));
        assert_eq!(report.errors.get(FormField::BusinessAddress), Some(MessageKey::BusinessAddressRequired));
        assert_eq!(report.errors.get(FormField::PhoneNumber), Some(MessageKey::PhoneRequired));
        assert_eq!(report.errors.get(FormField::Email), Some(MessageKey::EmailRequired));
        assert_eq!(report.errors.get(FormField::SocialLink), Some(MessageKey::SocialLinkRequired));
        assert_eq!(report.errors.get(FormField::WorkingDays), Some(MessageKey::WorkingDaysNone));
        assert_eq!(report.errors.get(FormField::Agreement), Some(MessageKey::AgreementRequired));
        assert_eq!(report.errors.len(), 8);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_default_form_only_misses_text_and_agreement() {
        let report = validate(&BookingRequestDto::default());
        assert!(!report.errors.contains(FormField::WorkingDays));
        assert!(report.day_errors.is_empty());
        assert_eq!(report.errors.len(), 7);
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut form = valid_form();
        form.business_name = "   ".into();
        let report = validate(&form);
        assert_eq!(report.errors.get(FormField::BusinessName), Some(MessageKey::BusinessNameRequired));
    }

    #[test]
    fn test_email_without_at_is_invalid() {
        let mut form = valid_form();
        form.email = "owner.layla.ae".into();
        let report = validate(&form);
        assert_eq!(report.errors.get(FormField::Email), Some(MessageKey::EmailInvalid));
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_email_without_domain_dot_is_invalid() {
        let mut form = valid_form();
        form.email = "owner@layla".into();
        assert_eq!(validate(&form).errors.get(FormField::Email), Some(MessageKey::EmailInvalid));
    }

    #[test]
    fn test_social_link_needs_scheme() {
        let mut form = valid_form();
        form.social_link = "instagram.com/laylabeauty".into();
        assert_eq!(
            validate(&form).errors.get(FormField::SocialLink),
            Some(MessageKey::SocialLinkInvalid)
        );
        form.social_link = "http://wa.me/971501234567".into();
        assert!(!validate(&form).errors.contains(FormField::SocialLink));
    }

    #[test]
    fn test_end_before_start_is_range_error() {
        let mut form = valid_form();
        form.working_days[0].start_time = "05:00 PM".into();
        form.working_days[0].end_time = "09:00 AM".into();
        let report = validate(&form);

        let monday = report.day_errors.get("monday").copied().unwrap_or_default();
        assert_eq!(monday.range, Some(MessageKey::EndBeforeStart));
        assert_eq!(report.errors.get(FormField::WorkingDays), Some(MessageKey::WorkingDaysFixRanges));
    }

    #[test]
    fn test_equal_times_are_range_error() {
        let mut form = valid_form();
        form.working_days[1].start_time = "09:00 AM".into();
        form.working_days[1].end_time = "09:00 AM".into();
        let report = validate(&form);
        assert_eq!(
            report.day_errors.get("tuesday").and_then(|e| e.range),
            Some(MessageKey::EndBeforeStart)
        );
    }

    #[test]
    fn test_disabled_day_is_not_checked() {
        let mut form = valid_form();
        let saturday = &mut form.working_days[5];
        assert!(!saturday.enabled);
        saturday.start_time = "11:00 PM".into();
        saturday.end_time = "01:00 AM".into();
        assert!(validate(&form).is_valid());
    }

    #[test]
    fn test_blank_hours_on_enabled_day() {
        let mut form = valid_form();
        form.working_days[2].end_time = String::new();
        let report = validate(&form);
        let wednesday = report.day_errors.get("wednesday").copied().unwrap_or_default();
        assert_eq!(wednesday.end, Some(MessageKey::EndTimeRequired));
        assert_eq!(wednesday.range, None);
        assert_eq!(report.errors.get(FormField::WorkingDays), Some(MessageKey::WorkingHoursRequired));
    }

    #[test]
    fn test_unparseable_time() {
        let mut form = valid_form();
        form.working_days[3].start_time = "nine".into();
        let report = validate(&form);
        assert_eq!(
            report.day_errors.get("thursday").and_then(|e| e.range),
            Some(MessageKey::InvalidTime)
        );
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let report = validate(&valid_form());
        assert!(report.is_valid());
        assert_eq!(report.first_invalid_tab(), None);
    }

    #[test]
    fn test_first_invalid_tab_follows_tab_order() {
        let mut form = valid_form();
        form.agreement = false;
        assert_eq!(validate(&form).first_invalid_tab(), Some(FormTab::Agreement));

        form.working_days.iter_mut().for_each(|d| d.enabled = false);
        assert_eq!(validate(&form).first_invalid_tab(), Some(FormTab::Availability));

        form.phone_number.clear();
        assert_eq!(validate(&form).first_invalid_tab(), Some(FormTab::Business));
    }
}
