use crate::enums::{PaymentMethod, Plan};
use crate::shared::config::{config, Config};
use crate::shared::i18n::MessageKey;
use serde::{Deserialize, Serialize};

// ============================================================================
// Working day
// ============================================================================

/// A working day: enabled flag and an "hh:mm AM/PM" interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDay {
    pub id: String,
    pub label: String,
    pub enabled: bool,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
}

impl WorkingDay {
    /// Localized day name, falling back to the stored label
    pub fn label_key(&self) -> Option<MessageKey> {
        match self.id.as_str() {
            "monday" => Some(MessageKey::Monday),
            "tuesday" => Some(MessageKey::Tuesday),
            "wednesday" => Some(MessageKey::Wednesday),
            "thursday" => Some(MessageKey::Thursday),
            "friday" => Some(MessageKey::Friday),
            "saturday" => Some(MessageKey::Saturday),
            "sunday" => Some(MessageKey::Sunday),
            _ => None,
        }
    }
}

// ============================================================================
// Form DTO
// ============================================================================

/// Everything the booking intake form collects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequestDto {
    #[serde(rename = "businessName")]
    pub business_name: String,
    #[serde(rename = "businessType")]
    pub business_type: String,
    #[serde(rename = "businessAddress")]
    pub business_address: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub email: String,
    #[serde(rename = "socialLink")]
    pub social_link: String,
    #[serde(rename = "workingDays")]
    pub working_days: Vec<WorkingDay>,
    pub holidays: String,
    pub plan: Plan,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "paymentNotes")]
    pub payment_notes: String,
    pub agreement: bool,
}

impl BookingRequestDto {
    /// Fresh form built from the given configuration
    pub fn from_config(config: &Config) -> Self {
        let working_days = config
            .form
            .working_days
            .iter()
            .map(|day| WorkingDay {
                id: day.id.clone(),
                label: day.label.clone(),
                enabled: day.enabled,
                start_time: config.form.default_start.clone(),
                end_time: config.form.default_end.clone(),
            })
            .collect();

        Self {
            business_name: String::new(),
            business_type: String::new(),
            business_address: String::new(),
            phone_number: String::new(),
            email: String::new(),
            social_link: String::new(),
            working_days,
            holidays: String::new(),
            plan: Plan::default(),
            payment_method: PaymentMethod::default(),
            payment_notes: String::new(),
            agreement: false,
        }
    }

    pub fn enabled_days(&self) -> impl Iterator<Item = &WorkingDay> {
        self.working_days.iter().filter(|d| d.enabled)
    }

    /// Replace one day by id; unknown ids are ignored
    pub fn update_day(&mut self, updated: WorkingDay) {
        if let Some(day) = self.working_days.iter_mut().find(|d| d.id == updated.id) {
            *day = updated;
        }
    }

    pub fn set_all_start_times(&mut self, time: &str) {
        for day in &mut self.working_days {
            day.start_time = time.to_string();
        }
    }

    pub fn set_all_end_times(&mut self, time: &str) {
        for day in &mut self.working_days {
            day.end_time = time.to_string();
        }
    }
}

impl Default for BookingRequestDto {
    fn default() -> Self {
        Self::from_config(config())
    }
}

// ============================================================================
// Tabs and fields
// ============================================================================

/// Form tabs in fill-in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormTab {
    #[default]
    Business,
    Availability,
    Plans,
    Agreement,
}

impl FormTab {
    pub fn all() -> [FormTab; 4] {
        [
            FormTab::Business,
            FormTab::Availability,
            FormTab::Plans,
            FormTab::Agreement,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormTab::Business => "business",
            FormTab::Availability => "availability",
            FormTab::Plans => "plans",
            FormTab::Agreement => "agreement",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        FormTab::all().into_iter().find(|t| t.as_str() == code)
    }

    pub fn title_key(&self) -> MessageKey {
        match self {
            FormTab::Business => MessageKey::TabBusiness,
            FormTab::Availability => MessageKey::TabAvailability,
            FormTab::Plans => MessageKey::TabPlans,
            FormTab::Agreement => MessageKey::TabAgreement,
        }
    }

    pub fn next(&self) -> Option<FormTab> {
        match self {
            FormTab::Business => Some(FormTab::Availability),
            FormTab::Availability => Some(FormTab::Plans),
            FormTab::Plans => Some(FormTab::Agreement),
            FormTab::Agreement => None,
        }
    }

    pub fn prev(&self) -> Option<FormTab> {
        match self {
            FormTab::Business => None,
            FormTab::Availability => Some(FormTab::Business),
            FormTab::Plans => Some(FormTab::Availability),
            FormTab::Agreement => Some(FormTab::Plans),
        }
    }

    /// Label of the "Next" button leading away from this tab
    pub fn next_button_key(&self) -> Option<MessageKey> {
        match self.next()? {
            FormTab::Availability => Some(MessageKey::NextAvailability),
            FormTab::Plans => Some(MessageKey::NextPlans),
            FormTab::Agreement => Some(MessageKey::NextAgreement),
            FormTab::Business => None,
        }
    }
}

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    BusinessName,
    BusinessType,
    BusinessAddress,
    PhoneNumber,
    Email,
    SocialLink,
    WorkingDays,
    Agreement,
}

impl FormField {
    pub fn tab(&self) -> FormTab {
        match self {
            FormField::BusinessName
            | FormField::BusinessType
            | FormField::BusinessAddress
            | FormField::PhoneNumber
            | FormField::Email
            | FormField::SocialLink => FormTab::Business,
            FormField::WorkingDays => FormTab::Availability,
            FormField::Agreement => FormTab::Agreement,
        }
    }

    /// DOM id of the input bound to this field
    pub fn input_id(&self) -> &'static str {
        match self {
            FormField::BusinessName => "businessName",
            FormField::BusinessType => "businessType",
            FormField::BusinessAddress => "businessAddress",
            FormField::PhoneNumber => "phoneNumber",
            FormField::Email => "email",
            FormField::SocialLink => "socialLink",
            FormField::WorkingDays => "workingDays",
            FormField::Agreement => "agreement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let form = BookingRequestDto::default();
        assert!(form.business_name.is_empty());
        assert_eq!(form.plan, Plan::Basic);
        assert_eq!(form.payment_method, PaymentMethod::Bank);
        assert!(!form.agreement);
        assert_eq!(form.working_days.len(), 7);
        assert_eq!(form.enabled_days().count(), 5);
        assert!(form
            .working_days
            .iter()
            .all(|d| d.start_time == "09:00 AM" && d.end_time == "05:00 PM"));
    }

    #[test]
    fn test_tab_order() {
        assert_eq!(FormTab::Business.next(), Some(FormTab::Availability));
        assert_eq!(FormTab::Agreement.next(), None);
        assert_eq!(FormTab::Business.prev(), None);
        assert_eq!(FormTab::Agreement.prev(), Some(FormTab::Plans));
        assert_eq!(FormTab::from_code("plans"), Some(FormTab::Plans));
        assert_eq!(FormTab::from_code("unknown"), None);
        assert_eq!(FormTab::Agreement.next_button_key(), None);
        assert_eq!(
            FormTab::Plans.next_button_key(),
            Some(MessageKey::NextAgreement)
        );
    }

    #[test]
    fn test_bulk_time_update_touches_disabled_days_too() {
        let mut form = BookingRequestDto::default();
        form.set_all_start_times("10:00 AM");
        form.set_all_end_times("06:00 PM");
        assert!(form
            .working_days
            .iter()
            .all(|d| d.start_time == "10:00 AM" && d.end_time == "06:00 PM"));
    }

    #[test]
    fn test_update_day_by_id() {
        let mut form = BookingRequestDto::default();
        let mut sunday = form.working_days[6].clone();
        sunday.enabled = true;
        form.update_day(sunday);
        assert!(form.working_days[6].enabled);

        let ghost = WorkingDay {
            id: "holiday".into(),
            label: "Holiday".into(),
            enabled: true,
            start_time: String::new(),
            end_time: String::new(),
        };
        form.update_day(ghost);
        assert_eq!(form.working_days.len(), 7);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(BookingRequestDto::default()).unwrap();
        assert!(json.get("businessName").is_some());
        assert!(json.get("paymentMethod").is_some());
        assert_eq!(json["workingDays"][0]["startTime"], "09:00 AM");
    }
}
