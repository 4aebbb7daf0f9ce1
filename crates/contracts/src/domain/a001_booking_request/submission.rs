//! Placeholder submission: a valid form becomes a receipt that the UI logs

use super::aggregate::{BookingRequestDto, FormTab};
use super::validation::{validate, ValidationReport};
use crate::shared::logo::LogoInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of an accepted submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
    pub form: BookingRequestDto,
    pub logo: Option<LogoInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted(SubmissionReceipt),
    Rejected {
        report: ValidationReport,
        /// Tab to activate
        focus: FormTab,
    },
}

/// Validate and, if the form is valid, issue a receipt
pub fn submit(form: &BookingRequestDto, logo: Option<LogoInfo>) -> SubmitOutcome {
    let report = validate(form);
    if report.is_valid() {
        return SubmitOutcome::Accepted(SubmissionReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form: form.clone(),
            logo,
        });
    }

    // Day errors always come with a working_days error, so a tab exists
    let focus = report.first_invalid_tab().unwrap_or(FormTab::Availability);
    SubmitOutcome::Rejected { report, focus }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_booking_request::aggregate::FormField;

    fn filled() -> BookingRequestDto {
        BookingRequestDto {
            business_name: "Noor Clinic".into(),
            business_type: "Clinic".into(),
            business_address: "Corniche Road, Abu Dhabi".into(),
            phone_number: "+971 2 555 0101".into(),
            email: "hello@noorclinic.ae".into(),
            social_link: "https://wa.me/97125550101".into(),
            agreement: true,
            ..BookingRequestDto::default()
        }
    }

    #[test]
    fn test_valid_form_is_accepted() {
        let logo = LogoInfo {
            name: "noor.png".into(),
            size: 2048,
            mime_type: "image/png".into(),
        };
        match submit(&filled(), Some(logo.clone())) {
            SubmitOutcome::Accepted(receipt) => {
                assert_eq!(receipt.form, filled());
                assert_eq!(receipt.logo, Some(logo));
                assert_eq!(receipt.id.get_version_num(), 4);
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_form_is_rejected_on_business_tab() {
        match submit(&BookingRequestDto::default(), None) {
            SubmitOutcome::Rejected { report, focus } => {
                assert_eq!(focus, FormTab::Business);
                assert!(report.errors.contains(FormField::BusinessName));
                assert!(report.errors.contains(FormField::Agreement));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_only_agreement_missing_focuses_agreement_tab() {
        let mut form = filled();
        form.agreement = false;
        match submit(&form, None) {
            SubmitOutcome::Rejected { report, focus } => {
                assert_eq!(focus, FormTab::Agreement);
                assert_eq!(report.errors.len(), 1);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let SubmitOutcome::Accepted(receipt) = submit(&filled(), None) else {
            panic!("expected acceptance");
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert!(json.get("submittedAt").is_some());
        assert_eq!(json["form"]["businessName"], "Noor Clinic");
    }
}
