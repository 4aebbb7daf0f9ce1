use crate::shared::i18n::MessageKey;
use serde::{Deserialize, Serialize};

/// Subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Basic,
    Premium,
}

impl Plan {
    pub fn code(&self) -> &'static str {
        match self {
            Plan::Basic => "basic",
            Plan::Premium => "premium",
        }
    }

    pub fn title_key(&self) -> MessageKey {
        match self {
            Plan::Basic => MessageKey::PlanBasicTitle,
            Plan::Premium => MessageKey::PlanPremiumTitle,
        }
    }

    /// Feature bullet points, in display order
    pub fn feature_keys(&self) -> &'static [MessageKey] {
        match self {
            Plan::Basic => &[
                MessageKey::BasicFeatureWebsite,
                MessageKey::BasicFeatureBookings,
                MessageKey::BasicFeatureWhatsapp,
                MessageKey::BasicFeatureAnnualDiscount,
            ],
            Plan::Premium => &[
                MessageKey::PremiumFeatureAllBasic,
                MessageKey::PremiumFeatureBookings,
                MessageKey::PremiumFeatureOnlinePayment,
            ],
        }
    }

    pub fn all() -> [Plan; 2] {
        [Plan::Basic, Plan::Premium]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "basic" => Some(Plan::Basic),
            "premium" => Some(Plan::Premium),
            _ => None,
        }
    }
}
