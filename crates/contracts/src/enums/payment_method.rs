use crate::shared::i18n::MessageKey;
use serde::{Deserialize, Serialize};

/// How the subscription is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Bank,
    Cash,
    Online,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Bank => "bank",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Online => "online",
        }
    }

    pub fn label_key(&self) -> MessageKey {
        match self {
            PaymentMethod::Bank => MessageKey::PaymentBank,
            PaymentMethod::Cash => MessageKey::PaymentCash,
            PaymentMethod::Online => MessageKey::PaymentOnline,
        }
    }

    pub fn all() -> [PaymentMethod; 3] {
        [PaymentMethod::Bank, PaymentMethod::Cash, PaymentMethod::Online]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bank" => Some(PaymentMethod::Bank),
            "cash" => Some(PaymentMethod::Cash),
            "online" => Some(PaymentMethod::Online),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Plan;

    #[test]
    fn test_codes_round_trip() {
        for method in PaymentMethod::all() {
            assert_eq!(PaymentMethod::from_code(method.code()), Some(method));
        }
        for plan in Plan::all() {
            assert_eq!(Plan::from_code(plan.code()), Some(plan));
        }
        assert_eq!(PaymentMethod::from_code("crypto"), None);
    }

    #[test]
    fn test_serialized_as_codes() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Online).unwrap(), "\"online\"");
        assert_eq!(serde_json::to_string(&Plan::Premium).unwrap(), "\"premium\"");
    }
}
