//! Logo upload constraints

use crate::shared::config::LogoConfig;
use crate::shared::i18n::MessageKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogoError {
    #[error("logo is {size} bytes, limit is {max} bytes")]
    TooLarge { size: u64, max: u64 },
    #[error("unsupported logo type '{0}'")]
    UnsupportedType(String),
}

impl LogoError {
    /// Message shown to the user
    pub fn message_key(&self) -> MessageKey {
        match self {
            LogoError::TooLarge { .. } => MessageKey::LogoTooLarge,
            LogoError::UnsupportedType(_) => MessageKey::LogoWrongType,
        }
    }
}

/// Metadata of the chosen logo file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoInfo {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

/// Check size first, then type
pub fn validate_logo(info: &LogoInfo, limits: &LogoConfig) -> Result<(), LogoError> {
    if info.size > limits.max_bytes {
        return Err(LogoError::TooLarge {
            size: info.size,
            max: limits.max_bytes,
        });
    }
    let accepted = limits
        .accepted_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(info.mime_type.trim()));
    if !accepted {
        return Err(LogoError::UnsupportedType(info.mime_type.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::config;

    fn logo(size: u64, mime: &str) -> LogoInfo {
        LogoInfo {
            name: "logo".into(),
            size,
            mime_type: mime.into(),
        }
    }

    #[test]
    fn test_accepts_jpeg_and_png_up_to_limit() {
        let limits = &config().logo;
        assert!(validate_logo(&logo(5 * 1024 * 1024, "image/png"), limits).is_ok());
        assert!(validate_logo(&logo(1024, "image/jpeg"), limits).is_ok());
        assert!(validate_logo(&logo(1024, "image/jpg"), limits).is_ok());
    }

    #[test]
    fn test_rejects_oversized() {
        let err = validate_logo(&logo(5 * 1024 * 1024 + 1, "image/png"), &config().logo).unwrap_err();
        assert!(matches!(err, LogoError::TooLarge { .. }));
        assert_eq!(err.message_key(), MessageKey::LogoTooLarge);
    }

    #[test]
    fn test_rejects_other_types() {
        let err = validate_logo(&logo(1024, "image/gif"), &config().logo).unwrap_err();
        assert_eq!(err, LogoError::UnsupportedType("image/gif".into()));
        assert_eq!(err.message_key(), MessageKey::LogoWrongType);
    }
}
