//! Feature-flag configuration consumed by the functional areas.
//!
//! Flags gate entire areas (pharmacy ordering, doctor booking, chat assistant,
//! promotions); they are provided by the host and treated as data here.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Boolean-valued feature configuration.
///
/// `pharmacy_enabled` gates cart mutation and checkout; `doctor_booking_enabled`
/// gates the analogous booking flow. All flags default to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub pharmacy_enabled: bool,
    pub doctor_booking_enabled: bool,
    pub chatbot_enabled: bool,
    pub ads_enabled: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            pharmacy_enabled: true,
            doctor_booking_enabled: true,
            chatbot_enabled: true,
            ads_enabled: true,
        }
    }
}

impl Features {
    /// All areas switched off (useful as a maintenance-mode baseline).
    pub fn all_disabled() -> Self {
        Self {
            pharmacy_enabled: false,
            doctor_booking_enabled: false,
            chatbot_enabled: false,
            ads_enabled: false,
        }
    }

    /// Fails with `ServiceDisabled` when pharmacy ordering is paused.
    pub fn ensure_pharmacy(&self) -> DomainResult<()> {
        if self.pharmacy_enabled {
            Ok(())
        } else {
            Err(DomainError::service_disabled("pharmacy"))
        }
    }

    /// Fails with `ServiceDisabled` when doctor booking is paused.
    pub fn ensure_doctor_booking(&self) -> DomainResult<()> {
        if self.doctor_booking_enabled {
            Ok(())
        } else {
            Err(DomainError::service_disabled("doctor booking"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let features = Features::default();
        assert!(features.ensure_pharmacy().is_ok());
        assert!(features.ensure_doctor_booking().is_ok());
    }

    #[test]
    fn disabled_pharmacy_names_the_feature() {
        let features = Features {
            pharmacy_enabled: false,
            ..Features::default()
        };
        let err = features.ensure_pharmacy().unwrap_err();
        assert_eq!(err, DomainError::service_disabled("pharmacy"));
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let features: Features = serde_json::from_str(r#"{"pharmacy_enabled":false}"#).unwrap();
        assert!(!features.pharmacy_enabled);
        assert!(features.chatbot_enabled);
    }
}
