//! Conferencing (video call) attached to an event.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Conferencing for an event: either manually specified `details` or a
/// request for the service to `autocreate` a meeting.
///
/// Holding both is allowed here; `Event::validate` rejects it before saving.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conferencing {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ConferencingDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocreate: Option<Autocreate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConferencingDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Autocreate {
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl Conferencing {
    pub fn with_details(provider: &str, details: ConferencingDetails) -> Self {
        Conferencing {
            provider: provider.to_string(),
            details: Some(details),
            autocreate: None,
        }
    }

    pub fn with_autocreate(provider: &str, autocreate: Autocreate) -> Self {
        Conferencing {
            provider: provider.to_string(),
            details: None,
            autocreate: Some(autocreate),
        }
    }

    /// `details` and `autocreate` are mutually exclusive.
    pub fn is_exclusive(&self) -> bool {
        !(self.details.is_some() && self.autocreate.is_some())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_exclusive() {
            Ok(())
        } else {
            Err(ValidationError::ConferencingConflict)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn zoom_details() -> ConferencingDetails {
        ConferencingDetails {
            url: Some("https://us02web.zoom.us/j/****************".to_string()),
            meeting_code: Some("213".to_string()),
            password: Some("xyz".to_string()),
            pin: None,
            phone: Some(vec!["+11234567890".to_string()]),
        }
    }

    #[test]
    fn test_details_wire_names() {
        let conferencing = Conferencing::with_details("Zoom Meeting", zoom_details());
        assert_eq!(
            serde_json::to_value(&conferencing).unwrap(),
            json!({
                "provider": "Zoom Meeting",
                "details": {
                    "url": "https://us02web.zoom.us/j/****************",
                    "meeting_code": "213",
                    "password": "xyz",
                    "phone": ["+11234567890"]
                }
            })
        );
    }

    #[test]
    fn test_autocreate_settings_pass_through() {
        let mut settings = serde_json::Map::new();
        settings.insert("password".to_string(), json!("1234"));
        let conferencing = Conferencing::with_autocreate("Zoom Meeting", Autocreate { settings });

        let value = serde_json::to_value(&conferencing).unwrap();
        assert_eq!(
            value,
            json!({
                "provider": "Zoom Meeting",
                "autocreate": {"settings": {"password": "1234"}}
            })
        );
        assert_eq!(serde_json::from_value::<Conferencing>(value).unwrap(), conferencing);
    }

    #[test]
    fn test_both_details_and_autocreate_fail_validation() {
        let mut conferencing = Conferencing::with_details("Zoom Meeting", zoom_details());
        assert!(conferencing.validate().is_ok());

        conferencing.autocreate = Some(Autocreate::default());
        assert!(!conferencing.is_exclusive());
        assert_eq!(
            conferencing.validate(),
            Err(ValidationError::ConferencingConflict)
        );
    }
}
