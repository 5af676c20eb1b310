//! Reminder override returned by the service.

use serde::{Deserialize, Serialize};

/// Reminder settings for an event (`reminders` on the wire).
///
/// When present on an `Event`, the legacy `reminder_minutes` /
/// `reminder_method` scalars are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// String-encoded list, e.g. `"[20]"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_minutes: Option<String>,
    /// e.g. `"popup"`, `"email"`, `"display"`, `"sound"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_method: Option<String>,
}

impl Reminder {
    pub fn new(minutes: &[i64], method: &str) -> Self {
        Reminder {
            reminder_minutes: Some(encode_minutes(minutes)),
            reminder_method: Some(method.to_string()),
        }
    }

    /// Decoded `reminder_minutes`. Unparsable values yield an empty list.
    pub fn minutes(&self) -> Vec<i64> {
        self.reminder_minutes
            .as_deref()
            .map(decode_minutes)
            .unwrap_or_default()
    }
}

pub fn encode_minutes(minutes: &[i64]) -> String {
    let inner: Vec<String> = minutes.iter().map(|m| m.to_string()).collect();
    format!("[{}]", inner.join(","))
}

pub fn decode_minutes(encoded: &str) -> Vec<i64> {
    serde_json::from_str(encoded).unwrap_or_default()
}
