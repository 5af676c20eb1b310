//! Notifications the service sends ahead of an event.

use serde::{Deserialize, Serialize};

/// A notification, sent `minutes_before_event` ahead of the start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_before_event: Option<i64>,
    #[serde(flatten)]
    pub kind: NotificationKind,
}

/// Channel-specific payload, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NotificationKind {
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subject: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
    Sms {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Webhook {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        /// Opaque string, usually serialized JSON
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<String>,
    },
}

impl Notification {
    pub fn email(minutes_before_event: i64, subject: &str, body: &str) -> Self {
        Notification {
            minutes_before_event: Some(minutes_before_event),
            kind: NotificationKind::Email {
                subject: Some(subject.to_string()),
                body: Some(body.to_string()),
            },
        }
    }

    pub fn sms(minutes_before_event: i64, message: &str) -> Self {
        Notification {
            minutes_before_event: Some(minutes_before_event),
            kind: NotificationKind::Sms {
                message: Some(message.to_string()),
            },
        }
    }

    pub fn webhook(minutes_before_event: i64, url: &str, payload: &str) -> Self {
        Notification {
            minutes_before_event: Some(minutes_before_event),
            kind: NotificationKind::Webhook {
                url: Some(url.to_string()),
                payload: Some(payload.to_string()),
            },
        }
    }

    /// The wire `type` value.
    pub fn channel(&self) -> &'static str {
        match self.kind {
            NotificationKind::Email { .. } => "email",
            NotificationKind::Sms { .. } => "sms",
            NotificationKind::Webhook { .. } => "webhook",
        }
    }
}
