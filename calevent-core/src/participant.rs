//! Event participants.

use serde::{Deserialize, Serialize};

/// A participant's response to the invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Yes,
    No,
    Maybe,
    Noreply,
    /// A status this client does not know; never sent back
    #[serde(other)]
    Unknown,
}

/// An event participant, identified by email.
///
/// Duplicate participants are allowed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    /// Only sent when the event is created; the service owns it afterwards.
    #[serde(default)]
    pub status: Option<ParticipantStatus>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl Participant {
    pub fn new(email: impl Into<String>) -> Self {
        Participant {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Wire form. `include_status` is true only when creating the event.
    pub fn to_wire(&self, include_status: bool) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(ParticipantWire::new(self, include_status))
    }

    pub fn from_wire(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ParticipantWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ParticipantStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<&'a str>,
}

impl<'a> ParticipantWire<'a> {
    pub(crate) fn new(participant: &'a Participant, include_status: bool) -> Self {
        ParticipantWire {
            name: participant.name.as_deref(),
            email: &participant.email,
            status: participant
                .status
                .filter(|s| include_status && *s != ParticipantStatus::Unknown),
            comment: participant.comment.as_deref(),
            phone_number: participant.phone_number.as_deref(),
        }
    }
}
