//! The Event aggregate.
//!
//! An `Event` owns its time range, participants and sub-objects. It is built
//! client-side without an id; `save` creates it (POST) or updates it (PUT)
//! and the service's response is applied back onto the instance.

mod remote;
mod wire;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conferencing::Conferencing;
use crate::error::ValidationError;
use crate::notification::Notification;
use crate::participant::Participant;
use crate::reminder::Reminder;
use crate::time_range::{Endpoint, TimeRange};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    /// Server-assigned; absent until the first successful create
    pub id: Option<String>,
    pub calendar_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub busy: Option<bool>,
    pub participants: Vec<Participant>,
    /// `None` is an unset range and goes out as `{}`
    pub when: Option<TimeRange>,
    pub recurrence: Option<Recurrence>,
    /// `-1` means unlimited
    pub capacity: Option<i64>,
    pub metadata: Option<HashMap<String, String>>,
    /// `Some(vec![])` is sent as `[]`; `None` omits the key
    pub notifications: Option<Vec<Notification>>,
    pub reminders: Option<Reminder>,
    /// Legacy scalar, suppressed when `reminders` is set
    pub reminder_minutes: Option<String>,
    /// Legacy scalar, suppressed when `reminders` is set
    pub reminder_method: Option<String>,
    pub conferencing: Option<Conferencing>,
    pub hide_participants: Option<bool>,
    pub visibility: Option<String>,

    // Read-only, populated from the service's responses
    pub object: Option<String>,
    pub account_id: Option<String>,
    pub owner: Option<String>,
    pub message_id: Option<String>,
    pub ical_uid: Option<String>,
    pub master_event_id: Option<String>,
    pub original_start_time: Option<DateTime<Utc>>,
    pub event_collection_id: Option<String>,
    pub round_robin_order: Option<Vec<String>>,
    pub read_only: Option<bool>,
    pub status: Option<EventStatus>,
    pub job_status_id: Option<String>,
    pub organizer_email: Option<String>,
    pub organizer_name: Option<String>,
}

/// Recurrence rules for a master event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recurrence {
    /// e.g. `["RRULE:FREQ=WEEKLY;BYDAY=MO"]`
    pub rrule: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Confirmed,
    Tentative,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// Response sent through `Event::rsvp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
}

impl std::str::FromStr for RsvpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(RsvpStatus::Yes),
            "no" => Ok(RsvpStatus::No),
            "maybe" => Ok(RsvpStatus::Maybe),
            other => Err(format!("Invalid RSVP status '{}'. Expected yes, no or maybe", other)),
        }
    }
}

impl Event {
    pub fn new(calendar_id: impl Into<String>) -> Self {
        Event {
            calendar_id: calendar_id.into(),
            ..Default::default()
        }
    }

    /// True once the service has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn start(&self) -> Option<Endpoint> {
        self.when.as_ref().map(TimeRange::start)
    }

    pub fn end(&self) -> Option<Endpoint> {
        self.when.as_ref().map(TimeRange::end)
    }

    /// Set the start, creating the range if needed. The resulting shape
    /// follows from the value kind and whether it equals the current end.
    pub fn set_start(&mut self, start: impl Into<Endpoint>) {
        let start = start.into();
        self.when = Some(match self.when {
            Some(range) => range.with_start(start),
            None => TimeRange::point(start),
        });
    }

    /// Set the end, creating the range if needed.
    pub fn set_end(&mut self, end: impl Into<Endpoint>) {
        let end = end.into();
        self.when = Some(match self.when {
            Some(range) => range.with_end(end),
            None => TimeRange::point(end),
        });
    }

    /// Check cross-field rules. Runs before any request is issued and stops
    /// at the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(conferencing) = &self.conferencing {
            conferencing.validate()?;
        }

        // Negative capacities (-1) are unlimited
        if let Some(capacity) = self.capacity {
            if let Ok(limit) = usize::try_from(capacity) {
                if self.participants.len() > limit {
                    return Err(ValidationError::CapacityExceeded {
                        participants: self.participants.len(),
                        capacity,
                    });
                }
            }
        }

        Ok(())
    }
}
