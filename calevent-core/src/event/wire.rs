//! Mapping between `Event` and its wire object.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Event, EventStatus, Recurrence};
use crate::conferencing::Conferencing;
use crate::notification::Notification;
use crate::participant::{Participant, ParticipantWire};
use crate::reminder::Reminder;
use crate::serde_helpers::{present, string_or_number};
use crate::time_range::WhenWire;

/// Outgoing body for create, update and ICS generation.
///
/// `calendar_id`, `when` and `participants` are always present; every other
/// key is omitted unless the field is set.
#[derive(Debug, Serialize)]
struct EventPayload<'a> {
    calendar_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    busy: Option<bool>,
    when: WhenWire,
    participants: Vec<ParticipantWire<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notifications: Option<&'a [Notification]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recurrence: Option<&'a Recurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conferencing: Option<&'a Conferencing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reminder_minutes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reminder_method: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hide_participants: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visibility: Option<&'a str>,
}

/// Everything the event holds, server fields included. Reads back through
/// `Event::from_wire`.
#[derive(Debug, Serialize)]
struct EventSnapshot<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(flatten)]
    payload: EventPayload<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reminders: Option<&'a Reminder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    object: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ical_uid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    master_event_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_collection_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    round_robin_order: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<EventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_status_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organizer_email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organizer_name: Option<&'a str>,
}

/// `None`: key absent. `Some(None)`: key sent as `null`.
type Field<T> = Option<Option<T>>;

/// Incoming wire object. Only keys present in a response touch local
/// state; a `null` clears the field.
#[derive(Debug, Default, Deserialize)]
struct EventPatch {
    #[serde(default, deserialize_with = "present")]
    id: Field<String>,
    #[serde(default, deserialize_with = "present")]
    object: Field<String>,
    #[serde(default, deserialize_with = "present")]
    account_id: Field<String>,
    #[serde(default, deserialize_with = "present")]
    calendar_id: Field<String>,
    #[serde(default, deserialize_with = "present")]
    title: Field<String>,
    #[serde(default, deserialize_with = "present")]
    description: Field<String>,
    #[serde(default, deserialize_with = "present")]
    location: Field<String>,
    #[serde(default, deserialize_with = "present")]
    busy: Field<bool>,
    #[serde(default, deserialize_with = "present")]
    participants: Field<Vec<Participant>>,
    #[serde(default, deserialize_with = "present")]
    when: Field<WhenWire>,
    #[serde(default, deserialize_with = "present")]
    recurrence: Field<Recurrence>,
    #[serde(default, deserialize_with = "present")]
    capacity: Field<i64>,
    #[serde(default, deserialize_with = "present")]
    metadata: Field<HashMap<String, String>>,
    #[serde(default, deserialize_with = "present")]
    notifications: Field<Vec<Notification>>,
    #[serde(default, deserialize_with = "present")]
    reminders: Field<Reminder>,
    #[serde(default, deserialize_with = "present")]
    reminder_minutes: Field<String>,
    #[serde(default, deserialize_with = "present")]
    reminder_method: Field<String>,
    #[serde(default, deserialize_with = "present")]
    conferencing: Field<Conferencing>,
    #[serde(default, deserialize_with = "present")]
    hide_participants: Field<bool>,
    #[serde(default, deserialize_with = "present")]
    visibility: Field<String>,
    #[serde(default, deserialize_with = "present")]
    owner: Field<String>,
    #[serde(default, deserialize_with = "present")]
    message_id: Field<String>,
    #[serde(default, deserialize_with = "present")]
    ical_uid: Field<String>,
    #[serde(default, deserialize_with = "present")]
    master_event_id: Field<String>,
    /// Unix seconds
    #[serde(default, deserialize_with = "present")]
    original_start_time: Field<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    event_collection_id: Field<String>,
    #[serde(default, deserialize_with = "present")]
    round_robin_order: Field<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    read_only: Field<bool>,
    #[serde(default, deserialize_with = "present")]
    status: Field<EventStatus>,
    #[serde(default, deserialize_with = "present")]
    job_status_id: Field<String>,
    #[serde(default, deserialize_with = "present")]
    organizer_email: Field<String>,
    #[serde(default, deserialize_with = "present")]
    organizer_name: Field<String>,
}

fn overwrite<T>(slot: &mut Option<T>, value: Field<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn timestamp(ts: i64) -> Result<DateTime<Utc>, serde_json::Error> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| {
        <serde_json::Error as serde::de::Error>::custom(format!(
            "original_start_time {} is out of range",
            ts
        ))
    })
}

impl Event {
    fn payload(&self, include_status: bool, legacy_reminders: bool) -> EventPayload<'_> {
        EventPayload {
            calendar_id: &self.calendar_id,
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            location: self.location.as_deref(),
            busy: self.busy,
            when: WhenWire::from_range(self.when.as_ref()),
            participants: self
                .participants
                .iter()
                .map(|p| ParticipantWire::new(p, include_status))
                .collect(),
            notifications: self.notifications.as_deref(),
            metadata: self.metadata.as_ref(),
            recurrence: self.recurrence.as_ref(),
            conferencing: self.conferencing.as_ref(),
            capacity: self.capacity,
            reminder_minutes: self
                .reminder_minutes
                .as_deref()
                .filter(|_| legacy_reminders),
            reminder_method: self.reminder_method.as_deref().filter(|_| legacy_reminders),
            hide_participants: self.hide_participants,
            visibility: self.visibility.as_deref(),
        }
    }

    /// Serialize to the wire object.
    ///
    /// Participant `status` is only sent while the event has no id (create).
    /// A set `reminders` object suppresses the legacy reminder scalars.
    pub fn to_wire(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self.payload(self.id.is_none(), self.reminders.is_none()))
    }

    /// Serialize every field, including the id, participant statuses,
    /// `reminders` and the read-only server fields.
    pub fn to_snapshot(&self) -> Result<serde_json::Value, serde_json::Error> {
        let snapshot = EventSnapshot {
            id: self.id.as_deref(),
            payload: self.payload(true, true),
            reminders: self.reminders.as_ref(),
            object: self.object.as_deref(),
            account_id: self.account_id.as_deref(),
            owner: self.owner.as_deref(),
            message_id: self.message_id.as_deref(),
            ical_uid: self.ical_uid.as_deref(),
            master_event_id: self.master_event_id.as_deref(),
            original_start_time: self.original_start_time.map(|t| t.timestamp()),
            event_collection_id: self.event_collection_id.as_deref(),
            round_robin_order: self.round_robin_order.as_deref(),
            read_only: self.read_only,
            status: self.status,
            job_status_id: self.job_status_id.as_deref(),
            organizer_email: self.organizer_email.as_deref(),
            organizer_name: self.organizer_name.as_deref(),
        };

        serde_json::to_value(snapshot)
    }

    /// Build a new event from a wire object.
    pub fn from_wire(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut event = Event::default();
        event.apply_wire(value)?;
        Ok(event)
    }

    /// Apply a wire object onto this event. Keys present in `value` replace
    /// the local fields (`null` clears them); absent keys leave them
    /// untouched. A `null` body is an empty response and changes nothing.
    /// Nothing changes if `value` fails to parse.
    pub fn apply_wire(&mut self, value: serde_json::Value) -> Result<(), serde_json::Error> {
        if value.is_null() {
            return Ok(());
        }

        let patch: EventPatch = serde_json::from_value(value)?;
        let original_start_time = patch
            .original_start_time
            .map(|ts| ts.map(timestamp).transpose())
            .transpose()?;

        overwrite(&mut self.id, patch.id);
        overwrite(&mut self.object, patch.object);
        overwrite(&mut self.account_id, patch.account_id);
        if let Some(calendar_id) = patch.calendar_id {
            self.calendar_id = calendar_id.unwrap_or_default();
        }
        overwrite(&mut self.title, patch.title);
        overwrite(&mut self.description, patch.description);
        overwrite(&mut self.location, patch.location);
        overwrite(&mut self.busy, patch.busy);
        if let Some(participants) = patch.participants {
            self.participants = participants.unwrap_or_default();
        }
        if let Some(when) = patch.when {
            self.when = when.and_then(WhenWire::into_range);
        }
        overwrite(&mut self.recurrence, patch.recurrence);
        overwrite(&mut self.capacity, patch.capacity);
        overwrite(&mut self.metadata, patch.metadata);
        overwrite(&mut self.notifications, patch.notifications);
        overwrite(&mut self.reminders, patch.reminders);
        overwrite(&mut self.reminder_minutes, patch.reminder_minutes);
        overwrite(&mut self.reminder_method, patch.reminder_method);
        overwrite(&mut self.conferencing, patch.conferencing);
        overwrite(&mut self.hide_participants, patch.hide_participants);
        overwrite(&mut self.visibility, patch.visibility);
        overwrite(&mut self.owner, patch.owner);
        overwrite(&mut self.message_id, patch.message_id);
        overwrite(&mut self.ical_uid, patch.ical_uid);
        overwrite(&mut self.master_event_id, patch.master_event_id);
        overwrite(&mut self.original_start_time, original_start_time);
        overwrite(&mut self.event_collection_id, patch.event_collection_id);
        overwrite(&mut self.round_robin_order, patch.round_robin_order);
        overwrite(&mut self.read_only, patch.read_only);
        overwrite(&mut self.status, patch.status);
        overwrite(&mut self.job_status_id, patch.job_status_id);
        overwrite(&mut self.organizer_email, patch.organizer_email);
        overwrite(&mut self.organizer_name, patch.organizer_name);

        Ok(())
    }
}
