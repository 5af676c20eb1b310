//! Core types for calevent.
//!
//! This crate models the Event resource exchanged with a remote scheduling
//! service and keeps the in-memory and wire (JSON) representations in step:
//! - `Event` and its value objects (`TimeRange`, `Participant`, `Notification`,
//!   `Reminder`, `Conferencing`)
//! - validation that runs before any request is issued
//! - the `Connection` trait that the HTTP layer implements

pub mod callback;
pub mod conferencing;
pub mod connection;
pub mod error;
pub mod event;
pub mod ics;
pub mod notification;
pub mod participant;
pub mod reminder;
mod serde_helpers;
pub mod time_range;

pub use conferencing::{Autocreate, Conferencing, ConferencingDetails};
pub use connection::{ApiRequest, Connection, Method, QueryParams};
pub use error::{
    EventError, EventResult, PreconditionError, TransportError, ValidationError,
};
pub use event::{Event, EventStatus, Recurrence, RsvpStatus};
pub use ics::{IcsMethod, IcsOptions};
pub use notification::{Notification, NotificationKind};
pub use participant::{Participant, ParticipantStatus};
pub use reminder::Reminder;
pub use time_range::{Endpoint, TimeRange};
