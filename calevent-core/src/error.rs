//! Error types for calevent.

use thiserror::Error;

/// Cross-field violations caught before a request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cannot set both 'details' and 'autocreate' in conferencing object.")]
    ConferencingConflict,

    #[error(
        "The number of participants in the event exceeds the set capacity. \
         ({participants} participants, capacity {capacity})"
    )]
    CapacityExceeded { participants: usize, capacity: i64 },
}

/// Missing state that an operation needs before it can issue a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("Event must have a calendar_id to generate an ICS file")]
    MissingCalendarId,

    #[error("Event must have a populated 'when' to generate an ICS file")]
    MissingWhen,

    #[error("Event has no id; it must be saved before this operation")]
    MissingId,
}

/// Failures reported by a `Connection`.
///
/// These are passed through untouched, so they are `Clone` and `PartialEq`
/// to let a callback and the returned result observe the same value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// Errors that can occur in event operations.
#[derive(Error, Debug)]
pub enum EventError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Result type alias for event operations.
pub type EventResult<T> = Result<T, EventError>;
