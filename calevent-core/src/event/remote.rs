//! Network-facing operations, built on the `Connection` collaborator.

use serde_json::json;
use tracing::{debug, instrument};

use super::{Event, RsvpStatus};
use crate::connection::{ApiRequest, Connection, Method, QueryParams};
use crate::error::{EventError, EventResult, PreconditionError};
use crate::ics::{IcsOptions, IcsResponse};

const EVENTS_PATH: &str = "/events";
const RSVP_PATH: &str = "/send-rsvp";
const ICS_PATH: &str = "/events/to-ics";

impl Event {
    /// The request `save` would send: POST to the collection without an id,
    /// PUT to the event's own path with one.
    pub fn save_request(&self, params: Option<&QueryParams>) -> EventResult<ApiRequest> {
        let (method, path) = match &self.id {
            Some(id) => (Method::Put, format!("{}/{}", EVENTS_PATH, id)),
            None => (Method::Post, EVENTS_PATH.to_string()),
        };

        Ok(ApiRequest::new(method, path)
            .with_query(params)
            .with_body(self.to_wire()?))
    }

    /// Create or update the event on the service.
    ///
    /// Validation runs first; on failure no request is made. On success the
    /// response is applied onto `self`. Transport errors are returned as-is
    /// and leave the event unchanged.
    #[instrument(skip_all, fields(id = ?self.id))]
    pub async fn save<C: Connection>(
        &mut self,
        conn: &C,
        params: Option<&QueryParams>,
    ) -> EventResult<&Event> {
        self.validate()?;
        let request = self.save_request(params)?;

        debug!(method = request.method.as_str(), path = %request.path, "Saving event");
        let response = conn.request(request).await?;

        self.apply_wire(response)?;
        debug!(id = ?self.id, "Event saved");
        Ok(self)
    }

    /// Send an RSVP for this event. Requires an id.
    #[instrument(skip_all, fields(id = ?self.id, status = ?status))]
    pub async fn rsvp<C: Connection>(
        &mut self,
        conn: &C,
        status: RsvpStatus,
        comment: &str,
    ) -> EventResult<&Event> {
        let event_id = self.id.clone().ok_or(PreconditionError::MissingId)?;

        let request = ApiRequest::new(Method::Post, RSVP_PATH).with_body(json!({
            "event_id": event_id,
            "status": status,
            "comment": comment,
        }));

        debug!("Sending RSVP");
        let response = conn.request(request).await?;

        self.apply_wire(response)?;
        Ok(self)
    }

    /// Ask the service to render this event as an ICS file.
    ///
    /// Requires a calendar id and a populated `when`.
    #[instrument(skip_all, fields(calendar_id = %self.calendar_id))]
    pub async fn generate_ics<C: Connection>(
        &self,
        conn: &C,
        options: Option<&IcsOptions>,
    ) -> EventResult<String> {
        let request = self.ics_request(options)?;

        debug!("Requesting ICS");
        let response = conn.request(request).await?;

        let parsed: IcsResponse = serde_json::from_value(response)
            .map_err(|e| EventError::UnexpectedResponse(format!("missing 'ics' field: {}", e)))?;
        Ok(parsed.ics)
    }

    fn ics_request(&self, options: Option<&IcsOptions>) -> EventResult<ApiRequest> {
        if self.calendar_id.is_empty() {
            return Err(PreconditionError::MissingCalendarId.into());
        }
        if self.when.is_none() {
            return Err(PreconditionError::MissingWhen.into());
        }

        let mut body = self.to_wire()?;
        body["ics_options"] = match options {
            Some(options) => serde_json::to_value(options)?,
            None => json!({}),
        };

        Ok(ApiRequest::new(Method::Post, ICS_PATH).with_body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_range::TimeRange;

    #[test]
    fn test_save_request_verb_follows_id() {
        let mut event = Event::default();
        let request = event.save_request(None).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/events");

        event.id = Some("id-1234".to_string());
        let request = event.save_request(None).unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/events/id-1234");
    }

    #[test]
    fn test_ics_preconditions() {
        let mut event = Event::default();
        event.when = Some(TimeRange::Date(chrono::NaiveDate::from_ymd_opt(1912, 6, 23).unwrap()));
        assert!(matches!(
            event.ics_request(None),
            Err(EventError::Precondition(PreconditionError::MissingCalendarId))
        ));

        let event = Event::new("calendar_id");
        assert!(matches!(
            event.ics_request(None),
            Err(EventError::Precondition(PreconditionError::MissingWhen))
        ));
    }
}
