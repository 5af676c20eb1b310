pub mod config;
pub mod ics;
pub mod rsvp;
pub mod save;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use calevent_core::{Event, QueryParams};
use calevent_http::{ClientConfig, HttpConnection};
use serde_json::Value;
use tracing::debug;

/// Load an event from a file holding its wire JSON.
pub fn load_event(path: &Path) -> Result<Event> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    Event::from_wire(value).with_context(|| format!("{} is not a valid event", path.display()))
}

/// Full JSON snapshot of an event, server fields included. A later save
/// reads it back and updates the event by id.
pub fn event_json(event: &Event) -> Result<Value> {
    Ok(event.to_snapshot()?)
}

/// One-line summary of when the event happens.
pub fn describe_when(event: &Event) -> String {
    match &event.when {
        Some(range) => {
            let span = if range.start() == range.end() {
                range.start().to_string()
            } else {
                format!("{} to {}", range.start(), range.end())
            };
            if range.is_all_day() {
                format!("{span} (all day)")
            } else {
                span
            }
        }
        None => "unset".to_string(),
    }
}

pub fn write_event(path: &Path, event: &Event) -> Result<()> {
    let content = serde_json::to_string_pretty(&event_json(event)?)?;
    std::fs::write(path, format!("{content}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))
}

pub fn load_config(config_path: Option<&Path>) -> Result<ClientConfig> {
    let config = match config_path {
        Some(path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };
    Ok(config)
}

pub fn connect(config_path: Option<&Path>) -> Result<HttpConnection> {
    let config = load_config(config_path)?;

    if config.access_token.is_empty() {
        anyhow::bail!(
            "No access token configured.\n\n\
            Set one with:\n  \
            export CALEVENT_ACCESS_TOKEN=<token>\n\n\
            or add access_token to your config file (calevent config init)."
        );
    }

    debug!(api_server = %config.api_server, "Connecting");
    Ok(HttpConnection::new(&config)?)
}

/// Parse `key=value` pairs into query parameters.
pub fn parse_params(raw: &[String]) -> Result<QueryParams> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .filter(|(k, _)| !k.is_empty())
                .with_context(|| format!("Invalid parameter '{}'. Expected key=value", pair))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calevent_core::{Participant, ParticipantStatus, TimeRange};
    use chrono::NaiveDate;

    #[test]
    fn test_parse_params() {
        let params = parse_params(&["notify_participants=true".to_string()]).unwrap();
        assert_eq!(params.get("notify_participants").map(String::as_str), Some("true"));

        assert!(parse_params(&["notify_participants".to_string()]).is_err());
        assert!(parse_params(&["=true".to_string()]).is_err());
    }

    #[test]
    fn test_event_file_round_trip_keeps_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("event.json");

        let mut event = Event::new("calendar_id");
        event.id = Some("id-1234".to_string());
        event.when = Some(TimeRange::Time(1408875644));
        event.participants = vec![Participant {
            status: Some(ParticipantStatus::Yes),
            ..Participant::new("bar")
        }];
        event.ical_uid = Some("id-5678".to_string());
        event.read_only = Some(true);

        write_event(&path, &event).unwrap();
        let loaded = load_event(&path).unwrap();

        assert_eq!(loaded, event);
        assert_eq!(loaded.participants[0].status, Some(ParticipantStatus::Yes));
    }

    #[test]
    fn test_describe_when() {
        let mut event = Event::new("calendar_id");
        assert_eq!(describe_when(&event), "unset");

        event.set_start(1409594400);
        event.set_end(1409598000);
        assert_eq!(describe_when(&event), "1409594400 to 1409598000");

        event.when = Some(TimeRange::Date(NaiveDate::from_ymd_opt(1912, 6, 23).unwrap()));
        assert_eq!(describe_when(&event), "1912-06-23 (all day)");
    }
}
