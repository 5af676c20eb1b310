//! The temporal extent of an event ("when").
//!
//! Four mutually exclusive shapes exist on the wire, told apart only by which
//! keys are present. Here the shape is an explicit enum, and the span
//! constructors collapse equal endpoints into the single-value shape.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One endpoint of a time range: a unix timestamp or an all-day date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Instant(i64),
    Date(NaiveDate),
}

impl From<i64> for Endpoint {
    fn from(ts: i64) -> Self {
        Endpoint::Instant(ts)
    }
}

impl From<NaiveDate> for Endpoint {
    fn from(date: NaiveDate) -> Self {
        Endpoint::Date(date)
    }
}

impl FromStr for Endpoint {
    type Err = String;

    /// Integers parse as instants, `YYYY-MM-DD` as dates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(ts) = s.parse::<i64>() {
            return Ok(Endpoint::Instant(ts));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Endpoint::Date)
            .map_err(|_| format!("Invalid endpoint '{}'. Expected a unix timestamp or YYYY-MM-DD", s))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Instant(ts) => write!(f, "{}", ts),
            Endpoint::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    /// A single instant
    Time(i64),
    /// Two distinct instants
    TimeSpan { start: i64, end: i64 },
    /// A single all-day date
    Date(NaiveDate),
    /// Two distinct all-day dates
    DateSpan { start: NaiveDate, end: NaiveDate },
}

impl TimeRange {
    pub fn time_span(start: i64, end: i64) -> Self {
        if start == end {
            TimeRange::Time(start)
        } else {
            TimeRange::TimeSpan { start, end }
        }
    }

    pub fn date_span(start: NaiveDate, end: NaiveDate) -> Self {
        if start == end {
            TimeRange::Date(start)
        } else {
            TimeRange::DateSpan { start, end }
        }
    }

    /// The single-value shape for one endpoint.
    pub fn point(at: Endpoint) -> Self {
        match at {
            Endpoint::Instant(ts) => TimeRange::Time(ts),
            Endpoint::Date(d) => TimeRange::Date(d),
        }
    }

    /// Build a range from two endpoints of the same kind.
    ///
    /// Mixed kinds are not reconciled: the range collapses to `end`, the
    /// endpoint most recently supplied by the setters.
    pub fn between(start: Endpoint, end: Endpoint) -> Self {
        match (start, end) {
            (Endpoint::Instant(s), Endpoint::Instant(e)) => Self::time_span(s, e),
            (Endpoint::Date(s), Endpoint::Date(e)) => Self::date_span(s, e),
            (_, end) => Self::point(end),
        }
    }

    pub fn start(&self) -> Endpoint {
        match *self {
            TimeRange::Time(ts) => Endpoint::Instant(ts),
            TimeRange::TimeSpan { start, .. } => Endpoint::Instant(start),
            TimeRange::Date(d) => Endpoint::Date(d),
            TimeRange::DateSpan { start, .. } => Endpoint::Date(start),
        }
    }

    pub fn end(&self) -> Endpoint {
        match *self {
            TimeRange::Time(ts) => Endpoint::Instant(ts),
            TimeRange::TimeSpan { end, .. } => Endpoint::Instant(end),
            TimeRange::Date(d) => Endpoint::Date(d),
            TimeRange::DateSpan { end, .. } => Endpoint::Date(end),
        }
    }

    /// Replace the start, keeping the current end.
    pub fn with_start(self, start: Endpoint) -> Self {
        match (start, self.end()) {
            (Endpoint::Instant(s), Endpoint::Instant(e)) => Self::time_span(s, e),
            (Endpoint::Date(s), Endpoint::Date(e)) => Self::date_span(s, e),
            (start, _) => Self::point(start),
        }
    }

    /// Replace the end, keeping the current start.
    pub fn with_end(self, end: Endpoint) -> Self {
        Self::between(self.start(), end)
    }

    /// Wire label of the active shape.
    pub fn object(&self) -> &'static str {
        match self {
            TimeRange::Time(_) => "time",
            TimeRange::TimeSpan { .. } => "timespan",
            TimeRange::Date(_) => "date",
            TimeRange::DateSpan { .. } => "datespan",
        }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, TimeRange::Date(_) | TimeRange::DateSpan { .. })
    }

    /// Wire object holding exactly the keys of the active shape.
    pub fn to_wire(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(WhenWire::from_range(Some(self)))
    }

    /// Rebuild a range from a wire object. Returns `None` when no complete
    /// shape is present; unknown keys are ignored.
    pub fn from_wire(value: &serde_json::Value) -> Result<Option<Self>, serde_json::Error> {
        let wire = WhenWire::deserialize(value)?;
        Ok(wire.into_range())
    }
}

/// Flat wire form of `when`. An unset range is the empty object.
///
/// The server's `object` label is dropped on read; `TimeRange::object`
/// derives it from the shape.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct WhenWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
}

impl WhenWire {
    pub(crate) fn from_range(range: Option<&TimeRange>) -> Self {
        let mut wire = WhenWire::default();
        match range {
            Some(TimeRange::Time(ts)) => wire.time = Some(*ts),
            Some(TimeRange::TimeSpan { start, end }) => {
                wire.start_time = Some(*start);
                wire.end_time = Some(*end);
            }
            Some(TimeRange::Date(d)) => wire.date = Some(*d),
            Some(TimeRange::DateSpan { start, end }) => {
                wire.start_date = Some(*start);
                wire.end_date = Some(*end);
            }
            None => {}
        }
        wire
    }

    pub(crate) fn into_range(self) -> Option<TimeRange> {
        if let Some(ts) = self.time {
            return Some(TimeRange::Time(ts));
        }
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            return Some(TimeRange::time_span(start, end));
        }
        if let Some(d) = self.date {
            return Some(TimeRange::Date(d));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            return Some(TimeRange::date_span(start, end));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_equal_endpoints_collapse() {
        assert_eq!(
            TimeRange::time_span(1408875644, 1408875644),
            TimeRange::Time(1408875644)
        );
        assert_eq!(
            TimeRange::date_span(date("1912-06-23"), date("1912-06-23")),
            TimeRange::Date(date("1912-06-23"))
        );
    }

    #[test]
    fn test_wire_shapes() {
        assert_eq!(
            TimeRange::time_span(1408875644, 1408875644).to_wire().unwrap(),
            json!({"time": 1408875644})
        );
        assert_eq!(
            TimeRange::time_span(1409594400, 1409598000).to_wire().unwrap(),
            json!({"start_time": 1409594400, "end_time": 1409598000})
        );
        assert_eq!(
            TimeRange::Date(date("1912-06-23")).to_wire().unwrap(),
            json!({"date": "1912-06-23"})
        );
        assert_eq!(
            TimeRange::date_span(date("1815-12-10"), date("1852-11-27")).to_wire().unwrap(),
            json!({"start_date": "1815-12-10", "end_date": "1852-11-27"})
        );
    }

    #[test]
    fn test_unset_range_is_empty_object() {
        let value = serde_json::to_value(WhenWire::from_range(None)).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_from_wire_ignores_object_and_unknown_keys() {
        let range = TimeRange::from_wire(&json!({
            "time": 1409594400,
            "object": "time",
            "timezone": "America/New_York"
        }))
        .unwrap();
        assert_eq!(range, Some(TimeRange::Time(1409594400)));
        assert_eq!(range.unwrap().object(), "time");
    }

    #[test]
    fn test_from_wire_incomplete_pair_is_unset() {
        let range = TimeRange::from_wire(&json!({"start_time": 1409594400})).unwrap();
        assert_eq!(range, None);
    }

    #[test]
    fn test_from_wire_rejects_malformed_date() {
        assert!(TimeRange::from_wire(&json!({"date": "23/06/1912"})).is_err());
    }

    #[test]
    fn test_setters_infer_shape() {
        let range = TimeRange::point(Endpoint::Instant(1409594400))
            .with_end(Endpoint::Instant(1409598000));
        assert_eq!(
            range,
            TimeRange::TimeSpan {
                start: 1409594400,
                end: 1409598000
            }
        );

        // Moving the start onto the end collapses the span
        let range = range.with_start(Endpoint::Instant(1409598000));
        assert_eq!(range, TimeRange::Time(1409598000));
    }

    #[test]
    fn test_mixed_kinds_take_latest_write() {
        let range = TimeRange::Time(1409594400).with_end(Endpoint::Date(date("1912-06-23")));
        assert_eq!(range, TimeRange::Date(date("1912-06-23")));

        let range = TimeRange::Date(date("1912-06-23")).with_start(Endpoint::Instant(5));
        assert_eq!(range, TimeRange::Time(5));
    }

    #[test]
    fn test_endpoint_from_str() {
        assert_eq!("1408875644".parse::<Endpoint>(), Ok(Endpoint::Instant(1408875644)));
        assert_eq!(
            "1815-12-10".parse::<Endpoint>(),
            Ok(Endpoint::Date(date("1815-12-10")))
        );
        assert!("next tuesday".parse::<Endpoint>().is_err());
    }
}
