use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discrete event as supplied by the caller. `timestamp` is kept as the
/// raw ISO-8601 string; parsing happens once per projection pass so that
/// unparseable values can be reported instead of silently dropped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub id: String,
    #[serde(rename = "entityId")]
    pub entity_id: String,
    #[serde(rename = "entityName")]
    pub entity_name: String,
    pub timestamp: String,
    #[serde(rename = "eventType")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// A caller-classified interval of elevated event density. Opaque to the
/// engine beyond its geometry and intensity level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BurstPeriod {
    #[serde(rename = "startTime")]
    pub start_time: DateTime<Utc>,
    #[serde(rename = "endTime")]
    pub end_time: DateTime<Utc>,
    pub level: f64,
    #[serde(rename = "eventCount")]
    pub event_count: usize,
}

/// An event whose timestamp parsed, paired with its index in the caller's
/// list so diagnostics can point back at the original entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEvent {
    pub index: usize,
    pub at: DateTime<Utc>,
    pub event: TimelineEvent,
}

impl ParsedEvent {
    pub fn parse(index: usize, event: &TimelineEvent) -> Result<Self, chrono::ParseError> {
        let at = DateTime::parse_from_rfc3339(&event.timestamp)?.with_timezone(&Utc);
        Ok(ParsedEvent {
            index,
            at,
            event: event.clone(),
        })
    }
}

/// Pixel dimensions of the host container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}
