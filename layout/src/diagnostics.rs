use chrono::{DateTime, Utc};
use thiserror::Error;

/// Data-quality findings from a projection pass. Diagnostics are values
/// carried in the scene, never errors thrown across the component
/// boundary: a bad input entry is excluded and reported, and the rest of
/// the scene projects normally.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Index into the caller's event list, when the finding concerns a
    /// specific entry.
    pub index: Option<usize>,
    pub event_id: Option<String>,
    pub kind: DiagnosticKind,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("timestamp {raw:?} is not a valid instant: {message}")]
    InvalidTimestamp { raw: String, message: String },
    #[error("domain override end {end} precedes start {start}; ends swapped")]
    InvertedDomainOverride {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("{which} override {raw:?} is not a valid instant: {message}")]
    InvalidDomainOverride {
        which: &'static str,
        raw: String,
        message: String,
    },
}

impl Diagnostic {
    pub fn invalid_timestamp(index: usize, event_id: &str, raw: &str, err: chrono::ParseError) -> Self {
        Diagnostic {
            index: Some(index),
            event_id: Some(event_id.to_string()),
            kind: DiagnosticKind::InvalidTimestamp {
                raw: raw.to_string(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_display() {
        let err = DateTime::parse_from_rfc3339("nope").unwrap_err();
        let d = Diagnostic::invalid_timestamp(3, "e3", "nope", err);
        let msg = d.kind.to_string();
        assert!(msg.contains("nope"), "{msg}");
        assert_eq!(d.index, Some(3));
        assert_eq!(d.event_id.as_deref(), Some("e3"));
    }
}
