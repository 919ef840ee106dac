use chrono::{DateTime, Utc};

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::types::ParsedEvent;

/// The instant range the time axis projects. `empty` marks the case
/// where there was nothing to derive a range from; downstream components
/// skip projection entirely and the scene renders an empty-state marker
/// instead of a zero-width axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDomain {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub empty: bool,
}

/// Optional explicit bounds overriding the derived domain. Either end
/// may be set independently.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomainOverride {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DomainOverride {
    /// Parses ISO-8601 override strings. An unparseable override is
    /// dropped (the derived bound applies) and reported.
    pub fn parse(
        start: Option<&str>,
        end: Option<&str>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let mut parse_one = |which: &'static str, raw: Option<&str>| {
            let raw = raw?;
            match DateTime::parse_from_rfc3339(raw) {
                Ok(dt) => Some(dt.with_timezone(&Utc)),
                Err(e) => {
                    diagnostics.push(Diagnostic {
                        index: None,
                        event_id: None,
                        kind: DiagnosticKind::InvalidDomainOverride {
                            which,
                            raw: raw.to_string(),
                            message: e.to_string(),
                        },
                    });
                    None
                },
            }
        };
        DomainOverride {
            start: parse_one("start", start),
            end: parse_one("end", end),
        }
    }
}

impl TimeDomain {
    /// Derives `[min, max]` of the parsed timestamps, then applies
    /// overrides. Extra instants (e.g. burst extents when rendering a
    /// burst-only scene) participate in the derivation.
    ///
    /// The returned domain always satisfies `end >= start`: an inverted
    /// override pair is swapped and reported rather than producing a
    /// reversed axis.
    pub fn resolve(
        parsed: &[ParsedEvent],
        extra: &[DateTime<Utc>],
        override_: DomainOverride,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> TimeDomain {
        let derived = parsed
            .iter()
            .map(|p| p.at)
            .chain(extra.iter().copied())
            .fold(None, |acc: Option<(DateTime<Utc>, DateTime<Utc>)>, at| {
                Some(match acc {
                    Some((min, max)) => (min.min(at), max.max(at)),
                    None => (at, at),
                })
            });

        let start = override_.start.or(derived.map(|(min, _)| min));
        let end = override_.end.or(derived.map(|(_, max)| max));

        let (mut start, mut end) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            (Some(s), None) => (s, s),
            (None, Some(e)) => (e, e),
            (None, None) => {
                let now = Utc::now();
                return TimeDomain {
                    start: now,
                    end: now,
                    empty: true,
                };
            },
        };

        if end < start {
            diagnostics.push(Diagnostic {
                index: None,
                event_id: None,
                kind: DiagnosticKind::InvertedDomainOverride { start, end },
            });
            std::mem::swap(&mut start, &mut end);
        }

        TimeDomain {
            start,
            end,
            empty: false,
        }
    }

    /// Zero-duration domain: all events share one instant. Not an error;
    /// the axis maps everything to the plot center.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimelineEvent;

    fn event(id: &str, ts: &str) -> ParsedEvent {
        ParsedEvent::parse(
            0,
            &TimelineEvent {
                id: id.into(),
                entity_id: "a".into(),
                entity_name: "A".into(),
                timestamp: ts.into(),
                event_type: "t".into(),
                metadata: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_derived_domain() {
        let events = vec![
            event("e1", "2024-01-03T00:00:00Z"),
            event("e2", "2024-01-01T00:00:00Z"),
            event("e3", "2024-01-05T00:00:00Z"),
        ];
        let mut diags = Vec::new();
        let d = TimeDomain::resolve(&events, &[], DomainOverride::default(), &mut diags);
        assert!(!d.empty);
        assert_eq!(d.start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(d.end.to_rfc3339(), "2024-01-05T00:00:00+00:00");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_empty_domain() {
        let mut diags = Vec::new();
        let d = TimeDomain::resolve(&[], &[], DomainOverride::default(), &mut diags);
        assert!(d.empty);
        assert_eq!(d.start, d.end);
    }

    #[test]
    fn test_single_instant_is_degenerate_not_empty() {
        let events = vec![event("e1", "2024-01-01T00:00:00Z")];
        let mut diags = Vec::new();
        let d = TimeDomain::resolve(&events, &[], DomainOverride::default(), &mut diags);
        assert!(!d.empty);
        assert!(d.is_degenerate());
    }

    #[test]
    fn test_override_replaces_derived_bounds() {
        let events = vec![event("e1", "2024-01-03T00:00:00Z")];
        let mut diags = Vec::new();
        let override_ = DomainOverride::parse(
            Some("2024-01-01T00:00:00Z"),
            Some("2024-01-10T00:00:00Z"),
            &mut diags,
        );
        let d = TimeDomain::resolve(&events, &[], override_, &mut diags);
        assert_eq!(d.start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(d.end.to_rfc3339(), "2024-01-10T00:00:00+00:00");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_inverted_override_swaps_and_reports() {
        let mut diags = Vec::new();
        let override_ = DomainOverride::parse(
            Some("2024-02-01T00:00:00Z"),
            Some("2024-01-01T00:00:00Z"),
            &mut diags,
        );
        let d = TimeDomain::resolve(&[], &[], override_, &mut diags);
        assert!(d.end >= d.start);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_unparseable_override_is_dropped_and_reported() {
        let events = vec![event("e1", "2024-01-03T00:00:00Z")];
        let mut diags = Vec::new();
        let override_ = DomainOverride::parse(Some("yesterday"), None, &mut diags);
        assert_eq!(override_.start, None);
        assert_eq!(diags.len(), 1);
        let d = TimeDomain::resolve(&events, &[], override_, &mut diags);
        assert_eq!(d.start.to_rfc3339(), "2024-01-03T00:00:00+00:00");
    }
}
