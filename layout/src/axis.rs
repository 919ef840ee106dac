use chrono::{DateTime, Duration, Utc};

use crate::domain::TimeDomain;

/// Horizontal pixels reserved per tick. The tick count adapts to the
/// plot width so labels stay readable on narrow containers.
const PX_PER_TICK: f64 = 100.0;

/// Default tick count hint.
pub const DEFAULT_TICK_HINT: usize = 10;

/// A labeled reference point on the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub at: DateTime<Utc>,
    pub x: f64,
    pub label: String,
}

/// Maps instants within the domain onto `[left, left + width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    left: f64,
    width: f64,
}

impl TimeAxis {
    pub fn new(domain: &TimeDomain, left: f64, width: f64) -> Self {
        TimeAxis {
            start: domain.start,
            end: domain.end,
            left,
            // Resize-to-zero degrades, never panics.
            width: width.max(0.0),
        }
    }

    /// Projects an instant to a horizontal coordinate. Monotonic
    /// non-decreasing; `project(start) == left` and
    /// `project(end) == left + width` exactly. A zero-duration domain
    /// maps every instant to the plot center (explicit degenerate
    /// policy, not a div-by-zero bug).
    pub fn project(&self, at: DateTime<Utc>) -> f64 {
        let span = (self.end - self.start).num_microseconds().unwrap_or(i64::MAX);
        if span == 0 {
            return self.left + self.width / 2.0;
        }
        let offset = (at - self.start).num_microseconds().unwrap_or(i64::MAX);
        self.left + offset as f64 / span as f64 * self.width
    }

    /// Evenly spaced ticks across the domain, endpoints included. At
    /// most `min(count_hint, floor(width / 100))` ticks, but never fewer
    /// than the two endpoints; a degenerate domain yields a single
    /// center tick.
    pub fn ticks(&self, count_hint: usize) -> Vec<Tick> {
        let span = self.end - self.start;
        let format = label_format(span);

        if span.is_zero() {
            return vec![Tick {
                at: self.start,
                x: self.project(self.start),
                label: self.start.format(format).to_string(),
            }];
        }

        let by_width = (self.width / PX_PER_TICK).floor() as usize;
        let count = count_hint.min(by_width).max(2);
        let span_us = span.num_microseconds().unwrap_or(i64::MAX) as f64;

        (0..count)
            .map(|i| {
                let frac = i as f64 / (count - 1) as f64;
                let at = self.start + Duration::microseconds((span_us * frac).round() as i64);
                Tick {
                    at,
                    x: self.project(at),
                    label: at.format(format).to_string(),
                }
            })
            .collect()
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

/// Label granularity follows the domain span.
fn label_format(span: Duration) -> &'static str {
    if span < Duration::hours(1) {
        "%H:%M:%S"
    } else if span < Duration::hours(48) {
        "%H:%M"
    } else if span < Duration::days(120) {
        "%b %-d"
    } else {
        "%b %Y"
    }
}
