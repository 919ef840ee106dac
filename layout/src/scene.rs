use chrono::{DateTime, Utc};

use crate::axis::{Tick, TimeAxis, DEFAULT_TICK_HINT};
use crate::bursts::BurstRect;
use crate::diagnostics::Diagnostic;
use crate::domain::{DomainOverride, TimeDomain};
use crate::lanes::{Lane, LaneLayout};
use crate::types::{BurstPeriod, Dimensions, ParsedEvent, TimelineEvent};

// Plot margins: room for lane labels on the left, tick labels below.
pub const MARGIN_LEFT: f64 = 60.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    fn from_dimensions(dims: Dimensions) -> Self {
        PlotArea {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (dims.width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
            height: (dims.height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// One projected event: its screen position plus the lane that placed it.
#[derive(Debug, Clone, PartialEq)]
pub struct EventMarker {
    pub event: TimelineEvent,
    pub at: DateTime<Utc>,
    pub x: f64,
    pub y: f64,
    pub lane: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    pub tick_hint: usize,
    /// Whether a burst list with zero events renders the overlay alone
    /// instead of the empty state. Off by default: no events means the
    /// empty-state marker, bursts or not.
    pub show_bursts_without_events: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        SceneOptions {
            tick_hint: DEFAULT_TICK_HINT,
            show_bursts_without_events: false,
        }
    }
}

/// The complete output of one projection pass. Owned by the current
/// render and rebuilt wholesale on the next; nothing holds a reference
/// across passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub dims: Dimensions,
    pub plot: PlotArea,
    pub domain: TimeDomain,
    pub markers: Vec<EventMarker>,
    pub lanes: Vec<Lane>,
    pub bursts: Vec<BurstRect>,
    pub ticks: Vec<Tick>,
    /// True when there is nothing to project; the host renders an
    /// explicit placeholder instead of a zero-width axis.
    pub empty: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// One full projection pass: domain → axis → lanes → markers → bursts.
/// Pure and deterministic; identical inputs yield identical geometry, so
/// the caller may recompute on every input change without a cache.
pub fn compute_scene(
    events: &[TimelineEvent],
    bursts: &[BurstPeriod],
    dims: Dimensions,
    override_: DomainOverride,
    options: &SceneOptions,
) -> Scene {
    let plot = PlotArea::from_dimensions(dims);
    let mut diagnostics = Vec::new();

    let mut parsed: Vec<ParsedEvent> = Vec::with_capacity(events.len());
    for (index, event) in events.iter().enumerate() {
        match ParsedEvent::parse(index, event) {
            Ok(p) => parsed.push(p),
            Err(e) => diagnostics.push(Diagnostic::invalid_timestamp(
                index,
                &event.id,
                &event.timestamp,
                e,
            )),
        }
    }

    let burst_overlay_alone =
        parsed.is_empty() && options.show_bursts_without_events && !bursts.is_empty();

    if parsed.is_empty() && !burst_overlay_alone {
        if !diagnostics.is_empty() {
            tracing::warn!(
                excluded = diagnostics.len(),
                "all events excluded; rendering empty state"
            );
        }
        let now = Utc::now();
        return Scene {
            dims,
            plot,
            domain: TimeDomain {
                start: now,
                end: now,
                empty: true,
            },
            markers: Vec::new(),
            lanes: Vec::new(),
            bursts: Vec::new(),
            ticks: Vec::new(),
            empty: true,
            diagnostics,
        };
    }

    // Burst extents only widen the domain when they are all there is to
    // project; with events present the derived (or overridden) event
    // domain wins and bursts clamp where they fall.
    let extra: Vec<DateTime<Utc>> = if burst_overlay_alone {
        bursts
            .iter()
            .flat_map(|b| [b.start_time, b.end_time])
            .collect()
    } else {
        Vec::new()
    };

    let domain = TimeDomain::resolve(&parsed, &extra, override_, &mut diagnostics);
    let axis = TimeAxis::new(&domain, plot.left, plot.width);
    let ticks = axis.ticks(options.tick_hint);

    let lane_layout = LaneLayout::assign(&parsed, plot.top, plot.height);
    let markers = parsed
        .iter()
        .filter_map(|p| {
            let lane = lane_layout.lane_of(&p.event.entity_id)?;
            Some(EventMarker {
                event: p.event.clone(),
                at: p.at,
                x: axis.project(p.at),
                y: lane.y_center,
                lane: lane.index,
                color: lane.color,
            })
        })
        .collect();

    let burst_rects = bursts
        .iter()
        .enumerate()
        .map(|(i, b)| BurstRect::build(&axis, plot.top, plot.height, i, b))
        .collect::<Vec<_>>();

    if !diagnostics.is_empty() {
        tracing::warn!(count = diagnostics.len(), "projection pass produced diagnostics");
    }
    tracing::debug!(
        markers = parsed.len(),
        lanes = lane_layout.len(),
        bursts = burst_rects.len(),
        ticks = ticks.len(),
        "scene computed"
    );

    Scene {
        dims,
        plot,
        domain,
        markers,
        lanes: lane_layout.lanes().to_vec(),
        bursts: burst_rects,
        ticks,
        empty: false,
        diagnostics,
    }
}
