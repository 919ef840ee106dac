// Screen-space projection engine for the dashboard timeline. Everything
// here is pure and synchronous: one call to `compute_scene` turns the
// caller's events and burst annotations plus the current container
// dimensions into render-ready geometry. No DOM, no framework, no state
// carried between calls.

pub mod axis;
pub mod bursts;
pub mod diagnostics;
pub mod domain;
pub mod interaction;
pub mod lanes;
pub mod scene;
pub mod types;

pub use axis::{Tick, TimeAxis, DEFAULT_TICK_HINT};
pub use bursts::{BurstRect, MIN_BURST_WIDTH};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use domain::{DomainOverride, TimeDomain};
pub use interaction::{
    tooltip_anchor, HoverState, InteractionTracker, TooltipAnchor, TOOLTIP_OFFSET, TOOLTIP_WIDTH,
};
pub use lanes::{Lane, LaneLayout, PALETTE};
pub use scene::{compute_scene, EventMarker, PlotArea, Scene, SceneOptions};
pub use types::{BurstPeriod, Dimensions, ParsedEvent, TimelineEvent};
