use crate::scene::Scene;

/// Fixed tooltip box width used for horizontal clamping.
pub const TOOLTIP_WIDTH: f64 = 220.0;
/// Offset between the hovered item's projected position and the tooltip
/// anchor.
pub const TOOLTIP_OFFSET: f64 = 12.0;

/// Hover state for one pointer target class. Event markers and burst
/// rectangles each get their own machine so both tooltips can be visible
/// at once; merging them into a single "current hover" slot is a
/// deliberate non-goal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered(String),
}

impl HoverState {
    pub fn pointer_enter(&mut self, id: impl Into<String>) {
        *self = HoverState::Hovered(id.into());
    }

    pub fn pointer_leave(&mut self) {
        *self = HoverState::Idle;
    }

    pub fn hovered_id(&self) -> Option<&str> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovered(id) => Some(id),
        }
    }

    /// Drops a hovered id that no longer names anything. Called when the
    /// scene is rebuilt; hover never carries over to an item that
    /// disappeared.
    pub fn revalidate(&mut self, still_valid: impl Fn(&str) -> bool) {
        if let HoverState::Hovered(id) = self {
            if !still_valid(id) {
                *self = HoverState::Idle;
            }
        }
    }
}

/// The two independent hover machines consumed by the component layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionTracker {
    pub event_hover: HoverState,
    pub burst_hover: HoverState,
}

impl InteractionTracker {
    pub fn revalidate(&mut self, scene: &Scene) {
        self.event_hover
            .revalidate(|id| scene.markers.iter().any(|m| m.event.id == id));
        self.burst_hover
            .revalidate(|id| scene.bursts.iter().any(|b| b.key == id));
    }
}

/// Clamped tooltip anchor for a hovered item at projected position
/// `(x, y)`: offset up and left, then pulled back so the tooltip's right
/// edge stays inside the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipAnchor {
    pub x: f64,
    pub y: f64,
}

pub fn tooltip_anchor(x: f64, y: f64, container_width: f64) -> TooltipAnchor {
    TooltipAnchor {
        x: (x - TOOLTIP_OFFSET)
            .min(container_width - TOOLTIP_WIDTH)
            .max(0.0),
        y: y - TOOLTIP_OFFSET,
    }
}
