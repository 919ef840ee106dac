use crate::axis::TimeAxis;
use crate::types::BurstPeriod;

/// Floor on rendered burst width so instantaneous or sub-pixel bursts
/// stay visible.
pub const MIN_BURST_WIDTH: f64 = 4.0;

const BASE_OPACITY: f64 = 0.15;
const OPACITY_PER_LEVEL: f64 = 0.1;
const MAX_OPACITY: f64 = 0.6;

const BASE_STROKE: f64 = 1.0;
const STROKE_PER_LEVEL: f64 = 0.5;
const MAX_STROKE: f64 = 4.0;

/// Screen-space rectangle for one burst interval. Spans the full
/// vertical plot area as a cross-entity overlay, independent of lanes.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstRect {
    pub burst: BurstPeriod,
    /// Stable hover key within one scene.
    pub key: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    pub stroke_width: f64,
}

impl BurstRect {
    pub fn build(
        axis: &TimeAxis,
        plot_top: f64,
        plot_height: f64,
        index: usize,
        burst: &BurstPeriod,
    ) -> Self {
        let x1 = axis.project(burst.start_time);
        let x2 = axis.project(burst.end_time);
        let level = burst.level.max(0.0);
        BurstRect {
            burst: burst.clone(),
            key: format!("burst-{index}"),
            x: x1,
            y: plot_top,
            width: (x2 - x1).max(MIN_BURST_WIDTH),
            height: plot_height.max(0.0),
            opacity: (BASE_OPACITY + OPACITY_PER_LEVEL * level).min(MAX_OPACITY),
            stroke_width: (BASE_STROKE + STROKE_PER_LEVEL * level).min(MAX_STROKE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeDomain;
    use chrono::{DateTime, Utc};

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn axis() -> TimeAxis {
        let domain = TimeDomain {
            start: ts("2024-01-01T00:00:00Z"),
            end: ts("2024-01-05T00:00:00Z"),
            empty: false,
        };
        TimeAxis::new(&domain, 60.0, 720.0)
    }

    fn burst(start: &str, end: &str, level: f64) -> BurstPeriod {
        BurstPeriod {
            start_time: ts(start),
            end_time: ts(end),
            level,
            event_count: 5,
        }
    }

    #[test]
    fn test_rect_geometry() {
        let b = burst("2024-01-02T00:00:00Z", "2024-01-03T00:00:00Z", 1.0);
        let r = BurstRect::build(&axis(), 20.0, 250.0, 0, &b);
        assert_eq!(r.x, 240.0);
        assert_eq!(r.width, 180.0);
        assert_eq!(r.y, 20.0);
        assert_eq!(r.height, 250.0);
    }

    #[test]
    fn test_instantaneous_burst_gets_min_width() {
        let b = burst("2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z", 1.0);
        let r = BurstRect::build(&axis(), 0.0, 100.0, 0, &b);
        assert_eq!(r.width, MIN_BURST_WIDTH);
    }

    #[test]
    fn test_sub_pixel_burst_gets_min_width() {
        let b = burst("2024-01-01T00:00:00Z", "2024-01-01T00:00:30Z", 1.0);
        let r = BurstRect::build(&axis(), 0.0, 100.0, 0, &b);
        assert_eq!(r.width, MIN_BURST_WIDTH);
    }

    #[test]
    fn test_visual_weight_scales_with_level_and_is_bounded() {
        let a = axis();
        let mut last_opacity = 0.0;
        let mut last_stroke = 0.0;
        for level in [0.0, 0.5, 1.0, 2.0, 4.0, 100.0] {
            let b = burst("2024-01-02T00:00:00Z", "2024-01-03T00:00:00Z", level);
            let r = BurstRect::build(&a, 0.0, 100.0, 0, &b);
            assert!(r.opacity >= last_opacity);
            assert!(r.stroke_width >= last_stroke);
            assert!(r.opacity < 1.0);
            assert!(r.stroke_width <= MAX_STROKE);
            last_opacity = r.opacity;
            last_stroke = r.stroke_width;
        }
    }

    #[test]
    fn test_negative_level_clamps_to_base() {
        let b = burst("2024-01-02T00:00:00Z", "2024-01-03T00:00:00Z", -3.0);
        let r = BurstRect::build(&axis(), 0.0, 100.0, 0, &b);
        assert_eq!(r.opacity, BASE_OPACITY);
        assert_eq!(r.stroke_width, BASE_STROKE);
    }
}
