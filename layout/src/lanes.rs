use std::collections::HashMap;

use crate::types::ParsedEvent;

/// Fixed 8-color palette, cycled by lane index. Entities beyond 8 share
/// colors with the lane 8 positions above; the lane index still keeps
/// them visually separate.
pub const PALETTE: [&str; 8] = [
    "#4299e1", // blue
    "#48bb78", // green
    "#ed8936", // orange
    "#9f7aea", // purple
    "#f56565", // red
    "#38b2ac", // teal
    "#ecc94b", // yellow
    "#ed64a6", // pink
];

/// A horizontal row assigned to exactly one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub entity_id: String,
    pub entity_name: String,
    pub index: usize,
    pub y_center: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaneLayout {
    lanes: Vec<Lane>,
    by_id: HashMap<String, usize>,
    lane_height: f64,
}

impl LaneLayout {
    /// Assigns one lane per distinct entity, ordered by first appearance
    /// in the input sequence. Deterministic for a given input order;
    /// recomputed from scratch on every pass.
    pub fn assign(parsed: &[ParsedEvent], top: f64, plot_height: f64) -> Self {
        let mut lanes: Vec<Lane> = Vec::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();

        for p in parsed {
            if by_id.contains_key(&p.event.entity_id) {
                continue;
            }
            let index = lanes.len();
            by_id.insert(p.event.entity_id.clone(), index);
            lanes.push(Lane {
                entity_id: p.event.entity_id.clone(),
                entity_name: p.event.entity_name.clone(),
                index,
                y_center: 0.0,
                color: PALETTE[index % PALETTE.len()],
            });
        }

        let lane_height = if lanes.is_empty() {
            0.0
        } else {
            plot_height.max(0.0) / lanes.len() as f64
        };
        for lane in &mut lanes {
            lane.y_center = top + lane.index as f64 * lane_height + lane_height / 2.0;
        }

        LaneLayout {
            lanes,
            by_id,
            lane_height,
        }
    }

    pub fn lane_of(&self, entity_id: &str) -> Option<&Lane> {
        self.by_id.get(entity_id).map(|&i| &self.lanes[i])
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn lane_height(&self) -> f64 {
        self.lane_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParsedEvent, TimelineEvent};

    fn events(entities: &[&str]) -> Vec<ParsedEvent> {
        entities
            .iter()
            .enumerate()
            .map(|(i, id)| {
                ParsedEvent::parse(
                    i,
                    &TimelineEvent {
                        id: format!("e{i}"),
                        entity_id: id.to_string(),
                        entity_name: id.to_uppercase(),
                        timestamp: "2024-01-01T00:00:00Z".into(),
                        event_type: "t".into(),
                        metadata: None,
                    },
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_first_occurrence_order() {
        let layout = LaneLayout::assign(&events(&["b", "a", "b", "c", "a"]), 0.0, 300.0);
        let order: Vec<&str> = layout.lanes().iter().map(|l| l.entity_id.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(layout.lane_of("a").unwrap().index, 1);
    }

    #[test]
    fn test_bijection_and_stability() {
        let input = events(&["x", "y", "x", "z", "y", "w"]);
        let a = LaneLayout::assign(&input, 0.0, 300.0);
        let b = LaneLayout::assign(&input, 0.0, 300.0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        let mut indices: Vec<usize> = a.lanes().iter().map(|l| l.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_lane_centers() {
        let layout = LaneLayout::assign(&events(&["a", "b", "c"]), 20.0, 300.0);
        assert_eq!(layout.lane_height(), 100.0);
        let centers: Vec<f64> = layout.lanes().iter().map(|l| l.y_center).collect();
        assert_eq!(centers, vec![70.0, 170.0, 270.0]);
    }

    #[test]
    fn test_palette_cycles_with_period_8() {
        let ids: Vec<String> = (0..10).map(|i| format!("entity-{i}")).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let layout = LaneLayout::assign(&events(&refs), 0.0, 300.0);
        assert_eq!(layout.lanes()[0].color, layout.lanes()[8].color);
        assert_eq!(layout.lanes()[1].color, layout.lanes()[9].color);
        // Distinct within the first cycle.
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert_ne!(layout.lanes()[i].color, layout.lanes()[j].color);
            }
        }
    }

    #[test]
    fn test_no_entities_no_lanes() {
        let layout = LaneLayout::assign(&[], 0.0, 300.0);
        assert!(layout.is_empty());
        assert_eq!(layout.lane_height(), 0.0);
    }

    #[test]
    fn test_zero_height_collapses_gracefully() {
        let layout = LaneLayout::assign(&events(&["a", "b"]), 0.0, 0.0);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.lane_height(), 0.0);
    }
}
