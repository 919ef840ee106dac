use leptos::{either::Either, html, prelude::*};
use timeline_layout::{
    compute_scene, tooltip_anchor, BurstPeriod, Dimensions, DomainOverride, InteractionTracker,
    Scene, SceneOptions, TimelineEvent,
};

use crate::legend::Legend;
use crate::tooltip::Tooltip;
use crate::viewport::observe_container_width;

pub const BURST_FILL: &str = "#ed8936";
pub const BURST_STROKE: &str = "#dd6b20";

const AXIS_COLOR: &str = "#a0aec0";
const SEPARATOR_COLOR: &str = "#e5e7eb";
const MARKER_STROKE: &str = "#1a202c";

/// Temporal visualization of discrete events and burst annotations.
/// Receives fully-resolved data from the caller and owns no network or
/// persistence state; the scene is recomputed from scratch whenever the
/// container resizes.
#[allow(non_snake_case)]
#[component]
pub fn Timeline(
    events: Vec<TimelineEvent>,
    #[prop(optional)] bursts: Vec<BurstPeriod>,
    #[prop(optional)] on_event_click: Option<Callback<TimelineEvent>>,
    #[prop(optional)] on_burst_click: Option<Callback<BurstPeriod>>,
    #[prop(default = "300px")] height: &'static str,
    #[prop(optional, into)] start_date: Option<String>,
    #[prop(optional, into)] end_date: Option<String>,
    #[prop(default = true)] show_legend: bool,
    #[prop(default = false)] show_bursts_without_events: bool,
) -> impl IntoView {
    let pixel_height = height_px(height);
    let container_ref = NodeRef::<html::Div>::new();
    let width = observe_container_width(container_ref);

    let mut override_diags = Vec::new();
    let override_ = DomainOverride::parse(
        start_date.as_deref(),
        end_date.as_deref(),
        &mut override_diags,
    );
    let options = SceneOptions {
        show_bursts_without_events,
        ..Default::default()
    };

    let events = StoredValue::new(events);
    let bursts = StoredValue::new(bursts);
    let scene = Memo::new(move |_| {
        let dims = Dimensions {
            width: width.get(),
            height: pixel_height,
        };
        events.with_value(|ev| {
            bursts.with_value(|bu| {
                let mut scene = compute_scene(ev, bu, dims, override_, &options);
                scene.diagnostics.extend(override_diags.iter().cloned());
                scene
            })
        })
    });

    let tracker = RwSignal::new(InteractionTracker::default());

    // A rebuilt scene revalidates hover ids instead of carrying them
    // over blindly.
    Effect::new(move |_| {
        let s = scene.get();
        tracker.update(|t| t.revalidate(&s));
    });

    let event_anchor = Signal::derive(move || {
        let s = scene.get();
        tracker.with(|t| {
            t.event_hover
                .hovered_id()
                .and_then(|id| s.markers.iter().find(|m| m.event.id == id))
                .map(|m| tooltip_anchor(m.x, m.y, s.dims.width))
        })
    });
    let burst_anchor = Signal::derive(move || {
        let s = scene.get();
        tracker.with(|t| {
            t.burst_hover
                .hovered_id()
                .and_then(|id| s.bursts.iter().find(|b| b.key == id))
                .map(|b| tooltip_anchor(b.x + b.width / 2.0, b.y, s.dims.width))
        })
    });

    let event_tooltip = move || {
        let s = scene.get();
        let hovered = tracker.with(|t| t.event_hover.hovered_id().map(str::to_owned));
        hovered
            .and_then(|id| s.markers.iter().find(|m| m.event.id == id).cloned())
            .map(|m| {
                view! {
                    <div class="text-sm">
                        <div class="font-bold">{m.event.entity_name.clone()}</div>
                        <div>{m.event.event_type.clone()}</div>
                        <div class="text-gray-300">{format_instant(m.at)}</div>
                    </div>
                }
            })
    };
    let burst_tooltip = move || {
        let s = scene.get();
        let hovered = tracker.with(|t| t.burst_hover.hovered_id().map(str::to_owned));
        hovered
            .and_then(|id| s.bursts.iter().find(|b| b.key == id).cloned())
            .map(|b| {
                view! {
                    <div class="text-sm">
                        <div class="font-bold">
                            {format!("Burst of {} events", b.burst.event_count)}
                        </div>
                        <div>{format!("Level {:.1}", b.burst.level)}</div>
                        <div class="text-gray-300">
                            {format!(
                                "{} - {}",
                                format_instant(b.burst.start_time),
                                format_instant(b.burst.end_time),
                            )}
                        </div>
                    </div>
                }
            })
    };

    let chart = move || {
        let s = scene.get();
        if s.empty {
            return Either::Left(
                view! {
                    <div class="flex items-center justify-center h-full text-sm text-gray-400 dark:text-gray-500">
                        "No events to display"
                    </div>
                },
            );
        }

        let view_box = format!("0 0 {} {}", s.dims.width, s.dims.height);
        let lane_height = if s.lanes.is_empty() {
            0.0
        } else {
            s.plot.height / s.lanes.len() as f64
        };

        let separators = s
            .lanes
            .iter()
            .skip(1)
            .map(|lane| {
                let y = lane.y_center - lane_height / 2.0;
                view! {
                    <line
                        x1=s.plot.left.to_string()
                        y1=y.to_string()
                        x2=s.plot.right().to_string()
                        y2=y.to_string()
                        stroke=SEPARATOR_COLOR
                        stroke-width="1"
                    />
                }
            })
            .collect_view();

        let lane_labels = s
            .lanes
            .iter()
            .map(|lane| {
                view! {
                    <text
                        x="8"
                        y=lane.y_center.to_string()
                        dominant-baseline="middle"
                        fill=AXIS_COLOR
                        style:font-size="11"
                    >
                        {lane.entity_name.clone()}
                    </text>
                }
            })
            .collect_view();

        let burst_rects = s
            .bursts
            .iter()
            .map(|b| {
                let key_enter = b.key.clone();
                let clicked = b.burst.clone();
                view! {
                    <rect
                        x=b.x.to_string()
                        y=b.y.to_string()
                        width=b.width.to_string()
                        height=b.height.to_string()
                        rx="2"
                        fill=BURST_FILL
                        fill-opacity=b.opacity.to_string()
                        stroke=BURST_STROKE
                        stroke-width=b.stroke_width.to_string()
                        class=format!("{} transition-all", cursor_class(on_burst_click.is_some()))
                        on:mouseenter=move |_| {
                            tracker.update(|t| t.burst_hover.pointer_enter(key_enter.clone()))
                        }
                        on:mouseleave=move |_| tracker.update(|t| t.burst_hover.pointer_leave())
                        on:click=move |_| {
                            if let Some(cb) = on_burst_click {
                                cb.run(clicked.clone());
                            }
                        }
                    />
                }
            })
            .collect_view();

        let markers = s
            .markers
            .iter()
            .map(|m| {
                let id_enter = m.event.id.clone();
                let clicked = m.event.clone();
                view! {
                    <circle
                        cx=m.x.to_string()
                        cy=m.y.to_string()
                        r="5"
                        fill=m.color
                        stroke=MARKER_STROKE
                        stroke-width="2"
                        class=format!("{} transition-all", cursor_class(on_event_click.is_some()))
                        on:mouseenter=move |_| {
                            tracker.update(|t| t.event_hover.pointer_enter(id_enter.clone()))
                        }
                        on:mouseleave=move |_| tracker.update(|t| t.event_hover.pointer_leave())
                        on:click=move |_| {
                            if let Some(cb) = on_event_click {
                                cb.run(clicked.clone());
                            }
                        }
                    />
                }
            })
            .collect_view();

        let ticks = s
            .ticks
            .iter()
            .map(|t| {
                view! {
                    <line
                        x1=t.x.to_string()
                        y1=s.plot.bottom().to_string()
                        x2=t.x.to_string()
                        y2=(s.plot.bottom() + 5.0).to_string()
                        stroke=AXIS_COLOR
                        stroke-width="1"
                    />
                    <text
                        x=t.x.to_string()
                        y=(s.plot.bottom() + 18.0).to_string()
                        style:text-anchor="middle"
                        fill=AXIS_COLOR
                        style:font-size="10"
                    >
                        {t.label.clone()}
                    </text>
                }
            })
            .collect_view();

        Either::Right(view! {
            <svg width="100%" height="100%" viewBox=view_box>
                <line
                    x1=s.plot.left.to_string()
                    y1=s.plot.bottom().to_string()
                    x2=s.plot.right().to_string()
                    y2=s.plot.bottom().to_string()
                    stroke=AXIS_COLOR
                    stroke-width="1"
                />
                {separators}
                {lane_labels}
                {burst_rects}
                {markers}
                {ticks}
            </svg>
        })
    };

    view! {
        <div class="w-full">
            <div
                node_ref=container_ref
                class="relative w-full overflow-hidden"
                style=format!("height: {height};")
            >
                {chart}
                <Tooltip anchor=event_anchor>{event_tooltip}</Tooltip>
                <Tooltip anchor=burst_anchor>{burst_tooltip}</Tooltip>
            </div>
            {move || {
                show_legend
                    .then(|| {
                        let s = scene.get();
                        (!s.empty)
                            .then(|| {
                                view! {
                                    <Legend
                                        lanes=s.lanes.clone()
                                        has_bursts=!s.bursts.is_empty()
                                    />
                                }
                            })
                    })
            }}
            {move || {
                let n = scene.with(|s: &Scene| s.diagnostics.len());
                (n > 0)
                    .then(|| {
                        view! {
                            <div class="px-2 py-1 text-xs text-amber-600 dark:text-amber-400">
                                {format!("{n} input entries could not be placed on the timeline")}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

fn format_instant(at: chrono::DateTime<chrono::Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Click affordance follows callback presence: markers without a click
/// handler still render, just not as clickable.
fn cursor_class(clickable: bool) -> &'static str {
    if clickable {
        "cursor-pointer"
    } else {
        "cursor-default"
    }
}

/// Parses the `height` prop ("300px") into a pixel count for the layout
/// engine. Unparseable values fall back to the default height.
fn height_px(height: &str) -> f64 {
    height
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse()
        .unwrap_or(300.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_px() {
        assert_eq!(height_px("300px"), 300.0);
        assert_eq!(height_px("120px"), 120.0);
        assert_eq!(height_px("250"), 250.0);
        assert_eq!(height_px(" 400px "), 400.0);
        assert_eq!(height_px("tall"), 300.0);
    }

    #[test]
    fn test_cursor_class() {
        assert_eq!(cursor_class(true), "cursor-pointer");
        assert_eq!(cursor_class(false), "cursor-default");
    }

    #[test]
    fn test_format_instant() {
        let at = chrono::DateTime::parse_from_rfc3339("2024-01-01T06:30:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(format_instant(at), "2024-01-01 06:30:00 UTC");
    }
}
