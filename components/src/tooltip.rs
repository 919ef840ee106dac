use leptos::prelude::*;
use timeline_layout::{TooltipAnchor, TOOLTIP_WIDTH};

/// Tooltip box anchored inside the chart container. Position is
/// scene-space (container-relative), already clamped by the layout
/// engine; `None` hides the box with a CSS transition only.
#[allow(non_snake_case)]
#[component]
pub fn Tooltip(
    children: Children,
    #[prop(into)] anchor: Signal<Option<TooltipAnchor>>,
) -> impl IntoView {
    let style = move || {
        if let Some(pos) = anchor.get() {
            format!(
                "position: absolute; \
                 left: {}px; \
                 top: {}px; \
                 width: {TOOLTIP_WIDTH}px; \
                 transform: translateY(-100%); \
                 background-color: rgba(45, 55, 72, 0.95); \
                 color: white; \
                 border: 1px solid #4a5568; \
                 border-radius: 6px; \
                 padding: 8px 12px; \
                 font-size: 12px; \
                 pointer-events: none; \
                 z-index: 1000; \
                 opacity: 1; \
                 transition: opacity 0.2s ease-in-out;",
                pos.x, pos.y,
            )
        } else {
            "position: absolute; \
             opacity: 0; \
             pointer-events: none; \
             z-index: -1; \
             transition: opacity 0.2s ease-in-out;"
                .to_string()
        }
    };

    view! {
        <div style=style class="tooltip-container">
            {children()}
        </div>
    }
}
