use leptos::prelude::*;
use timeline_layout::Lane;

use crate::timeline::BURST_FILL;

/// Entity/burst legend strip below the chart. Purely presentational.
#[allow(non_snake_case)]
#[component]
pub fn Legend(lanes: Vec<Lane>, has_bursts: bool) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-x-4 gap-y-1 px-2 py-1 text-xs text-gray-500 dark:text-gray-400">
            {lanes
                .into_iter()
                .map(|lane| {
                    view! {
                        <span class="flex items-center gap-1">
                            <span
                                class="inline-block w-2.5 h-2.5 rounded-full"
                                style=format!("background-color: {};", lane.color)
                            ></span>
                            {lane.entity_name}
                        </span>
                    }
                })
                .collect_view()}
            {has_bursts
                .then(|| {
                    view! {
                        <span class="flex items-center gap-1">
                            <span
                                class="inline-block w-2.5 h-2.5 rounded-sm"
                                style=format!("background-color: {BURST_FILL}; opacity: 0.5;")
                            ></span>
                            "Burst"
                        </span>
                    }
                })}
        </div>
    }
}
