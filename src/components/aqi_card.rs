use dioxus::prelude::*;

use crate::components::Gauge;
use crate::utils::aqi::{gauge_percent, AqiCategory};
use crate::utils::format::{format_aqi, format_local};

#[allow(non_snake_case)]
#[component]
pub fn AqiCard(title: String, value: f64, location: String, timestamp: String) -> Element {
    let category = AqiCategory::from_value(value);
    let color = category.text_class();
    let label = category.label();
    let shown_value = format_aqi(value);
    let shown_time = format_local(&timestamp);

    rsx! {
        div { class: "bg-white rounded-xl shadow-md p-6 max-w-md w-full space-y-4",
            div { class: "flex items-baseline justify-between gap-2",
                h3 { class: "text-lg font-medium text-gray-800", "{title}" }
                span { class: "text-sm text-gray-500", "{location}" }
            }
            div { class: "flex flex-col items-center gap-2",
                Gauge {
                    percent: gauge_percent(value),
                    start_angle: 45.0,
                    stop_angle: 315.0,
                    size: 180,
                    stroke: 12,
                    track_class: "text-gray-200".to_string(),
                    progress_class: color.to_string(),
                    div { class: "text-4xl font-bold tabular-nums {color}", "{shown_value}" }
                }
                div { class: "text-sm font-medium {color}", "{label}" }
            }
            time { class: "block text-xs text-gray-500 text-center", datetime: "{timestamp}", "As of {shown_time}" }
        }
    }
}
