use dioxus::prelude::*;

use crate::components::AqiCard;
use crate::shared::dashboard::{Body, DashboardView};

/// Draws a `DashboardView`; owns no state.
#[allow(non_snake_case)]
#[component]
pub fn DashboardPanel(view: DashboardView, onrefresh: EventHandler<()>) -> Element {
    let DashboardView {
        subtitle,
        banner,
        body,
        refresh_disabled,
    } = view;
    let spin = if refresh_disabled { "animate-spin" } else { "" };

    rsx! {
        div { class: "space-y-6 animate-fadeIn",
            div { class: "flex flex-col md:flex-row justify-between items-center gap-4",
                div {
                    h2 { class: "text-xl font-semibold text-gray-800", "Current Air Quality" }
                    p { class: "text-gray-600", "{subtitle}" }
                }
                button {
                    class: "inline-flex items-center rounded-md border border-gray-300 bg-white hover:bg-gray-50 px-4 py-2 text-sm font-medium text-gray-800 disabled:opacity-50 disabled:pointer-events-none",
                    disabled: refresh_disabled,
                    onclick: move |_| onrefresh.call(()),
                    RefreshIcon { class: "mr-2 h-4 w-4 {spin}" }
                    "Refresh Data"
                }
            }

            if let Some(message) = banner {
                div { class: "flex gap-3 rounded-lg border border-red-300 bg-red-50 p-4 text-red-700", role: "alert",
                    AlertIcon { class: "h-4 w-4 mt-0.5" }
                    div {
                        h5 { class: "font-medium leading-none mb-1", "Error" }
                        div { class: "text-sm", "{message}" }
                    }
                }
            }

            div { class: "flex flex-col md:flex-row justify-center items-center gap-6 w-full",
                {
                    match body {
                        Body::Skeleton => rsx! {
                            CardSkeleton { class: "" }
                            CardSkeleton { class: "hidden md:block" }
                        },
                        Body::Cards(cards) => rsx! {
                            for card in cards {
                                AqiCard {
                                    key: "{card.title}",
                                    title: card.title.to_string(),
                                    value: card.value,
                                    location: card.location.clone(),
                                    timestamp: card.timestamp.clone(),
                                }
                            }
                        },
                        Body::Empty => rsx! {
                            div { class: "text-center py-12",
                                p { class: "text-gray-500", "No data available" }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn CardSkeleton(class: String) -> Element {
    rsx! {
        div { class: "bg-white rounded-xl shadow-md p-6 h-64 animate-pulse max-w-md w-full {class}",
            div { class: "h-6 bg-gray-200 rounded w-3/4 mb-4" }
            div { class: "h-24 bg-gray-200 rounded mb-4" }
            div { class: "h-6 bg-gray-200 rounded w-1/2" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn RefreshIcon(class: String) -> Element {
    rsx! {
        svg { class: "{class}", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round",
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M8 16H3v5" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn AlertIcon(class: String) -> Element {
    rsx! {
        svg { class: "{class}", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", x2: "12", y1: "8", y2: "12" }
            line { x1: "12", x2: "12.01", y1: "16", y2: "16" }
        }
    }
}
