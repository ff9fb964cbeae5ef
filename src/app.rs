use dioxus::prelude::*;

use crate::components::AqiDashboard;
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#f9fafb" } // gray-50
        document::Title { "Air Quality" }
        // Page container
        div { class: "min-h-screen bg-gray-50 text-gray-900 p-6",
            div { class: "w-full max-w-5xl mx-auto",
                AqiDashboard {}
            }
        }
    }
}
