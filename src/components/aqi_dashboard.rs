use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::info;

use crate::api::ApiSource;
use crate::components::DashboardPanel;
use crate::shared::dashboard::{AqiSource, DashboardState, DashboardView};

#[allow(non_snake_case)]
#[component]
pub fn AqiDashboard() -> Element {
    let mut state = use_signal(DashboardState::new);

    // No guard against overlapping loads; the disabled button is the only brake.
    let mut load = move || {
        state.write().begin_load();
        spawn(async move {
            #[cfg(feature = "web")]
            info!("[aqi_dashboard] fetching AQI data");
            let result = ApiSource.fetch().await;
            state.write().settle(result);
        });
    };

    // Effects only run on the client, once after mount
    use_effect(move || load());

    let view = DashboardView::from_state(&state.read());

    rsx! {
        DashboardPanel { view, onrefresh: move |_| load() }
    }
}
