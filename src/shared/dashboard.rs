//! Dashboard state and the view decision derived from it.
//!
//! `DashboardState` is what the `AqiDashboard` component keeps in its signal.
//! A load is split in two transitions, `begin_load` and `settle`, so the
//! component can release the signal while the fetch is suspended.
//! `DashboardView::from_state` turns a state into exactly what gets drawn.

use std::fmt::Display;

use dioxus::logger::tracing::warn;

use crate::shared::fallback::fallback_snapshot;
use crate::shared::types::AqiSnapshot;

pub const FALLBACK_ERROR: &str = "Could not connect to AQI API. Using fallback data.";
pub const SUBTITLE_LIVE: &str = "Live data from API";
pub const SUBTITLE_FALLBACK: &str = "Using fallback data";
pub const CURRENT_TITLE: &str = "Current AQI";
pub const PREDICTED_TITLE: &str = "Predicted AQI (next hour)";

/// Anything that can produce the current snapshot.
#[allow(async_fn_in_trait)]
pub trait AqiSource {
    type Error: Display;

    async fn fetch(&self) -> Result<AqiSnapshot, Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub snapshot: Option<AqiSnapshot>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Default for DashboardState {
    // The first render happens before the mount fetch settles.
    fn default() -> Self {
        Self {
            snapshot: None,
            is_loading: true,
            error_message: None,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Apply the outcome of a fetch. Failures never escape: the fallback
    /// snapshot replaces whatever was shown and the banner message is set.
    pub fn settle<E: Display>(&mut self, result: Result<AqiSnapshot, E>) {
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
            }
            Err(e) => {
                warn!("[dashboard] failed to fetch AQI data, using fallback data: {e}");
                self.snapshot = Some(fallback_snapshot());
                self.error_message = Some(FALLBACK_ERROR.to_string());
            }
        }
        self.is_loading = false;
    }

    /// One full load cycle against `source`, the same `begin_load`/`settle`
    /// pair `AqiDashboard` runs around its spawned fetch.
    ///
    /// Overlapping calls are not guarded: whichever fetch settles last wins,
    /// even if it was started first.
    #[cfg(test)]
    pub async fn load<S: AqiSource>(&mut self, source: &S) {
        self.begin_load();
        let result = source.fetch().await;
        self.settle(result);
    }

    pub fn using_fallback(&self) -> bool {
        self.error_message.is_some()
    }
}

/// Input for one `AqiCard`.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub title: &'static str,
    pub value: f64,
    pub location: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Skeleton,
    Cards([CardModel; 2]),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub subtitle: &'static str,
    pub banner: Option<String>,
    pub body: Body,
    pub refresh_disabled: bool,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let subtitle = if state.using_fallback() {
            SUBTITLE_FALLBACK
        } else {
            SUBTITLE_LIVE
        };

        let body = match (&state.snapshot, state.is_loading) {
            (_, true) => Body::Skeleton,
            (Some(s), false) => Body::Cards([
                CardModel {
                    title: CURRENT_TITLE,
                    value: s.current.value,
                    location: s.location.clone(),
                    timestamp: s.current.timestamp.clone(),
                },
                // pm10 stands in for the forecast; the timestamp is the current reading's
                CardModel {
                    title: PREDICTED_TITLE,
                    value: s.pm10.value,
                    location: s.location.clone(),
                    timestamp: s.current.timestamp.clone(),
                },
            ]),
            (None, false) => Body::Empty,
        };

        Self {
            subtitle,
            banner: state.error_message.clone(),
            body,
            refresh_disabled: state.is_loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::AqiReading;
    use std::cell::Cell;

    const T: &str = "2025-01-01T08:00:00Z";

    fn delhi() -> AqiSnapshot {
        AqiSnapshot {
            location: "Delhi".to_string(),
            current: AqiReading {
                value: 120.0,
                timestamp: T.to_string(),
            },
            pm10: AqiReading {
                value: 80.0,
                timestamp: T.to_string(),
            },
        }
    }

    struct Live(AqiSnapshot);

    impl AqiSource for Live {
        type Error = String;

        async fn fetch(&self) -> Result<AqiSnapshot, String> {
            Ok(self.0.clone())
        }
    }

    struct Down;

    impl AqiSource for Down {
        type Error = String;

        async fn fetch(&self) -> Result<AqiSnapshot, String> {
            Err("connection refused".to_string())
        }
    }

    /// Fails on the first call, succeeds afterwards.
    struct Flaky {
        calls: Cell<u32>,
    }

    impl AqiSource for Flaky {
        type Error = &'static str;

        async fn fetch(&self) -> Result<AqiSnapshot, &'static str> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            if n == 0 {
                Err("timeout")
            } else {
                Ok(delhi())
            }
        }
    }

    #[tokio::test]
    async fn successful_load_stores_snapshot() {
        let mut state = DashboardState::new();
        state.load(&Live(delhi())).await;

        assert!(!state.is_loading);
        assert_eq!(state.error_message, None);
        assert_eq!(state.snapshot, Some(delhi()));
    }

    #[tokio::test]
    async fn failed_load_uses_fallback() {
        let mut state = DashboardState::new();
        state.load(&Down).await;

        assert!(!state.is_loading);
        assert_eq!(state.error_message.as_deref(), Some(FALLBACK_ERROR));
        assert_eq!(state.snapshot, Some(fallback_snapshot()));
    }

    #[tokio::test]
    async fn failure_replaces_previous_live_snapshot() {
        let mut state = DashboardState::new();
        state.load(&Live(delhi())).await;
        state.load(&Down).await;

        assert_eq!(state.snapshot, Some(fallback_snapshot()));
        assert!(state.using_fallback());
    }

    #[tokio::test]
    async fn success_after_failure_clears_error() {
        let source = Flaky { calls: Cell::new(0) };
        let mut state = DashboardState::new();

        state.load(&source).await;
        assert!(state.using_fallback());

        state.load(&source).await;
        assert_eq!(state.error_message, None);
        assert_eq!(state.snapshot, Some(delhi()));
        assert_eq!(source.calls.get(), 2);
    }

    #[tokio::test]
    async fn repeated_loads_are_idempotent() {
        let source = Live(delhi());

        let mut once = DashboardState::new();
        once.load(&source).await;

        let mut twice = DashboardState::new();
        twice.load(&source).await;
        twice.load(&source).await;

        assert_eq!(once, twice);
    }

    #[test]
    fn begin_load_clears_error_and_keeps_snapshot() {
        let mut state = DashboardState::new();
        state.settle::<&str>(Err("boom"));
        state.begin_load();

        assert!(state.is_loading);
        assert_eq!(state.error_message, None);
        assert_eq!(state.snapshot, Some(fallback_snapshot()));
    }

    #[tokio::test]
    async fn live_snapshot_renders_two_cards() {
        let mut state = DashboardState::new();
        state.load(&Live(delhi())).await;
        let view = DashboardView::from_state(&state);

        assert_eq!(view.subtitle, SUBTITLE_LIVE);
        assert_eq!(view.banner, None);
        assert!(!view.refresh_disabled);
        let Body::Cards([current, predicted]) = view.body else {
            panic!("expected cards");
        };
        assert_eq!(current.title, "Current AQI");
        assert_eq!(current.value, 120.0);
        assert_eq!(current.location, "Delhi");
        assert_eq!(current.timestamp, T);
        assert_eq!(predicted.title, "Predicted AQI (next hour)");
        assert_eq!(predicted.value, 80.0);
        assert_eq!(predicted.timestamp, T);
    }

    #[test]
    fn predicted_card_uses_current_timestamp() {
        let mut snapshot = delhi();
        snapshot.pm10.timestamp = "2025-01-01T09:00:00Z".to_string();
        let mut state = DashboardState::new();
        state.settle::<String>(Ok(snapshot));

        let Body::Cards([_, predicted]) = DashboardView::from_state(&state).body else {
            panic!("expected cards");
        };
        assert_eq!(predicted.timestamp, T);
    }

    #[tokio::test]
    async fn fallback_renders_banner_and_cards() {
        let mut state = DashboardState::new();
        state.load(&Down).await;
        let view = DashboardView::from_state(&state);

        assert_eq!(view.subtitle, SUBTITLE_FALLBACK);
        assert_eq!(
            view.banner.as_deref(),
            Some("Could not connect to AQI API. Using fallback data.")
        );
        let fallback = fallback_snapshot();
        let Body::Cards([current, predicted]) = view.body else {
            panic!("expected cards");
        };
        assert_eq!(current.value, fallback.current.value);
        assert_eq!(predicted.value, fallback.pm10.value);
        assert_eq!(current.location, fallback.location);
    }

    #[test]
    fn initial_render_shows_skeleton() {
        let view = DashboardView::from_state(&DashboardState::new());

        assert_eq!(view.body, Body::Skeleton);
        assert!(view.refresh_disabled);
        assert_eq!(view.banner, None);
        assert_eq!(view.subtitle, SUBTITLE_LIVE);
    }

    #[test]
    fn refresh_shows_skeleton_over_existing_snapshot() {
        let mut state = DashboardState::new();
        state.settle::<String>(Ok(delhi()));
        state.begin_load();

        assert_eq!(DashboardView::from_state(&state).body, Body::Skeleton);
    }

    #[test]
    fn no_snapshot_and_no_error_renders_empty() {
        let state = DashboardState {
            snapshot: None,
            is_loading: false,
            error_message: None,
        };
        let view = DashboardView::from_state(&state);

        assert_eq!(view.body, Body::Empty);
        assert_eq!(view.banner, None);
        assert!(!view.refresh_disabled);
    }

    #[test]
    fn view_is_a_pure_function_of_state() {
        let mut state = DashboardState::new();
        state.settle::<&str>(Err("down"));

        assert_eq!(
            DashboardView::from_state(&state),
            DashboardView::from_state(&state.clone())
        );
    }
}
