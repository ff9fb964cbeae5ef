use dioxus::prelude::*;

use crate::shared::dashboard::AqiSource;
use crate::shared::types::AqiSnapshot;

#[server(FetchAqiData)]
pub async fn fetch_aqi_data() -> Result<AqiSnapshot, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use dioxus::logger::tracing::warn;

        match crate::backend::fetch_current_aqi().await {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                warn!("fetch_aqi_data error: {e:#}");
                Err(ServerFnError::new(e.to_string()))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("AQI API is only reachable from the server"))
    }
}

/// The server function seen as the dashboard's data source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiSource;

impl AqiSource for ApiSource {
    type Error = ServerFnError;

    async fn fetch(&self) -> Result<AqiSnapshot, ServerFnError> {
        fetch_aqi_data().await
    }
}
