use serde::{Deserialize, Serialize};

/// A single AQI reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiReading {
    pub value: f64,
    pub timestamp: String, // rfc3339
}

/// Point-in-time bundle of AQI readings for one location.
///
/// Treated as immutable once received: the dashboard swaps whole snapshots,
/// it never edits one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiSnapshot {
    pub location: String,
    pub current: AqiReading,
    pub pm10: AqiReading,
}
