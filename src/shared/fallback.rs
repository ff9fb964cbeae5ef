use crate::shared::types::{AqiReading, AqiSnapshot};

const FALLBACK_LOCATION: &str = "Delhi";
const FALLBACK_TIMESTAMP: &str = "2024-01-15T08:00:00Z";

/// Static sample shown whenever the live API can't be reached.
pub fn fallback_snapshot() -> AqiSnapshot {
    AqiSnapshot {
        location: FALLBACK_LOCATION.to_string(),
        current: AqiReading {
            value: 152.0,
            timestamp: FALLBACK_TIMESTAMP.to_string(),
        },
        pm10: AqiReading {
            value: 98.0,
            timestamp: FALLBACK_TIMESTAMP.to_string(),
        },
    }
}
