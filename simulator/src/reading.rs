use serde::{Deserialize, Serialize};

/// Payload shape expected by the dashboard ingest endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature: f64,
    pub humidity: f64,
}
