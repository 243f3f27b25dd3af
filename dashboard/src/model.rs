use serde::{Deserialize, Serialize};

/// Hard cap on stored history; oldest readings past this are dropped.
pub const MAX_RECORDS: usize = 1000;

/// Records shown per dashboard page.
pub const PAGE_SIZE: usize = 10;

/// One persisted sensor sample.
///
/// The history file is a JSON array of these, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub temp: f64,
    pub humidity: f64,
    /// Local server time at ingest, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}

impl Reading {
    /// Temperature with an explicit decimal point, so `22.0` stays `22.0`
    /// on the page instead of collapsing to `22`.
    pub fn temp_display(&self) -> String {
        format!("{:?}", self.temp)
    }

    pub fn humidity_display(&self) -> String {
        format!("{:?}", self.humidity)
    }
}

/// Ingest payload as POSTed by a sensor.
///
/// No range checks: any finite number is accepted. Missing fields or
/// wrong types are rejected by the JSON extractor before we see them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature: f64,
    pub humidity: f64,
}

/// Acknowledgment returned by the ingest endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct IngestResponse {
    pub status: String,
    pub message: String,
}

impl IngestResponse {
    pub fn saved() -> Self {
        Self {
            status: "success".to_string(),
            message: "Data saved".to_string(),
        }
    }
}
