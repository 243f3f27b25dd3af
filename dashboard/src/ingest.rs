use crate::errors::AppError;
use crate::metrics::{READINGS_TOTAL, SAVE_FAILURES_TOTAL};
use crate::model::{IngestResponse, Reading, SensorReading, MAX_RECORDS};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use tracing::debug;

/// `POST /api/update` handler.
///
/// Prepends the reading to the stored history and truncates to the cap.
/// The whole cycle is load-modify-save with no locking; concurrent posts
/// can lose an update, matching the single-writer deployments this
/// serves.
pub async fn update_sensor(
    State(state): State<AppState>,
    Json(payload): Json<SensorReading>,
) -> Result<Json<IngestResponse>, AppError> {
    let mut history = state.store.load();

    let reading = Reading {
        temp: payload.temperature,
        humidity: payload.humidity,
        timestamp: state.clock.now(),
    };

    history.insert(0, reading);
    history.truncate(MAX_RECORDS);

    state.store.save(&history).map_err(|e| {
        SAVE_FAILURES_TOTAL.inc();
        e
    })?;

    READINGS_TOTAL.inc();
    debug!(
        "Stored reading temp={} humidity={}, history len {}",
        payload.temperature,
        payload.humidity,
        history.len()
    );

    Ok(Json(IngestResponse::saved()))
}
