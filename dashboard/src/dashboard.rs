use crate::metrics::PAGES_RENDERED_TOTAL;
use crate::model::Reading;
use crate::pagination::{paginate, Page};
use crate::state::AppState;
use askama::Template;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::debug;

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub latest: Option<Reading>,
    pub records: Vec<Reading>,
    pub page: Page,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Kept as a raw string so a garbage value falls back to page 1
    /// instead of a 400.
    page: Option<String>,
}

/// `GET /?page=<int>` handler.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(params): Query<DashboardQuery>,
) -> DashboardTemplate {
    let requested: i64 = params
        .page
        .as_deref()
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);

    let history = state.store.load();
    let page = paginate(history.len(), requested);

    let latest = history.first().cloned();
    let records = history[page.start..page.end].to_vec();

    PAGES_RENDERED_TOTAL.inc();
    debug!(
        "Rendering page {}/{} with {} records",
        page.number,
        page.total_pages,
        records.len()
    );

    DashboardTemplate {
        latest,
        records,
        page,
    }
}
