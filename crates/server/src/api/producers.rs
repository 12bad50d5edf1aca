//! Producer win-interval report endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use tracing::debug;

use awards_compute::{producer_intervals, ProducerIntervalReport};
use awards_ingest::AwardTable;

use crate::state::AppState;

use super::pretty_json;

/// Producers with the shortest and longest gaps between consecutive wins.
///
/// Recomputed from the loaded table on every call.
#[utoipa::path(
    get,
    path = "/producers",
    tag = "Producers",
    responses(
        (status = 200, description = "Interval report split into min and max halves", body = ProducerIntervalReport)
    )
)]
pub async fn producers(State(state): State<Arc<AppState>>) -> Response {
    let report = producer_intervals(state.table.records());
    debug!(min = report.min.len(), max = report.max.len(), "Computed producer intervals");
    pretty_json(&report)
}

/// The same body `/producers` serves, for the `report` command.
pub fn report_json(table: &AwardTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&producer_intervals(table.records()))
}
