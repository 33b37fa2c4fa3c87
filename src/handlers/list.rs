use axum::extract::State;
use axum::Json;
use std::collections::BTreeMap;

use crate::catalog::Activity;
use crate::state::AppState;

/// GET /activities — the full catalog, name → record.
pub async fn list(State(state): State<AppState>) -> Json<BTreeMap<String, Activity>> {
    Json(state.catalog.list().await)
}
