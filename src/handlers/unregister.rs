use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterQuery {
    pub email: Option<String>,
}

/// DELETE /activities/{name}/participants?email=... — remove a participant.
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<UnregisterQuery>,
) -> Result<Json<Value>, ApiError> {
    let email = match query.email.as_deref().map(str::trim) {
        Some(e) if !e.is_empty() => e.to_string(),
        _ => return Err(ApiError::MissingEmail),
    };

    state.catalog.unregister(&name, &email).await?;

    info!(activity = %name, %email, "Removed participant");
    Ok(Json(json!({"message": format!("Removed {email} from {name}")})))
}
