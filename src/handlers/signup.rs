use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SignupQuery {
    pub email: Option<String>,
}

/// POST /activities/{name}/signup?email=... — add a participant.
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<Value>, ApiError> {
    let email = match query.email.as_deref().map(str::trim) {
        Some(e) if !e.is_empty() => e.to_string(),
        _ => return Err(ApiError::MissingEmail),
    };

    state.catalog.signup(&name, &email).await?;

    info!(activity = %name, %email, "Signed up participant");
    Ok(Json(json!({"message": format!("Signed up {email} for {name}")})))
}
