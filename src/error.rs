use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("Already signed up for this activity")]
    AlreadySignedUp,

    #[error("Missing email")]
    MissingEmail,
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownActivity => ApiError::ActivityNotFound,
            CatalogError::UnknownParticipant => ApiError::ParticipantNotFound,
            CatalogError::AlreadySignedUp => ApiError::AlreadySignedUp,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::ActivityNotFound | ApiError::ParticipantNotFound => StatusCode::NOT_FOUND,
            ApiError::AlreadySignedUp | ApiError::MissingEmail => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
