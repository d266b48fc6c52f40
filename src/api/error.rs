use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::models::profile::ProfileError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidProfile(#[from] ProfileError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidProfile(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = %status, "request.rejected");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
