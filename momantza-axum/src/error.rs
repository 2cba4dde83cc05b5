use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use momantza_core::errors::TenancyError;

#[derive(Debug)]
pub struct TenancyAxumError(pub anyhow::Error);

impl From<anyhow::Error> for TenancyAxumError {
    fn from(e: anyhow::Error) -> Self {
        Self(e)
    }
}

impl From<TenancyError> for TenancyAxumError {
    fn from(e: TenancyError) -> Self {
        Self(e.into_anyhow())
    }
}

impl IntoResponse for TenancyAxumError {
    fn into_response(self) -> Response {
        // Keep the structured fields even when wrapped by anyhow contexts.
        let safe = match TenancyError::find_in(&self.0) {
            Some(err) => err.sanitize_for_client(),
            None => TenancyError::general_error(self.0.to_string()),
        };

        let status =
            StatusCode::from_u16(safe.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %format!("{:#}", self.0), "request failed");
        }
        (status, Json(safe.to_json())).into_response()
    }
}
