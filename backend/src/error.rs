use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ApiError;
use thiserror::Error;

use crate::database::DatabaseError;

#[derive(Debug, Error)]
pub enum GpxExportError {
    #[error("failed to build GPX document: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
    #[error("generation time out of range: {0}")]
    Timestamp(#[from] time::error::ComponentRange),
    #[error("GPX output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Failures a request handler can end with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Trail not found")]
    TrailNotFound,
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    GpxExport(#[from] GpxExportError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TrailNotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::GpxExport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        (status, Json(ApiError::new(self.to_string()))).into_response()
    }
}
