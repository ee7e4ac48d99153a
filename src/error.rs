use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

/// An error returned by an HTTP handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested record does not exist
    #[error("{0}")]
    NotFound(String),
    /// A path parameter could not be parsed as a record id
    #[error("{0}")]
    InvalidId(String),
    /// The database could not be reached or the query failed
    #[error("Database Error: {0}")]
    Db(#[from] DbErr),
}

/// JSON body sent for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::InvalidId(_) => StatusCode::NOT_FOUND,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable, machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidId(_) => "invalid_id",
            Self::Db(_) => "internal",
        }
    }

    pub fn body(&self) -> ErrorBody {
        let message = match self {
            // storage details stay in the logs
            Self::Db(_) => "internal server error".to_owned(),
            other => other.to_string(),
        };
        ErrorBody {
            error: self.code(),
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Db(err) = &self {
            tracing::error!(error = %err, "query failed");
        }
        (self.status(), Json(self.body())).into_response()
    }
}
