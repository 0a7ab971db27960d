use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fundboard_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::Database(db)) => database_status(db),
            ApiError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn database_status(err: &DatabaseError) -> StatusCode {
    if err.is_constraint_violation() {
        return StatusCode::CONFLICT;
    }
    if err.is_permission_denied() {
        return StatusCode::FORBIDDEN;
    }
    match err {
        DatabaseError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DatabaseError::ConnectionFailed(_) | DatabaseError::QueryFailed { .. } => {
            StatusCode::BAD_GATEWAY
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
