use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::usecases::{auth::AuthError, plans::PlanError, users_plans::UsersPlansError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

fn error_body(status: StatusCode, message: String) -> Response {
    let body = Json(ErrorResponse {
        code: status.as_u16(),
        message,
    });

    (status, body).into_response()
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            // Don't leak internal error detail to client
            AuthError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        error_body(status, message)
    }
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            PlanError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        error_body(status, message)
    }
}

impl IntoResponse for UsersPlansError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            UsersPlansError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        error_body(status, message)
    }
}
