use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::client::ClientError;
use crate::controller::DispatchError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Backend error")]
    Upstream(#[from] ClientError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::NotFound(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::Upstream(e) => {
                error!(error = ?e, endpoint = e.endpoint(), "Backend error");
            }
        }
    }
}

impl From<DispatchError> for AppError {
    fn from(e: DispatchError) -> Self {
        match e {
            DispatchError::Client(e) => AppError::Upstream(e),
            DispatchError::UnknownEvent(index) => {
                AppError::NotFound(format!("No event at position {index}"))
            }
            DispatchError::EventNotFound(id) => AppError::NotFound(format!("No event with id {id}")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        let public_message = match &self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Upstream(e) => match e.endpoint() {
                Some(endpoint) => format!("The backend request to {endpoint} failed"),
                None => "The backend is misconfigured".to_string(),
            },
        };

        error_response(code, public_message, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_errors_map_to_status() {
        let not_found = AppError::from(DispatchError::UnknownEvent(4));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        let not_found = AppError::from(DispatchError::EventNotFound(9));
        assert_eq!(not_found.code(), "NOT_FOUND");

        let upstream = AppError::from(DispatchError::Client(ClientError::Status {
            endpoint: "review-likes",
            status: 500,
        }));
        assert_eq!(upstream.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(upstream.code(), "UPSTREAM_ERROR");
    }
}
