//! API error types.

use crate::operation::Operation;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Client message for a field outside its allowed character set.
pub const INVALID_CHARACTERS_MESSAGE: &str = "Only letters and spaces are allowed!";

/// API error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `false` when present; omitted for operations that reply with a
    /// bare message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Human-readable error message.
    pub message: String,
}

/// API error type. Every variant remembers the operation that failed so the
/// response uses that operation's envelope and wording.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{operation}: missing required field '{field}'")]
    MissingField {
        operation: Operation,
        field: &'static str,
    },

    #[error("{operation}: {source}")]
    InvalidRecord {
        operation: Operation,
        #[source]
        source: roster_core::Error,
    },

    #[error("{operation}: malformed request body: {detail}")]
    MalformedBody { operation: Operation, detail: String },

    #[error("{operation}: store error: {source}")]
    Store {
        operation: Operation,
        #[source]
        source: roster_store::StoreError,
    },
}

impl ApiError {
    /// The operation that produced this error.
    pub fn operation(&self) -> Operation {
        match self {
            Self::MissingField { operation, .. }
            | Self::InvalidRecord { operation, .. }
            | Self::MalformedBody { operation, .. }
            | Self::Store { operation, .. } => *operation,
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField { .. } | Self::InvalidRecord { .. } | Self::MalformedBody { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client. Store details never leave the server.
    pub fn client_message(&self) -> String {
        match self {
            Self::MissingField { operation, .. } => operation.missing_fields_message().to_string(),
            Self::InvalidRecord { operation, source } => match source {
                roster_core::Error::MissingField(_) => {
                    operation.missing_fields_message().to_string()
                }
                roster_core::Error::InvalidCharacters(_) => INVALID_CHARACTERS_MESSAGE.to_string(),
            },
            Self::MalformedBody { detail, .. } => format!("Invalid request body: {detail}"),
            Self::Store { operation, .. } => operation.server_error_message().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let operation = self.operation();
        let status = self.status_code();

        if let Self::Store { source, .. } = &self {
            tracing::error!(operation = %operation, error = %source, "Store operation failed");
        } else {
            tracing::debug!(operation = %operation, error = %self, "Rejected request");
        }

        let body = ErrorResponse {
            success: operation.reports_success().then_some(false),
            message: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Attach the failing operation to lower-layer errors.
pub trait OperationContext<T> {
    fn during(self, operation: Operation) -> ApiResult<T>;
}

impl<T> OperationContext<T> for Result<T, roster_store::StoreError> {
    fn during(self, operation: Operation) -> ApiResult<T> {
        self.map_err(|source| ApiError::Store { operation, source })
    }
}

impl<T> OperationContext<T> for Result<T, roster_core::Error> {
    fn during(self, operation: Operation) -> ApiResult<T> {
        self.map_err(|source| ApiError::InvalidRecord { operation, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::Field;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_store_error_hides_details() {
        let err = ApiError::Store {
            operation: Operation::Delete,
            source: roster_store::StoreError::Config("secret detail".to_string()),
        };
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Server error. Try again!");
    }

    #[tokio::test]
    async fn test_create_errors_have_no_success_flag() {
        let err = ApiError::InvalidRecord {
            operation: Operation::Create,
            source: roster_core::Error::InvalidCharacters(Field::City),
        };
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("success").is_none());
        assert_eq!(body["message"], INVALID_CHARACTERS_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_field_message_per_operation() {
        let err = ApiError::InvalidRecord {
            operation: Operation::Update,
            source: roster_core::Error::MissingField(Field::State),
        };
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "All fields are required for update!");

        let err = ApiError::MissingField {
            operation: Operation::CheckExists,
            field: "oldname",
        };
        assert_eq!(err.client_message(), "Name is required!");
    }

    #[test]
    fn test_during_wraps_store_error() {
        let result: Result<(), roster_store::StoreError> =
            Err(roster_store::StoreError::Config("x".to_string()));
        let err = result.during(Operation::Read).unwrap_err();
        assert_eq!(err.operation(), Operation::Read);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
