//! Gateway request/response types and error mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionStatus};

/// Body of the status update operation
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: TransactionStatus,
}

/// Raw pagination query parameters.
///
/// Kept as strings so that non-numeric values fall back to the defaults
/// silently instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// List response envelope. `page_size` reports the number of records actually
/// returned, not the requested size.
#[derive(Debug, Serialize)]
pub struct TransactionPage {
    pub page: i64,
    pub page_size: usize,
    pub transactions: Vec<Transaction>,
}

/// Error body: `{"error": "<message>"}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Transport-level failure with its HTTP status
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Decode a JSON body, mapping any failure to a 400 with a uniform message.
/// Handlers decode manually so malformed payloads never surface as the
/// framework's default rejection statuses.
pub fn decode_json<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Failed to decode request body: {}", e);
        ApiError::bad_request("invalid request body")
    })
}
