//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError and a global
//! middleware that turns every other error response (unmatched routes, wrong
//! methods, extractor rejections, timeouts) into the same JSON shape.

use axum::{
    Json,
    body::{Body, Bytes},
    extract::Request,
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use super::RequestId;
use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// Server-side failures are logged here and reported with a generic
    /// message, so sources never reach the client.
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        let code = error_to_code(&self);

        let error_response = match &self {
            AppError::NotFound { entity, field, value } => ErrorResponse::not_found_error(entity, field, value),
            AppError::Duplicate { entity, field, value } => ErrorResponse::duplicate_error(entity, field, value),
            AppError::Validation { field, reason } => ErrorResponse::validation_error(field, reason),
            AppError::ValidationErrors { errors } => ErrorResponse::validation_errors(errors),
            AppError::BadRequest { message, details } => {
                let response = ErrorResponse::new(code, message);
                match details {
                    Some(details) => response.with_details(json!({ "error": details })),
                    None => response,
                }
            }
            AppError::Database { operation, source } => {
                tracing::error!(operation = %operation, error = %source, "Database operation failed");
                ErrorResponse::new(code, "Database operation failed")
            }
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = %source, "Configuration error");
                ErrorResponse::new(code, "Server configuration error")
            }
            AppError::ConnectionPool { source } => {
                tracing::error!(error = %source, "Connection pool unavailable");
                ErrorResponse::new(code, "Database connection unavailable")
            }
            AppError::Internal { source } => {
                tracing::error!(error = %source, "Internal error");
                ErrorResponse::new(code, "An internal error occurred")
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Database { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Maps an AppError variant to the `code` field of the error body.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Duplicate { .. } => "DUPLICATE_ENTRY",
        AppError::Validation { .. } | AppError::ValidationErrors { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Database { .. } => "DATABASE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::ConnectionPool { .. } => "SERVICE_UNAVAILABLE",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

/// Default code and message for error statuses produced outside handlers.
fn status_defaults(status: StatusCode) -> (&'static str, &'static str) {
    match status {
        StatusCode::BAD_REQUEST => ("BAD_REQUEST", "Bad request"),
        StatusCode::NOT_FOUND => ("NOT_FOUND", "The requested resource was not found"),
        StatusCode::METHOD_NOT_ALLOWED => ("METHOD_NOT_ALLOWED", "HTTP method not allowed for this endpoint"),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => ("UNSUPPORTED_MEDIA_TYPE", "Unsupported media type"),
        StatusCode::REQUEST_TIMEOUT => ("REQUEST_TIMEOUT", "Request timeout"),
        StatusCode::PAYLOAD_TOO_LARGE => ("PAYLOAD_TOO_LARGE", "Request payload too large"),
        StatusCode::SERVICE_UNAVAILABLE => ("SERVICE_UNAVAILABLE", "Service temporarily unavailable"),
        s if s.is_server_error() => ("INTERNAL_SERVER_ERROR", "An internal server error occurred"),
        _ => ("UNKNOWN_ERROR", "An unknown error occurred"),
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

/// Global error handling middleware.
///
/// Error responses that are not JSON are rewritten into `ErrorResponse`,
/// keeping any plain-text reason as `details`. Every error body gets the
/// request id when one is known.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let request_id = request.extensions().get::<RequestId>().map(|r| r.0.clone());
    let response = next.run(request).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let was_json = is_json(&response);
    let (mut parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_else(|_| Bytes::new());

    let mut payload = if was_json {
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) if value.is_object() => value,
            _ => return Response::from_parts(parts, Body::from(bytes)),
        }
    } else {
        let (code, message) = status_defaults(status);
        let original = String::from_utf8_lossy(&bytes).trim().to_string();
        let mut error_response = ErrorResponse::new(code, message);
        if let Some(id) = request_id.as_deref() {
            error_response = error_response.with_request_id(id);
        }
        if !original.is_empty() {
            error_response = error_response.with_details(json!({ "error": original }));
        }
        json!(error_response)
    };

    if let (Some(id), Some(object)) = (request_id, payload.as_object_mut()) {
        object.entry("request_id").or_insert(Value::String(id));
    }

    let body = payload.to_string();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts
        .headers
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Response::from_parts(parts, Body::from(body))
}
