//! Mapping of chat failures onto HTTP responses
//!
//! Both failure kinds reach the client as `{"detail": "..."}`. A missing
//! credential is 503, anything the provider did wrong is 502.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::core::ChatError;

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = match &self {
            ChatError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ChatError::Provider(e) => {
                error!(error = %e, "Provider call failed");
                StatusCode::BAD_GATEWAY
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
