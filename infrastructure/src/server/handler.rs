//! Inquiry endpoint handler

use super::ServerState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use coaching_domain::{Acknowledgement, InquiryPayload};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Body of a 405 answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNotAllowed {
    pub message: String,
}

impl Default for MethodNotAllowed {
    fn default() -> Self {
        Self {
            message: "Method not allowed".to_string(),
        }
    }
}

/// Accept a contact form submission.
///
/// Only `POST` is accepted; pre-flight `OPTIONS` never reaches this handler.
/// The body may be JSON or a JSON string holding JSON.
#[instrument(skip(state, body), fields(bytes = body.len()))]
pub async fn contact_handler(
    State(state): State<ServerState>,
    method: Method,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(MethodNotAllowed::default()),
        )
            .into_response();
    }

    match state.accept.accept(InquiryPayload::from_body(&body)).await {
        Ok(_) => (StatusCode::OK, Json(Acknowledgement::accepted())).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, Json(e.acknowledgement())).into_response(),
    }
}
