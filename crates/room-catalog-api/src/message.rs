//! Plain message payload shared by the placeholder endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body carrying a single human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    /// The message text.
    pub message: String,
}

impl MessageResponse {
    /// Create a response carrying `message`.
    ///
    /// `message` must be non-empty; debug builds assert it.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "MessageResponse requires a non-empty message");
        Self { message }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn test_serializes_to_message_object() {
        let json = serde_json::to_string(&MessageResponse::new("hello")).unwrap();
        assert_eq!(json, r#"{"message":"hello"}"#);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-empty message")]
    fn test_empty_message_is_rejected_in_debug_builds() {
        let _ = MessageResponse::new("");
    }

    #[test]
    fn test_into_response_is_200_json() {
        let response = MessageResponse::new("hello").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
