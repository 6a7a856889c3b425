//! Response models for the skin proxy API
//!
//! Defines the structure of outgoing HTTP response bodies.

use axum::{
    body::Bytes,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error response body for the JSON endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// A PNG image body
#[derive(Debug, Clone)]
pub struct PngResponse(pub Bytes);

impl IntoResponse for PngResponse {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "image/png")], self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Player not found");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Player not found"}"#);
    }

    #[test]
    fn test_png_response_sets_content_type() {
        let response = PngResponse(Bytes::from_static(b"\x89PNG")).into_response();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
    }
}
