//! Error types for the skin proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, TextureKind};

// == Proxy Error Enum ==
/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// A required query parameter was absent or empty
    #[error("Missing {0}")]
    MissingParameter(&'static str),

    /// A query parameter could not be used
    #[error("Invalid {0}")]
    InvalidParameter(&'static str),

    /// No provider knows the player
    #[error("Player not found")]
    PlayerNotFound,

    /// The player resolved but lacks the requested texture
    #[error("{0} not found")]
    TextureNotFound(TextureKind),

    /// Fetching or rendering an image failed; the message is client-facing
    #[error("{0}")]
    Processing(&'static str),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::MissingParameter(_) | ProxyError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            ProxyError::PlayerNotFound | ProxyError::TextureNotFound(_) => StatusCode::NOT_FOUND,
            ProxyError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // The JSON endpoint answers in JSON; image endpoints answer in plain text
        match self {
            ProxyError::PlayerNotFound => {
                (status, Json(ErrorResponse::new(self.to_string()))).into_response()
            }
            other => (status, other.to_string()).into_response(),
        }
    }
}

// == Upstream Error Enum ==
/// Failure talking to a provider or downloading a texture.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connect, timeout, non-success status or body decode failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The username could not be placed into the provider URL
    #[error("cannot build request url for {0:?}")]
    InvalidUrl(String),

    /// The provider answered but listed neither a skin nor a cape
    #[error("response contained no textures")]
    NoTextures,
}

// == Render Error Enum ==
/// Failure turning a skin atlas into a head image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("skin atlas is {width}x{height}, too small to hold a head")]
    AtlasTooSmall { width: u32, height: u32 },

    #[error("invalid head size {0}")]
    InvalidSize(u32),
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, ProxyError>;
