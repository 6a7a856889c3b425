//! Request and Response models for the skin proxy API
//!
//! Texture payloads shared with the upstream providers, plus the query and
//! response types of the HTTP endpoints.

pub mod requests;
pub mod responses;
pub mod textures;

// Re-export commonly used types
pub use requests::{HeadQuery, TextureQuery, DEFAULT_HEAD_SIZE, MAX_HEAD_SIZE};
pub use responses::{ErrorResponse, PngResponse};
pub use textures::{Texture, TextureDescriptor, TextureKind};
