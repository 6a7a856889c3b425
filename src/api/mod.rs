//! API Module
//!
//! HTTP handlers and routing for the skin proxy.
//!
//! # Endpoints
//! - `GET /:name` - Texture descriptor JSON
//! - `GET /head?username=&size=` - Head thumbnail PNG
//! - `GET /skin?username=` - Raw skin PNG
//! - `GET /cape?username=` - Raw cape PNG

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, RESERVED_SEGMENTS};
