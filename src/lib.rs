//! Skin Proxy - A caching proxy for Minecraft player textures
//!
//! Resolves skins and capes through a fixed chain of identity providers,
//! caches the results, and serves raw textures and rendered head avatars.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
