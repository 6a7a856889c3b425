//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default TTL in seconds for rendered images
pub const DEFAULT_TTL: u64 = 600;
/// TTL in seconds for resolved texture descriptors
pub const DEFAULT_TEXTURES_TTL: u64 = 3600;
/// HTTP server port
pub const DEFAULT_PORT: u16 = 3000;
/// Outbound request timeout in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT: u64 = 5;
/// Expiry sweep interval in seconds
pub const DEFAULT_CLEANUP_INTERVAL: u64 = 60;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for cache entries without explicit TTL
    pub default_ttl: u64,
    /// TTL in seconds for texture descriptors
    pub textures_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Timeout in seconds for each outbound request
    pub upstream_timeout: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default cache TTL in seconds (default: 600)
    /// - `TEXTURES_TTL` - Texture descriptor TTL in seconds (default: 3600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_TIMEOUT` - Outbound request timeout in seconds (default: 5)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env_or("DEFAULT_TTL", DEFAULT_TTL),
            textures_ttl: env_or("TEXTURES_TTL", DEFAULT_TEXTURES_TTL),
            server_port: env_or("SERVER_PORT", DEFAULT_PORT),
            upstream_timeout: env_or("UPSTREAM_TIMEOUT", DEFAULT_UPSTREAM_TIMEOUT),
            cleanup_interval: env_or("CLEANUP_INTERVAL", DEFAULT_CLEANUP_INTERVAL),
        }
    }

    /// Outbound request timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
            textures_ttl: DEFAULT_TEXTURES_TTL,
            server_port: DEFAULT_PORT,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
        }
    }
}

/// Reads and parses `key`, falling back to `default` when unset or unparseable.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
