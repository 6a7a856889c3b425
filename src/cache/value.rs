//! Cached values and their key scheme.

use axum::body::Bytes;

use crate::models::TextureDescriptor;

/// Everything the proxy keeps in its cache.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    /// Resolved provider payload for a player
    Textures(TextureDescriptor),
    /// Encoded PNG bytes
    Image(Bytes),
}

/// Key for a player's resolved textures. Usernames are case-insensitive.
pub fn textures_key(username: &str) -> String {
    format!("textures_{}", username.to_lowercase())
}

/// Key for a rendered head of the given pixel size.
pub fn head_key(username: &str, size: u32) -> String {
    format!("head_{}_{}", username.to_lowercase(), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_case_insensitive() {
        assert_eq!(textures_key("Notch"), "textures_notch");
        assert_eq!(textures_key("NOTCH"), textures_key("notch"));
        assert_eq!(head_key("Notch", 128), "head_notch_128");
    }

    #[test]
    fn test_head_keys_differ_per_size() {
        assert_ne!(head_key("notch", 64), head_key("notch", 128));
    }
}
