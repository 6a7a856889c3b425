//! Texture resolution across providers
//!
//! Providers are consulted strictly in order and the first one that returns
//! a usable descriptor wins. Results are never merged. Provider failures are
//! absorbed here and only logged; callers see found or not found.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{textures_key, CacheValue, SharedCache};
use crate::models::TextureDescriptor;
use crate::upstream::TextureProvider;

/// Read-through resolver for player textures.
#[derive(Clone)]
pub struct TextureResolver {
    providers: Vec<Arc<dyn TextureProvider>>,
    cache: SharedCache,
    /// TTL in seconds for resolved descriptors
    ttl: u64,
}

impl TextureResolver {
    /// Creates a resolver over `providers`, highest priority first.
    pub fn new(providers: Vec<Arc<dyn TextureProvider>>, cache: SharedCache, ttl: u64) -> Self {
        Self {
            providers,
            cache,
            ttl,
        }
    }

    /// Resolves `username` to its textures.
    ///
    /// Checks the cache first. On a miss each provider is tried in turn; a
    /// successful lookup is cached and returned. Misses are not cached, so a
    /// player unknown everywhere is looked up again on the next request.
    pub async fn resolve(&self, username: &str) -> Option<TextureDescriptor> {
        let key = textures_key(username);

        let cached = self.cache.write().await.get(&key);
        if let Some(CacheValue::Textures(descriptor)) = cached {
            debug!("Textures for {} served from cache", username);
            return Some(descriptor);
        }

        for provider in &self.providers {
            match provider.fetch_textures(username).await {
                Ok(descriptor) if !descriptor.is_empty() => {
                    info!("Resolved textures for {} via {}", username, provider.name());
                    self.cache.write().await.set(
                        key,
                        CacheValue::Textures(descriptor.clone()),
                        Some(self.ttl),
                    );
                    return Some(descriptor);
                }
                Ok(_) => {
                    debug!("{} returned no textures for {}", provider.name(), username);
                }
                Err(err) => {
                    debug!("{} lookup for {} failed: {}", provider.name(), username, err);
                }
            }
        }

        info!("No provider has textures for {}", username);
        None
    }
}
