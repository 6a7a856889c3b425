//! Cache Module
//!
//! Provides in-memory caching with TTL expiration for texture descriptors
//! and rendered images.

mod clock;
mod entry;
mod stats;
mod store;
mod value;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use value::{head_key, textures_key, CacheValue};

/// The process-wide cache as shared between handlers, the resolver and the
/// cleanup task.
pub type SharedCache = Arc<RwLock<CacheStore<CacheValue>>>;

/// Wraps a store for sharing.
pub fn shared(store: CacheStore<CacheValue>) -> SharedCache {
    Arc::new(RwLock::new(store))
}
