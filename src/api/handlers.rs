//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use tracing::error;

use crate::cache::{self, head_key, CacheStore, CacheValue, SharedCache};
use crate::config::{Config, DEFAULT_TEXTURES_TTL};
use crate::error::{ProxyError, Result};
use crate::models::{HeadQuery, PngResponse, TextureDescriptor, TextureKind, TextureQuery};
use crate::render::render_head;
use crate::upstream::{
    build_client, HttpImageFetcher, HttpProvider, ImageFetcher, TextureProvider, TextureResolver,
};

const HEAD_FAILURE: &str = "Error processing head";
const SKIN_FAILURE: &str = "Error fetching skin";
const CAPE_FAILURE: &str = "Error fetching cape";

/// Application state shared across all handlers.
///
/// The cache is shared with the resolver and the cleanup task; everything
/// else is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache of texture descriptors and rendered heads
    pub cache: SharedCache,
    /// Provider fallback chain
    pub resolver: TextureResolver,
    /// Texture image downloader
    pub fetcher: Arc<dyn ImageFetcher>,
}

impl AppState {
    /// Creates a new AppState over the given cache, providers and fetcher.
    ///
    /// Providers are consulted in the order given.
    pub fn new(
        cache: CacheStore<CacheValue>,
        providers: Vec<Arc<dyn TextureProvider>>,
        fetcher: Arc<dyn ImageFetcher>,
    ) -> Self {
        Self::with_textures_ttl(cache, providers, fetcher, DEFAULT_TEXTURES_TTL)
    }

    /// Like [`AppState::new`] with an explicit descriptor TTL in seconds.
    pub fn with_textures_ttl(
        cache: CacheStore<CacheValue>,
        providers: Vec<Arc<dyn TextureProvider>>,
        fetcher: Arc<dyn ImageFetcher>,
        textures_ttl: u64,
    ) -> Self {
        let cache = cache::shared(cache);
        let resolver = TextureResolver::new(providers, cache.clone(), textures_ttl);
        Self {
            cache,
            resolver,
            fetcher,
        }
    }

    /// Creates the production AppState from configuration.
    ///
    /// Ely.by is asked first, TLauncher second. All outbound traffic shares
    /// one HTTP client.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = build_client(config.upstream_timeout())
            .context("failed to build upstream HTTP client")?;

        let providers: Vec<Arc<dyn TextureProvider>> = vec![
            Arc::new(HttpProvider::ely_by(client.clone())),
            Arc::new(HttpProvider::tlauncher(client.clone())),
        ];

        Ok(Self::with_textures_ttl(
            CacheStore::new(config.default_ttl),
            providers,
            Arc::new(HttpImageFetcher::new(client)),
            config.textures_ttl,
        ))
    }
}

/// Handler for GET /:name
///
/// Returns the player's texture descriptor as JSON.
pub async fn player_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TextureDescriptor>> {
    state
        .resolver
        .resolve(&name)
        .await
        .map(Json)
        .ok_or(ProxyError::PlayerNotFound)
}

/// Handler for GET /head?username=&size=
///
/// Renders the player's face at `size` pixels. Rendered heads are cached per
/// (username, size) and the cache is checked before any upstream call.
pub async fn head_handler(
    State(state): State<AppState>,
    Query(query): Query<HeadQuery>,
) -> Result<PngResponse> {
    let username = query.username()?;
    let size = query.size()?;

    let key = head_key(username, size);
    let cached = state.cache.write().await.get(&key);
    if let Some(CacheValue::Image(png)) = cached {
        return Ok(PngResponse(png));
    }

    let skin = fetch_texture(&state, username, TextureKind::Skin, HEAD_FAILURE).await?;

    let png = match tokio::task::spawn_blocking(move || render_head(&skin, size)).await {
        Ok(Ok(png)) => Bytes::from(png),
        Ok(Err(err)) => {
            error!("Failed to render head for {}: {}", username, err);
            return Err(ProxyError::Processing(HEAD_FAILURE));
        }
        Err(err) => {
            error!("Head render task for {} did not complete: {}", username, err);
            return Err(ProxyError::Processing(HEAD_FAILURE));
        }
    };

    state
        .cache
        .write()
        .await
        .set(key, CacheValue::Image(png.clone()), None);

    Ok(PngResponse(png))
}

/// Handler for GET /skin?username=
///
/// Streams the player's skin atlas unmodified.
pub async fn skin_handler(
    State(state): State<AppState>,
    Query(query): Query<TextureQuery>,
) -> Result<PngResponse> {
    let username = query.username()?;
    let skin = fetch_texture(&state, username, TextureKind::Skin, SKIN_FAILURE).await?;
    Ok(PngResponse(skin))
}

/// Handler for GET /cape?username=
///
/// Streams the player's cape unmodified.
pub async fn cape_handler(
    State(state): State<AppState>,
    Query(query): Query<TextureQuery>,
) -> Result<PngResponse> {
    let username = query.username()?;
    let cape = fetch_texture(&state, username, TextureKind::Cape, CAPE_FAILURE).await?;
    Ok(PngResponse(cape))
}

/// Resolves the player and downloads the texture of `kind`.
///
/// A download failure is logged and reported to the client as `failure`.
async fn fetch_texture(
    state: &AppState,
    username: &str,
    kind: TextureKind,
    failure: &'static str,
) -> Result<Bytes> {
    let url = state
        .resolver
        .resolve(username)
        .await
        .and_then(|descriptor| descriptor.texture(kind).map(|texture| texture.url.clone()))
        .ok_or(ProxyError::TextureNotFound(kind))?;

    state.fetcher.fetch_image(&url).await.map_err(|err| {
        error!("Failed to fetch {} for {} from {}: {}", kind.as_str(), username, url, err);
        ProxyError::Processing(failure)
    })
}
