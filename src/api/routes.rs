//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{cape_handler, head_handler, player_handler, skin_handler, AppState};

/// Path segments that belong to the image endpoints rather than to players
pub const RESERVED_SEGMENTS: [&str; 3] = ["head", "skin", "cape"];

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /head?username=&size=` - Head thumbnail PNG
/// - `GET /skin?username=` - Raw skin PNG
/// - `GET /cape?username=` - Raw cape PNG
/// - `GET /:name` - Texture descriptor JSON
///
/// Static routes take precedence over `/:name`, so the reserved segments
/// never reach the JSON handler.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/head", get(head_handler))
        .route("/skin", get(skin_handler))
        .route("/cape", get(cape_handler))
        .route("/:name", get(player_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::cache::CacheStore;
    use crate::error::UpstreamError;
    use crate::upstream::{MockImageFetcher, MockTextureProvider, TextureProvider};

    /// App whose only provider never finds anyone and expects exactly `lookups` calls
    fn create_test_app(lookups: usize) -> Router {
        let mut provider = MockTextureProvider::new();
        provider.expect_name().return_const("nobody");
        provider
            .expect_fetch_textures()
            .times(lookups)
            .returning(|_| Err(UpstreamError::NoTextures));
        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_fetch_image().times(0);

        let providers: Vec<Arc<dyn TextureProvider>> = vec![Arc::new(provider)];
        create_router(AppState::new(
            CacheStore::new(600),
            providers,
            Arc::new(fetcher),
        ))
    }

    async fn send_get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_reserved_segments_never_reach_player_handler() {
        for segment in RESERVED_SEGMENTS {
            // No username: the image handler answers 400 without any lookup
            let response = send_get(create_test_app(0), &format!("/{}", segment)).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "/{}", segment);
            assert_ne!(
                response.headers().get(header::CONTENT_TYPE).unwrap(),
                "application/json"
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_player_is_json_404() {
        let response = send_get(create_test_app(1), "/Notch").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_image_endpoints_404_for_unknown_player() {
        for uri in [
            "/head?username=ghost",
            "/skin?username=ghost",
            "/cape?username=ghost",
        ] {
            let response = send_get(create_test_app(1), uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_invalid_size_is_rejected_before_lookup() {
        let response = send_get(create_test_app(0), "/head?username=Notch&size=big").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
