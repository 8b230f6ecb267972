use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{health::livez, products::list_products},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(all(test, feature = "memory"))]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use catalog_core::cache::{Cache, PRODUCTS_ALL_KEY};
    use catalog_core::catalog::{generate_seed_products, Product};
    use catalog_core::storage::{ProductRepository, RepositoryError, Result};

    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::CachedProductRepository;

    /// Store wrapper that counts how often the backing store is read.
    struct CountingRepository {
        products: Vec<Product>,
        calls: AtomicUsize,
    }

    impl CountingRepository {
        fn seeded() -> Self {
            Self {
                products: generate_seed_products(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for CountingRepository {
        async fn get_all(&self) -> Result<Vec<Product>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.products.clone())
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl ProductRepository for FailingRepository {
        async fn get_all(&self) -> Result<Vec<Product>> {
            Err(RepositoryError::ConnectionFailed("store unavailable".to_string()))
        }
    }

    fn cached_app(repo: Arc<CountingRepository>, cache: Arc<MemoryCache>) -> Router {
        let cached = CachedProductRepository::new(repo, cache, Duration::from_secs(30 * 60));
        create_app(AppState::build(Arc::new(cached)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_list_products_returns_seed_catalog() {
        let repo = Arc::new(CountingRepository::seeded());
        let cache = Arc::new(MemoryCache::new(10).unwrap());
        let app = cached_app(repo, cache);

        let (status, json) = get_json(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!([
                { "id": 1, "name": "Prod 1", "price": 1.2 },
                { "id": 2, "name": "Prod 2", "price": 2.2 },
                { "id": 3, "name": "Prod 3", "price": 3.3 },
            ])
        );
    }

    #[tokio::test]
    async fn test_second_request_is_served_from_cache() {
        let repo = Arc::new(CountingRepository::seeded());
        let cache = Arc::new(MemoryCache::new(10).unwrap());
        let app = cached_app(repo.clone(), cache.clone());

        // First request populates the cache
        let (status, first) = get_json(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
        assert!(cache.get(PRODUCTS_ALL_KEY).await.unwrap().is_some());

        // Second request is answered without touching the store
        let (status, second) = get_json(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second, first);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_store_failure_returns_server_error() {
        let cache = Arc::new(MemoryCache::new(10).unwrap());
        let cached = CachedProductRepository::new(
            Arc::new(FailingRepository),
            cache,
            Duration::from_secs(30 * 60),
        );
        let app = create_app(AppState::build(Arc::new(cached)));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_livez() {
        let repo = Arc::new(CountingRepository::seeded());
        let cache = Arc::new(MemoryCache::new(10).unwrap());
        let app = cached_app(repo.clone(), cache);

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let repo = Arc::new(CountingRepository::seeded());
        let cache = Arc::new(MemoryCache::new(10).unwrap());
        let app = cached_app(repo, cache);

        let response = app
            .oneshot(Request::builder().uri("/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
