//! HTTP routing.

pub mod blog;
pub mod cms;
pub mod health;
pub mod leads;
pub mod packages;
pub mod sitemap;
pub mod stays;
pub mod voucher;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::estimator;
use crate::AppState;

/// Build the application router.
///
/// The CMS slug route is registered last so every fixed route wins over
/// the catch-all.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(cms::home))
        .route("/blog", get(blog::list))
        .route("/blog/category/:category", get(blog::by_category))
        .route("/blog/:slug", get(blog::detail))
        .route("/packages", get(packages::list))
        .route("/packages/:slug", get(packages::detail))
        .route("/stays", get(stays::list))
        .route("/stays/:slug", get(stays::detail))
        .route("/voucher/:code", get(voucher::detail))
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/health", get(health::health))
        .route("/api/cache/stats", get(health::cache_stats))
        .route("/api/leads", post(leads::create))
        .nest("/api/estimator", estimator::router())
        .nest_service("/static", ServeDir::new("static"))
        .route("/:slug", get(cms::page))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
