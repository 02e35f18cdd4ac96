//! Yatra Sewa website.
//!
//! Rust/Axum frontend for a pilgrimage-tourism business: CMS pages and
//! blog, tour packages, property stays, lead capture, booking vouchers,
//! and the trip cost estimator that powers the budget planner.

pub mod cache;
pub mod db;
pub mod error;
pub mod estimator;
pub mod models;
pub mod routes;

use std::sync::Arc;

use sqlx::PgPool;

use cache::AppCache;
use estimator::RateTable;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
    pub rates: Arc<RateTable>,
    pub base_url: String,
}
