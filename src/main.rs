use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yatrasewa_web::cache::{self, AppCache};
use yatrasewa_web::estimator::RateTable;
use yatrasewa_web::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,yatrasewa_web=debug")),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .context("failed to connect to Postgres")?;

    let rates = match std::env::var("RATE_TABLE_PATH") {
        Ok(path) => {
            info!("Loading rate table from {}", path);
            RateTable::from_json_file(Path::new(&path))
                .with_context(|| format!("failed to load rate table from {}", path))?
        }
        Err(_) => RateTable::standard(),
    };

    let base_url =
        std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "https://www.yatrasewa.in".to_string());

    let app_cache = AppCache::new();
    tokio::spawn(cache::start_cache_warmer(app_cache.clone(), db.clone()));

    let state = AppState {
        db,
        cache: app_cache,
        rates: Arc::new(rates),
        base_url,
    };

    let app = routes::router(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
