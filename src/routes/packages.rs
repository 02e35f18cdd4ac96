//! Tour package route handlers

use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

use crate::cache::{self, AppCache};
use crate::db;
use crate::error::Result;
use crate::models::{PackageSummary, TourPackage};
use crate::AppState;

/// Package listing template
#[derive(Template)]
#[template(path = "packages/list.html")]
struct PackageListTemplate {
    packages: Vec<PackageSummary>,
    has_packages: bool,
}

/// Package detail template
#[derive(Template)]
#[template(path = "packages/detail.html")]
struct PackageDetailTemplate {
    package: TourPackage,
    highlights: Vec<String>,
    has_highlights: bool,
    seo_title: String,
    seo_description: String,
}

/// Package listing page
pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let packages: Vec<PackageSummary> =
        if let Some(cached) = state.cache.packages.get(AppCache::PACKAGES_KEY).await {
            tracing::debug!("Cache HIT for package listing");
            (*cached).clone()
        } else {
            tracing::debug!("Cache MISS for package listing");
            let packages = db::get_active_packages(&state.db).await?;
            state
                .cache
                .packages
                .insert(AppCache::PACKAGES_KEY.to_string(), Arc::new(packages.clone()))
                .await;
            packages
        };

    let template = PackageListTemplate {
        has_packages: !packages.is_empty(),
        packages,
    };

    Ok(Html(template.render()?))
}

/// Package detail page
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let package = db::get_package(&state.db, &slug).await?;
    let settings = cache::get_settings(&state.cache, &state.db).await;

    let highlights = package.highlight_list();

    let template = PackageDetailTemplate {
        seo_title: format!("{}{}", package.name, settings.default_seo_title_suffix),
        seo_description: package.summary.clone(),
        has_highlights: !highlights.is_empty(),
        highlights,
        package,
    };

    Ok(Html(template.render()?))
}
