//! Property stay route handlers

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::cache;
use crate::db;
use crate::error::Result;
use crate::models::StayProperty;
use crate::AppState;

/// Query parameters for the stay listing
#[derive(Debug, Deserialize)]
pub struct StayListQuery {
    #[serde(default)]
    pub tier: Option<String>,
}

/// Stay listing template
#[derive(Template)]
#[template(path = "stays/list.html")]
struct StayListTemplate {
    stays: Vec<StayProperty>,
    current_tier: String,
    filtering: bool,
    has_stays: bool,
}

/// Stay detail template
#[derive(Template)]
#[template(path = "stays/detail.html")]
struct StayDetailTemplate {
    stay: StayProperty,
    amenities: Vec<String>,
    has_amenities: bool,
    seo_title: String,
}

/// Stay listing page, optionally filtered by tier
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<StayListQuery>,
) -> Result<Html<String>> {
    // Only the three known tiers filter; anything else lists everything
    let tier = query
        .tier
        .as_deref()
        .filter(|t| matches!(*t, "budget" | "standard" | "luxury"));

    let stays = db::get_stays(&state.db, tier).await?;

    let template = StayListTemplate {
        has_stays: !stays.is_empty(),
        stays,
        current_tier: tier.unwrap_or_default().to_string(),
        filtering: tier.is_some(),
    };

    Ok(Html(template.render()?))
}

/// Stay detail page
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let stay = db::get_stay(&state.db, &slug).await?;
    let settings = cache::get_settings(&state.cache, &state.db).await;

    let amenities = stay.amenity_list();

    let template = StayDetailTemplate {
        seo_title: format!("{}{}", stay.name, settings.default_seo_title_suffix),
        has_amenities: !amenities.is_empty(),
        amenities,
        stay,
    };

    Ok(Html(template.render()?))
}
