//! Blog route handlers

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::cache::{self, AppCache};
use crate::db;
use crate::error::Result;
use crate::models::{Block, BlogCategory, BlogPostSummary};
use crate::AppState;

/// Query parameters for blog listing
#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

const POSTS_PER_PAGE: i64 = 9;

/// Blog listing template
#[derive(Template)]
#[template(path = "blog/list.html")]
struct BlogListTemplate {
    posts: Vec<BlogPostSummary>,
    categories: Vec<BlogCategory>,
    current_category: String,
    page: i64,
    total_pages: i64,
    has_previous: bool,
    has_next: bool,
    has_categories: bool,
    has_posts: bool,
    no_category_selected: bool,
}

/// Blog detail template
#[derive(Template)]
#[template(path = "blog/detail.html")]
struct BlogDetailTemplate {
    post: BlogPostSummary,
    blocks: Vec<Block>,
    related_posts: Vec<BlogPostSummary>,
    has_related: bool,
    seo_title: String,
    seo_description: String,
    og_image_url: String,
    has_og_image: bool,
}

/// Blog listing page
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> Result<Html<String>> {
    render_listing(&state, None, query.page).await
}

/// Blog listing by category
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<BlogListQuery>,
) -> Result<Html<String>> {
    render_listing(&state, Some(category.as_str()), query.page).await
}

async fn render_listing(
    state: &AppState,
    category: Option<&str>,
    page: i64,
) -> Result<Html<String>> {
    let page = page.max(1);
    let offset = (page - 1) * POSTS_PER_PAGE;

    // Listing pages are hot and identical for every visitor
    let cache_key = AppCache::blog_listing_key(category, page);
    let posts: Vec<BlogPostSummary> =
        if let Some(cached) = state.cache.blog_listings.get(&cache_key).await {
            tracing::debug!("Cache HIT for blog listing: {}", cache_key);
            (*cached).clone()
        } else {
            tracing::debug!("Cache MISS for blog listing: {}", cache_key);
            let posts = db::get_blog_posts(&state.db, category, POSTS_PER_PAGE, offset).await?;
            state
                .cache
                .blog_listings
                .insert(cache_key, Arc::new(posts.clone()))
                .await;
            posts
        };

    let categories = db::get_blog_categories(&state.db).await?;
    let total = db::count_blog_posts(&state.db, category).await?;
    let total_pages = (total + POSTS_PER_PAGE - 1) / POSTS_PER_PAGE;

    let template = BlogListTemplate {
        has_categories: !categories.is_empty(),
        has_posts: !posts.is_empty(),
        no_category_selected: category.is_none(),
        posts,
        categories,
        current_category: category.unwrap_or_default().to_string(),
        page,
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    };

    Ok(Html(template.render()?))
}

/// Blog detail page
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let parsed = if let Some(cached) = state.cache.blog_posts.get(&slug).await {
        tracing::debug!("Cache HIT for blog post: {}", slug);
        (*cached).clone()
    } else {
        tracing::debug!("Cache MISS for blog post: {}", slug);
        let page = db::get_blog_post(&state.db, &slug).await?;
        let parsed = page.parse().ok_or(crate::error::AppError::NotFound)?;
        state
            .cache
            .blog_posts
            .insert(slug.clone(), Arc::new(parsed.clone()))
            .await;
        parsed
    };

    let settings = cache::get_settings(&state.cache, &state.db).await;

    // Recent posts, minus the one being read
    let related_posts: Vec<BlogPostSummary> = db::get_blog_posts(&state.db, None, 4, 0)
        .await?
        .into_iter()
        .filter(|p| p.slug != parsed.slug)
        .take(3)
        .collect();

    let has_og_image = !parsed.meta.og_image_url.is_empty();

    let template = BlogDetailTemplate {
        post: BlogPostSummary {
            slug: parsed.slug,
            title: parsed.title,
            excerpt: parsed.meta.seo_description.clone(),
            featured_image_url: if parsed.meta.og_image_url.is_empty() {
                None
            } else {
                Some(parsed.meta.og_image_url.clone())
            },
            category_name: None,
            category_slug: None,
            category_color: None,
            published_at: None,
            reading_time_minutes: None,
        },
        blocks: parsed.blocks,
        has_related: !related_posts.is_empty(),
        related_posts,
        seo_title: if parsed.meta.seo_title.is_empty() {
            format!("{}{}", parsed.meta.title, settings.default_seo_title_suffix)
        } else {
            parsed.meta.seo_title
        },
        seo_description: parsed.meta.seo_description,
        og_image_url: parsed.meta.og_image_url,
        has_og_image,
    };

    Ok(Html(template.render()?))
}
