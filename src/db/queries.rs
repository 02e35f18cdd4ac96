//! Database queries for CMS, blog, packages, stays, leads, and vouchers

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{
    BlogCategory, BlogPostSummary, CmsPage, CmsSettings, NewLead, PackageSummary, StayProperty,
    TourPackage, Voucher,
};

/// Get a published CMS page by slug
pub async fn get_published_page(pool: &PgPool, slug: &str) -> Result<CmsPage> {
    let page = sqlx::query_as::<_, CmsPage>(
        r#"
        SELECT
            id,
            slug,
            title,
            page_type,
            status,
            seo_title,
            seo_description,
            og_image_url,
            robots,
            published_snapshot,
            published_at,
            template_key
        FROM cms_pages
        WHERE slug = $1
          AND status = 'published'
          AND page_type = 'page'
          AND deleted_at IS NULL
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(page)
}

/// Get a published blog post by slug
pub async fn get_blog_post(pool: &PgPool, slug: &str) -> Result<CmsPage> {
    let page = sqlx::query_as::<_, CmsPage>(
        r#"
        SELECT
            id,
            slug,
            title,
            page_type,
            status,
            seo_title,
            seo_description,
            og_image_url,
            robots,
            published_snapshot,
            published_at,
            template_key
        FROM cms_pages
        WHERE slug = $1
          AND status = 'published'
          AND page_type = 'post'
          AND deleted_at IS NULL
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(page)
}

/// Get blog posts with optional category filter
pub async fn get_blog_posts(
    pool: &PgPool,
    category_slug: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<Vec<BlogPostSummary>> {
    let posts = match category_slug {
        Some(cat) => {
            sqlx::query_as::<_, BlogPostSummary>(
                r#"
                SELECT
                    p.slug,
                    p.title,
                    p.excerpt,
                    p.featured_image_url,
                    c.name as category_name,
                    c.slug as category_slug,
                    c.color as category_color,
                    p.published_at,
                    p.reading_time_minutes
                FROM cms_pages p
                LEFT JOIN blog_categories c ON p.category_id = c.id AND c.deleted_at IS NULL
                WHERE p.page_type = 'post'
                  AND p.status = 'published'
                  AND p.deleted_at IS NULL
                  AND c.slug = $1
                ORDER BY p.published_at DESC NULLS LAST
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(cat)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, BlogPostSummary>(
                r#"
                SELECT
                    p.slug,
                    p.title,
                    p.excerpt,
                    p.featured_image_url,
                    c.name as category_name,
                    c.slug as category_slug,
                    c.color as category_color,
                    p.published_at,
                    p.reading_time_minutes
                FROM cms_pages p
                LEFT JOIN blog_categories c ON p.category_id = c.id AND c.deleted_at IS NULL
                WHERE p.page_type = 'post'
                  AND p.status = 'published'
                  AND p.deleted_at IS NULL
                ORDER BY p.published_at DESC NULLS LAST
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(posts)
}

/// Count blog posts (for pagination)
pub async fn count_blog_posts(pool: &PgPool, category_slug: Option<&str>) -> Result<i64> {
    let count: i64 = match category_slug {
        Some(cat) => {
            sqlx::query_scalar(
                r#"
                SELECT COUNT(*)
                FROM cms_pages p
                JOIN blog_categories c ON p.category_id = c.id AND c.deleted_at IS NULL
                WHERE p.page_type = 'post'
                  AND p.status = 'published'
                  AND p.deleted_at IS NULL
                  AND c.slug = $1
                "#,
            )
            .bind(cat)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_scalar(
                r#"
                SELECT COUNT(*)
                FROM cms_pages
                WHERE page_type = 'post'
                  AND status = 'published'
                  AND deleted_at IS NULL
                "#,
            )
            .fetch_one(pool)
            .await?
        }
    };

    Ok(count)
}

/// Get all blog categories
pub async fn get_blog_categories(pool: &PgPool) -> Result<Vec<BlogCategory>> {
    let categories = sqlx::query_as::<_, BlogCategory>(
        r#"
        SELECT id, name, slug, description, color, sort_order
        FROM blog_categories
        WHERE deleted_at IS NULL
        ORDER BY sort_order, name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

/// Get CMS settings
pub async fn get_cms_settings(pool: &PgPool) -> Result<CmsSettings> {
    let settings = sqlx::query_as::<_, CmsSettings>(
        r#"
        SELECT
            site_name,
            default_seo_title_suffix,
            default_og_image_url,
            nav_json,
            footer_json
        FROM cms_settings
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?
    .unwrap_or_default();

    Ok(settings)
}

/// Get active packages for the listing page
pub async fn get_active_packages(pool: &PgPool) -> Result<Vec<PackageSummary>> {
    let packages = sqlx::query_as::<_, PackageSummary>(
        r#"
        SELECT slug, name, region, summary, duration_days, price_from, hero_image_url
        FROM tour_packages
        WHERE active = true
          AND deleted_at IS NULL
        ORDER BY price_from, name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(packages)
}

/// Get an active package by slug
pub async fn get_package(pool: &PgPool, slug: &str) -> Result<TourPackage> {
    let package = sqlx::query_as::<_, TourPackage>(
        r#"
        SELECT
            id, slug, name, region, summary, description_html,
            duration_days, price_from, hero_image_url, highlights, published_at
        FROM tour_packages
        WHERE slug = $1
          AND active = true
          AND deleted_at IS NULL
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(package)
}

/// Get active stay properties, optionally filtered by tier
pub async fn get_stays(pool: &PgPool, tier: Option<&str>) -> Result<Vec<StayProperty>> {
    let stays = match tier {
        Some(t) => {
            sqlx::query_as::<_, StayProperty>(
                r#"
                SELECT id, slug, name, location, tier, summary,
                       nightly_rate, hero_image_url, amenities
                FROM stay_properties
                WHERE active = true
                  AND deleted_at IS NULL
                  AND tier = $1
                ORDER BY nightly_rate, name
                "#,
            )
            .bind(t)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, StayProperty>(
                r#"
                SELECT id, slug, name, location, tier, summary,
                       nightly_rate, hero_image_url, amenities
                FROM stay_properties
                WHERE active = true
                  AND deleted_at IS NULL
                ORDER BY nightly_rate, name
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(stays)
}

/// Get an active stay property by slug
pub async fn get_stay(pool: &PgPool, slug: &str) -> Result<StayProperty> {
    let stay = sqlx::query_as::<_, StayProperty>(
        r#"
        SELECT id, slug, name, location, tier, summary,
               nightly_rate, hero_image_url, amenities
        FROM stay_properties
        WHERE slug = $1
          AND active = true
          AND deleted_at IS NULL
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(stay)
}

/// Insert a new lead, returning its id
pub async fn insert_lead(pool: &PgPool, lead: &NewLead) -> Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO leads
            (name, email, phone, message, package_slug, travel_date, party_size, source)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(&lead.name)
    .bind(&lead.email)
    .bind(&lead.phone)
    .bind(&lead.message)
    .bind(&lead.package_slug)
    .bind(lead.travel_date)
    .bind(lead.party_size)
    .bind(&lead.source)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Look up a voucher by its printed code
pub async fn get_voucher(pool: &PgPool, code: &str) -> Result<Voucher> {
    let voucher = sqlx::query_as::<_, Voucher>(
        r#"
        SELECT id, code, holder_name, package_name, valid_until, status, issued_at
        FROM vouchers
        WHERE code = $1
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(voucher)
}

/// Published slugs of a page type, for the sitemap
pub async fn get_published_slugs(
    pool: &PgPool,
    page_type: &str,
) -> Result<Vec<(String, Option<DateTime<Utc>>)>> {
    let slugs = sqlx::query_as::<_, (String, Option<DateTime<Utc>>)>(
        r#"
        SELECT slug, published_at
        FROM cms_pages
        WHERE page_type = $1
          AND status = 'published'
          AND deleted_at IS NULL
        ORDER BY slug
        "#,
    )
    .bind(page_type)
    .fetch_all(pool)
    .await?;

    Ok(slugs)
}

/// Active package slugs, for the sitemap
pub async fn get_package_slugs(pool: &PgPool) -> Result<Vec<(String, Option<DateTime<Utc>>)>> {
    let slugs = sqlx::query_as::<_, (String, Option<DateTime<Utc>>)>(
        r#"
        SELECT slug, published_at
        FROM tour_packages
        WHERE active = true
          AND deleted_at IS NULL
        ORDER BY slug
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(slugs)
}

/// Active stay slugs, for the sitemap
pub async fn get_stay_slugs(pool: &PgPool) -> Result<Vec<String>> {
    let slugs = sqlx::query_scalar(
        r#"
        SELECT slug
        FROM stay_properties
        WHERE active = true
          AND deleted_at IS NULL
        ORDER BY slug
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(slugs)
}
