//! CMS page models

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::blog::{Block, PageMeta, PublishedSnapshot};

/// CMS page row from cms_pages
#[derive(Debug, Clone, FromRow)]
pub struct CmsPage {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub page_type: String,
    pub status: String,
    pub seo_title: String,
    pub seo_description: String,
    pub og_image_url: String,
    pub robots: String,
    pub published_snapshot: Option<serde_json::Value>,
    pub published_at: Option<DateTime<Utc>>,
    pub template_key: String,
}

/// Site-wide CMS settings singleton
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CmsSettings {
    pub site_name: String,
    pub default_seo_title_suffix: String,
    pub default_og_image_url: String,
    pub nav_json: serde_json::Value,
    pub footer_json: serde_json::Value,
}

impl Default for CmsSettings {
    fn default() -> Self {
        Self {
            site_name: "Yatra Sewa".to_string(),
            default_seo_title_suffix: " | Yatra Sewa".to_string(),
            default_og_image_url: String::new(),
            nav_json: serde_json::json!([]),
            footer_json: serde_json::json!({}),
        }
    }
}

/// Parsed CMS page ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct ParsedPage {
    pub slug: String,
    pub title: String,
    pub meta: PageMeta,
    pub blocks: Vec<Block>,
    pub template_key: String,
}

impl CmsPage {
    /// Parse the published snapshot into a renderable page.
    ///
    /// A published row without a parseable snapshot is treated as not
    /// found by callers; the warning is the editor's breadcrumb.
    pub fn parse(self) -> Option<ParsedPage> {
        let raw = self.published_snapshot?;
        let snapshot: PublishedSnapshot = match serde_json::from_value(raw) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("unparseable snapshot for page '{}': {}", self.slug, e);
                return None;
            }
        };

        Some(ParsedPage {
            slug: self.slug,
            title: self.title,
            meta: snapshot.meta,
            blocks: snapshot.blocks,
            template_key: self.template_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_snapshot(snapshot: Option<serde_json::Value>) -> CmsPage {
        CmsPage {
            id: Uuid::new_v4(),
            slug: "kedarnath".to_string(),
            title: "Kedarnath".to_string(),
            page_type: "page".to_string(),
            status: "published".to_string(),
            seo_title: String::new(),
            seo_description: String::new(),
            og_image_url: String::new(),
            robots: "index,follow".to_string(),
            published_snapshot: snapshot,
            published_at: None,
            template_key: "default".to_string(),
        }
    }

    #[test]
    fn test_parse_without_snapshot_is_none() {
        assert!(page_with_snapshot(None).parse().is_none());
    }

    #[test]
    fn test_parse_malformed_snapshot_is_none() {
        let page = page_with_snapshot(Some(serde_json::json!({"blocks": "not-a-list"})));
        assert!(page.parse().is_none());
    }

    #[test]
    fn test_parse_valid_snapshot() {
        let page = page_with_snapshot(Some(serde_json::json!({
            "meta": {"title": "Kedarnath"},
            "blocks": [{"type": "rich_text", "html": "<p>Om</p>"}]
        })));

        let parsed = page.parse().unwrap();
        assert_eq!(parsed.slug, "kedarnath");
        assert_eq!(parsed.blocks.len(), 1);
    }
}
