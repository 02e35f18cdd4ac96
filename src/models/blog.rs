//! Blog and page-snapshot models.
//!
//! Published pages store a frozen JSON snapshot of their content blocks.
//! Blocks are a tagged enum so the renderer's match is exhaustive; an
//! editor cannot publish a block type the site does not know how to draw.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// SEO and social metadata carried in a published snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub seo_title: String,
    #[serde(default)]
    pub seo_description: String,
    #[serde(default)]
    pub og_image_url: String,
    #[serde(default = "default_robots")]
    pub robots: String,
}

fn default_robots() -> String {
    "index,follow".to_string()
}

/// The frozen form of a page at publish time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedSnapshot {
    pub meta: PageMeta,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// One Q&A entry inside a FAQ block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer_html: String,
}

/// A content block inside a published snapshot.
///
/// `rich_text` HTML comes from the CMS editor and is emitted verbatim;
/// every other text field is escaped on render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Hero {
        heading: String,
        #[serde(default)]
        subheading: String,
        #[serde(default)]
        image_url: String,
    },
    RichText {
        html: String,
    },
    Image {
        url: String,
        #[serde(default)]
        alt: String,
        #[serde(default)]
        caption: String,
    },
    Cta {
        label: String,
        href: String,
    },
    Faq {
        items: Vec<FaqItem>,
    },
}

impl Block {
    /// Render the block to an HTML fragment.
    pub fn to_html(&self) -> String {
        match self {
            Block::Hero {
                heading,
                subheading,
                image_url,
            } => {
                let mut html = String::from("<section class=\"block-hero\">");
                if !image_url.is_empty() {
                    html.push_str(&format!(
                        "<img src=\"{}\" alt=\"\">",
                        escape_html(image_url)
                    ));
                }
                html.push_str(&format!("<h1>{}</h1>", escape_html(heading)));
                if !subheading.is_empty() {
                    html.push_str(&format!("<p>{}</p>", escape_html(subheading)));
                }
                html.push_str("</section>");
                html
            }
            Block::RichText { html } => {
                format!("<div class=\"block-richtext\">{}</div>", html)
            }
            Block::Image { url, alt, caption } => {
                let mut html = format!(
                    "<figure class=\"block-image\"><img src=\"{}\" alt=\"{}\">",
                    escape_html(url),
                    escape_html(alt)
                );
                if !caption.is_empty() {
                    html.push_str(&format!("<figcaption>{}</figcaption>", escape_html(caption)));
                }
                html.push_str("</figure>");
                html
            }
            Block::Cta { label, href } => format!(
                "<p class=\"block-cta\"><a class=\"btn\" href=\"{}\">{}</a></p>",
                escape_html(href),
                escape_html(label)
            ),
            Block::Faq { items } => {
                let mut html = String::from("<section class=\"block-faq\">");
                for item in items {
                    html.push_str(&format!(
                        "<details><summary>{}</summary><div>{}</div></details>",
                        escape_html(&item.question),
                        item.answer_html
                    ));
                }
                html.push_str("</section>");
                html
            }
        }
    }
}

/// Minimal HTML escaping for attribute and text positions
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Blog post card for listings
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPostSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub featured_image_url: Option<String>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
    pub category_color: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub reading_time_minutes: Option<i32>,
}

impl BlogPostSummary {
    pub fn published_display(&self) -> String {
        self.published_at
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_default()
    }

    pub fn category_label(&self) -> &str {
        self.category_name.as_deref().unwrap_or("Yatra notes")
    }

    pub fn image_url(&self) -> &str {
        self.featured_image_url
            .as_deref()
            .unwrap_or("/static/img/placeholder.svg")
    }

    pub fn reading_time_display(&self) -> String {
        match self.reading_time_minutes {
            Some(mins) => format!("{} min read", mins),
            None => String::new(),
        }
    }
}

/// Blog category from blog_categories
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub color: String,
    pub sort_order: i32,
}
