//! Sitemap route handler

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};

use crate::db;
use crate::error::Result;
use crate::AppState;

/// One `<url>` entry in the sitemap
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<DateTime<Utc>>,
}

/// Serve sitemap.xml over everything published.
pub async fn sitemap(State(state): State<AppState>) -> Result<Response> {
    let base = state.base_url.trim_end_matches('/');
    let mut entries = Vec::new();

    // Listing pages first; they have no single source row to date them
    for path in ["/", "/packages", "/stays", "/blog"] {
        entries.push(SitemapEntry {
            loc: format!("{}{}", base, path),
            lastmod: None,
        });
    }

    for (slug, published_at) in db::get_published_slugs(&state.db, "page").await? {
        // The homepage row is already covered by "/"
        if slug == "home" {
            continue;
        }
        entries.push(SitemapEntry {
            loc: format!("{}/{}", base, slug),
            lastmod: published_at,
        });
    }

    for (slug, published_at) in db::get_published_slugs(&state.db, "post").await? {
        entries.push(SitemapEntry {
            loc: format!("{}/blog/{}", base, slug),
            lastmod: published_at,
        });
    }

    for (slug, published_at) in db::get_package_slugs(&state.db).await? {
        entries.push(SitemapEntry {
            loc: format!("{}/packages/{}", base, slug),
            lastmod: published_at,
        });
    }

    for slug in db::get_stay_slugs(&state.db).await? {
        entries.push(SitemapEntry {
            loc: format!("{}/stays/{}", base, slug),
            lastmod: None,
        });
    }

    let xml = build_sitemap(&entries);

    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}

/// Serialize entries into sitemap XML.
pub fn build_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        if let Some(lastmod) = entry.lastmod {
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                lastmod.format("%Y-%m-%d")
            ));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_build_sitemap_lists_each_entry() {
        let entries = vec![
            SitemapEntry {
                loc: "https://www.yatrasewa.in/".to_string(),
                lastmod: None,
            },
            SitemapEntry {
                loc: "https://www.yatrasewa.in/packages/kedarnath-darshan".to_string(),
                lastmod: Some(Utc.with_ymd_and_hms(2026, 5, 12, 6, 0, 0).unwrap()),
            },
        ];

        let xml = build_sitemap(&entries);

        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<loc>https://www.yatrasewa.in/</loc>"));
        assert!(xml.contains("<loc>https://www.yatrasewa.in/packages/kedarnath-darshan</loc>"));
        assert!(xml.contains("<lastmod>2026-05-12</lastmod>"));
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_lastmod_is_omitted_when_unknown() {
        let entries = vec![SitemapEntry {
            loc: "https://www.yatrasewa.in/stays".to_string(),
            lastmod: None,
        }];

        assert!(!build_sitemap(&entries).contains("<lastmod>"));
    }

    #[test]
    fn test_locs_are_xml_escaped() {
        let entries = vec![SitemapEntry {
            loc: "https://www.yatrasewa.in/blog?page=1&cat=tips".to_string(),
            lastmod: None,
        }];

        let xml = build_sitemap(&entries);
        assert!(xml.contains("page=1&amp;cat=tips"));
        assert!(!xml.contains("&cat"));
    }
}
