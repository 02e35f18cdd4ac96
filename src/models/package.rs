//! Tour package models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::money::format_inr;

/// Package card for listings
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PackageSummary {
    pub slug: String,
    pub name: String,
    pub region: String,
    pub summary: String,
    pub duration_days: i32,
    pub price_from: Decimal,
    pub hero_image_url: Option<String>,
}

impl PackageSummary {
    pub fn price_display(&self) -> String {
        format_inr(self.price_from)
    }

    pub fn duration_display(&self) -> String {
        duration_display(self.duration_days)
    }

    pub fn image_url(&self) -> &str {
        self.hero_image_url
            .as_deref()
            .unwrap_or("/static/img/placeholder.svg")
    }
}

/// Full package row from tour_packages
#[derive(Debug, Clone, FromRow)]
pub struct TourPackage {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub region: String,
    pub summary: String,
    pub description_html: String,
    pub duration_days: i32,
    pub price_from: Decimal,
    pub hero_image_url: Option<String>,
    pub highlights: serde_json::Value,
    pub published_at: Option<DateTime<Utc>>,
}

impl TourPackage {
    pub fn price_display(&self) -> String {
        format_inr(self.price_from)
    }

    pub fn duration_display(&self) -> String {
        duration_display(self.duration_days)
    }

    pub fn image_url(&self) -> &str {
        self.hero_image_url
            .as_deref()
            .unwrap_or("/static/img/placeholder.svg")
    }

    /// Highlights column is a JSON array of strings; anything else
    /// renders as no highlights rather than an error page.
    pub fn highlight_list(&self) -> Vec<String> {
        self.highlights
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn duration_display(days: i32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days / {} nights", days, days - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn package(highlights: serde_json::Value) -> TourPackage {
        TourPackage {
            id: Uuid::new_v4(),
            slug: "kedarnath-darshan".to_string(),
            name: "Kedarnath Darshan".to_string(),
            region: "Uttarakhand".to_string(),
            summary: "Four-day yatra from Haridwar".to_string(),
            description_html: "<p>Via Sonprayag and Gaurikund.</p>".to_string(),
            duration_days: 4,
            price_from: dec!(16750),
            hero_image_url: None,
            highlights,
            published_at: None,
        }
    }

    #[test]
    fn test_duration_display_counts_nights() {
        let p = package(serde_json::json!([]));
        assert_eq!(p.duration_display(), "4 days / 3 nights");
    }

    #[test]
    fn test_one_day_package_has_no_nights() {
        let mut p = package(serde_json::json!([]));
        p.duration_days = 1;
        assert_eq!(p.duration_display(), "1 day");
    }

    #[test]
    fn test_highlight_list_reads_string_array() {
        let p = package(serde_json::json!(["Helicopter slot booking", "VIP darshan"]));
        assert_eq!(
            p.highlight_list(),
            vec!["Helicopter slot booking", "VIP darshan"]
        );
    }

    #[test]
    fn test_highlight_list_tolerates_bad_shapes() {
        assert!(package(serde_json::json!({"oops": 1})).highlight_list().is_empty());
        assert!(package(serde_json::json!([1, 2])).highlight_list().is_empty());
    }

    #[test]
    fn test_price_display_uses_indian_grouping() {
        let p = package(serde_json::json!([]));
        assert_eq!(p.price_display(), "₹16,750");
    }
}
