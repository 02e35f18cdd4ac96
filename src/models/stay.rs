//! Property stay models

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::money::format_inr;

/// Guesthouse or hotel row from stay_properties
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StayProperty {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub location: String,
    pub tier: String,
    pub summary: String,
    pub nightly_rate: Decimal,
    pub hero_image_url: Option<String>,
    pub amenities: serde_json::Value,
}

impl StayProperty {
    pub fn rate_display(&self) -> String {
        format!("{} / night", format_inr(self.nightly_rate))
    }

    pub fn tier_label(&self) -> &str {
        match self.tier.as_str() {
            "budget" => "Budget",
            "standard" => "Standard",
            "luxury" => "Luxury",
            other => other,
        }
    }

    pub fn image_url(&self) -> &str {
        self.hero_image_url
            .as_deref()
            .unwrap_or("/static/img/placeholder.svg")
    }

    pub fn amenity_list(&self) -> Vec<String> {
        self.amenities
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
