//! Booking voucher models

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Voucher row from vouchers
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Voucher {
    pub id: Uuid,
    pub code: String,
    pub holder_name: String,
    pub package_name: String,
    pub valid_until: NaiveDate,
    pub status: String,
    pub issued_at: DateTime<Utc>,
}

impl Voucher {
    /// An 'active' voucher past its validity date reads as expired
    /// without waiting for the nightly status sweep.
    pub fn effective_status(&self, today: NaiveDate) -> &str {
        if self.status == "active" && self.valid_until < today {
            "expired"
        } else {
            self.status.as_str()
        }
    }

    pub fn status_label(&self, today: NaiveDate) -> &'static str {
        match self.effective_status(today) {
            "active" => "Valid",
            "redeemed" => "Already redeemed",
            "expired" => "Expired",
            _ => "Unknown",
        }
    }

    pub fn valid_until_display(&self) -> String {
        self.valid_until.format("%d %b %Y").to_string()
    }

    pub fn issued_display(&self) -> String {
        self.issued_at.format("%d %b %Y").to_string()
    }
}
