//! Inquiry (lead) models

use chrono::NaiveDate;
use serde::Deserialize;

/// Inquiry submitted from the public site.
///
/// This is the one write path the site exposes; everything else is
/// read-side rendering of published content.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub package_slug: Option<String>,
    #[serde(default)]
    pub travel_date: Option<NaiveDate>,
    #[serde(default)]
    pub party_size: Option<i32>,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "website".to_string()
}

impl NewLead {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if !self.email.contains('@') || !self.email.contains('.') {
            return Err("email does not look valid");
        }
        if let Some(size) = self.party_size {
            if size < 1 {
                return Err("party size must be at least 1");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> NewLead {
        serde_json::from_str(
            r#"{"name": "A. Sharma", "email": "sharma@example.in", "message": "Kedarnath in June?"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_minimal_lead_is_valid() {
        let l = lead();
        assert!(l.validate().is_ok());
        assert_eq!(l.source, "website");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut l = lead();
        l.name = "   ".to_string();
        assert!(l.validate().is_err());
    }

    #[test]
    fn test_mangled_email_is_rejected() {
        let mut l = lead();
        l.email = "not-an-email".to_string();
        assert!(l.validate().is_err());
    }

    #[test]
    fn test_zero_party_size_is_rejected() {
        let mut l = lead();
        l.party_size = Some(0);
        assert!(l.validate().is_err());
    }
}
