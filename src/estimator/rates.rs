//! Rate table for trip cost estimation.
//!
//! Rates are data, not code: the table is constructed once at startup
//! (built-in defaults or a JSON file) and passed into the estimator as an
//! immutable value. Tests construct their own tables.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lodging quality class offered along the yatra routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationTier {
    Budget,
    Standard,
    Luxury,
}

impl fmt::Display for AccommodationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccommodationTier::Budget => "budget",
            AccommodationTier::Standard => "standard",
            AccommodationTier::Luxury => "luxury",
        };
        f.write_str(s)
    }
}

/// How the party travels between the railhead and the trailhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Bus,
    SharedTaxi,
    PrivateSedan,
    PrivateSuv,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportMode::Bus => "bus",
            TransportMode::SharedTaxi => "shared_taxi",
            TransportMode::PrivateSedan => "private_sedan",
            TransportMode::PrivateSuv => "private_suv",
        };
        f.write_str(s)
    }
}

/// Pricing basis for a transport mode.
///
/// Seat-priced modes charge every traveler; chartered vehicles carry a
/// whole charge and a seating capacity, and the estimator books as many
/// vehicles as the party needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum TransportPricing {
    PerPerson { rate: Decimal },
    PerVehicle { rate: Decimal, capacity: i32 },
}

/// Immutable rate table injected into every estimate.
///
/// Amounts are whole rupees. Missing keys are a configuration error the
/// estimator reports, so a partial table is usable in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub currency: String,
    pub accommodation: BTreeMap<AccommodationTier, Decimal>,
    pub transport: BTreeMap<TransportMode, TransportPricing>,
    pub food_per_day: Decimal,
    pub incidentals_per_day: Decimal,
    pub helicopter_round_trip: Decimal,
    pub pony_round_trip: Decimal,
}

impl RateTable {
    /// Current season's published rates.
    pub fn standard() -> Self {
        let mut accommodation = BTreeMap::new();
        accommodation.insert(AccommodationTier::Budget, dec!(1500));
        accommodation.insert(AccommodationTier::Standard, dec!(3500));
        accommodation.insert(AccommodationTier::Luxury, dec!(7500));

        let mut transport = BTreeMap::new();
        transport.insert(TransportMode::Bus, TransportPricing::PerPerson { rate: dec!(1200) });
        transport.insert(
            TransportMode::SharedTaxi,
            TransportPricing::PerPerson { rate: dec!(2500) },
        );
        transport.insert(
            TransportMode::PrivateSedan,
            TransportPricing::PerVehicle {
                rate: dec!(15000),
                capacity: 4,
            },
        );
        transport.insert(
            TransportMode::PrivateSuv,
            TransportPricing::PerVehicle {
                rate: dec!(22000),
                capacity: 6,
            },
        );

        Self {
            currency: "INR".to_string(),
            accommodation,
            transport,
            food_per_day: dec!(800),
            incidentals_per_day: dec!(200),
            helicopter_round_trip: dec!(8500),
            pony_round_trip: dec!(4500),
        }
    }

    /// Load a rate table from a JSON file.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let table: RateTable = serde_json::from_str(&raw)?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_every_tier() {
        let table = RateTable::standard();
        for tier in [
            AccommodationTier::Budget,
            AccommodationTier::Standard,
            AccommodationTier::Luxury,
        ] {
            assert!(table.accommodation.contains_key(&tier), "missing {}", tier);
        }
    }

    #[test]
    fn test_standard_table_covers_every_transport_mode() {
        let table = RateTable::standard();
        for mode in [
            TransportMode::Bus,
            TransportMode::SharedTaxi,
            TransportMode::PrivateSedan,
            TransportMode::PrivateSuv,
        ] {
            assert!(table.transport.contains_key(&mode), "missing {}", mode);
        }
    }

    #[test]
    fn test_chartered_modes_carry_a_capacity() {
        let table = RateTable::standard();
        match &table.transport[&TransportMode::PrivateSedan] {
            TransportPricing::PerVehicle { capacity, .. } => assert_eq!(*capacity, 4),
            _ => panic!("sedan should be priced per vehicle"),
        }
        match &table.transport[&TransportMode::PrivateSuv] {
            TransportPricing::PerVehicle { capacity, .. } => assert_eq!(*capacity, 6),
            _ => panic!("suv should be priced per vehicle"),
        }
    }

    #[test]
    fn test_table_round_trips_through_json() {
        let table = RateTable::standard();
        let json = serde_json::to_string(&table).unwrap();
        let parsed: RateTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_json_keys_are_snake_case() {
        let table = RateTable::standard();
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains("\"shared_taxi\""));
        assert!(json.contains("\"private_sedan\""));
        assert!(json.contains("\"per_vehicle\""));
    }
}
