//! Request DTOs for the estimator API.

use serde::Deserialize;

use super::calculators::TripParameters;
use super::rates::{AccommodationTier, TransportMode};

/// Request to estimate a trip cost.
///
/// Add-on flags default to off so the planner can omit them.
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub party_count: i32,
    pub trip_duration_days: i32,
    pub accommodation_tier: AccommodationTier,
    pub transport_mode: TransportMode,
    #[serde(default)]
    pub helicopter_addon: bool,
    #[serde(default)]
    pub pony_addon: bool,
}

impl EstimateRequest {
    pub fn into_params(self) -> TripParameters {
        TripParameters {
            party_count: self.party_count,
            trip_duration_days: self.trip_duration_days,
            accommodation_tier: self.accommodation_tier,
            transport_mode: self.transport_mode,
            helicopter_addon: self.helicopter_addon,
            pony_addon: self.pony_addon,
        }
    }
}
