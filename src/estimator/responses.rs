//! Response DTOs for the estimator API.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{CostBreakdown, TripParameters};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// Itemized estimate returned to the budget planner.
#[derive(Debug, Serialize)]
pub struct CostBreakdownResponse {
    pub accommodation: MoneyResponse,
    pub transport: MoneyResponse,
    pub helicopter: MoneyResponse,
    pub pony: MoneyResponse,
    pub food_and_incidentals: MoneyResponse,
    pub total: MoneyResponse,
    pub per_person: MoneyResponse,
    pub rooms_needed: i32,
    pub nights: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicles_needed: Option<i32>,
    pub party_count: i32,
    pub trip_duration_days: i32,
}

impl CostBreakdownResponse {
    pub fn from_breakdown(
        breakdown: CostBreakdown,
        params: &TripParameters,
        currency: &str,
    ) -> Self {
        let money = |amount: Decimal| MoneyResponse {
            amount,
            currency: currency.to_string(),
        };

        Self {
            accommodation: money(breakdown.accommodation),
            transport: money(breakdown.transport),
            helicopter: money(breakdown.helicopter),
            pony: money(breakdown.pony),
            food_and_incidentals: money(breakdown.food_and_incidentals),
            total: money(breakdown.total),
            per_person: money(breakdown.per_person),
            rooms_needed: breakdown.rooms_needed,
            nights: breakdown.nights,
            vehicles_needed: breakdown.vehicles_needed,
            party_count: params.party_count,
            trip_duration_days: params.trip_duration_days,
        }
    }
}

/// Estimate error response
#[derive(Debug, Serialize)]
pub struct EstimateErrorResponse {
    pub error_type: String,
    pub message: String,
}
