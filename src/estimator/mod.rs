//! Trip cost estimation engine.
//!
//! A deterministic, stateless estimator for yatra trip budgets: party
//! size, duration, lodging tier, transport mode, and optional helicopter
//! or pony round trips in, itemized breakdown out. The rate table is an
//! injected immutable value; the calculation itself never touches the
//! database or the network.

pub mod calculators;
pub mod rates;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_trip_cost, round_money, CostBreakdown, EstimateError, TripParameters};
pub use rates::{AccommodationTier, RateTable, TransportMode, TransportPricing};
pub use routes::router;
