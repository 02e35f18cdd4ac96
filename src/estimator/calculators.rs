//! Core trip cost calculation.
//!
//! Pure functions for estimate math - no database access, no I/O. The
//! estimator is called fresh on every parameter change and returns a new
//! breakdown; it holds no cache and no state beyond its arguments.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::rates::{AccommodationTier, RateTable, TransportMode, TransportPricing};

/// Round to specified decimal places, halves away from zero.
///
/// This is the rounding travelers expect on a quoted price (7.5 -> 8),
/// and the only place the estimator rounds at all: component amounts are
/// whole rupees by construction, so rounding applies solely to the derived
/// per-person figure.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use yatrasewa_web::estimator::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rooms required for a party at double occupancy.
///
/// Two travelers per room, rounded up. This is booking policy, not a
/// physical constraint, and it directly drives billed room-nights.
pub fn rooms_needed(party_count: i32) -> i32 {
    (party_count + 1) / 2
}

/// Vehicles required to seat a party, rounded up.
pub fn vehicles_needed(party_count: i32, capacity: i32) -> i32 {
    (party_count + capacity - 1) / capacity
}

/// Everything the traveler chooses on the budget planner.
#[derive(Debug, Clone, PartialEq)]
pub struct TripParameters {
    pub party_count: i32,
    pub trip_duration_days: i32,
    pub accommodation_tier: AccommodationTier,
    pub transport_mode: TransportMode,
    pub helicopter_addon: bool,
    pub pony_addon: bool,
}

/// Itemized estimate for one trip.
///
/// `total` is always the exact sum of the five component amounts;
/// `per_person` is the one rounded figure.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub accommodation: Decimal,
    pub transport: Decimal,
    pub helicopter: Decimal,
    pub pony: Decimal,
    pub food_and_incidentals: Decimal,
    pub total: Decimal,
    pub per_person: Decimal,
    pub rooms_needed: i32,
    pub nights: i32,
    pub vehicles_needed: Option<i32>,
}

/// Estimate precondition violations.
///
/// The budget planner only ever submits enumerated values, so these are
/// programmer or configuration errors. There is no partial result: an
/// estimate either computes completely or fails here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("party count must be at least 1 (got {0})")]
    InvalidPartyCount(i32),

    #[error("trip duration must be at least 1 day (got {0})")]
    InvalidDuration(i32),

    #[error("no nightly rate configured for accommodation tier '{0}'")]
    MissingAccommodationRate(AccommodationTier),

    #[error("no pricing configured for transport mode '{0}'")]
    MissingTransportRate(TransportMode),

    #[error("transport mode '{0}' has invalid vehicle capacity {1}")]
    InvalidVehicleCapacity(TransportMode, i32),
}

impl EstimateError {
    /// Stable machine-readable key for API error bodies.
    pub fn error_type(&self) -> &'static str {
        match self {
            EstimateError::InvalidPartyCount(_) => "invalid_party_count",
            EstimateError::InvalidDuration(_) => "invalid_duration",
            EstimateError::MissingAccommodationRate(_) => "missing_accommodation_rate",
            EstimateError::MissingTransportRate(_) => "missing_transport_rate",
            EstimateError::InvalidVehicleCapacity(_, _) => "invalid_vehicle_capacity",
        }
    }
}

/// Compute the itemized cost estimate for a trip.
///
/// Referentially transparent: same parameters and rate table, same
/// breakdown. Accommodation bills `duration - 1` nights at double
/// occupancy; food and incidentals run the full duration since meals are
/// eaten on arrival and departure days too; helicopter and pony are
/// per-person round trips added only when selected.
///
/// # Arguments
/// * `params` - Traveler's selections
/// * `rates` - Injected immutable rate table
///
/// # Returns
/// `CostBreakdown` with per-category sub-totals, or `EstimateError` when
/// a parameter or the table fails validation.
pub fn compute_trip_cost(
    params: &TripParameters,
    rates: &RateTable,
) -> Result<CostBreakdown, EstimateError> {
    if params.party_count < 1 {
        return Err(EstimateError::InvalidPartyCount(params.party_count));
    }
    if params.trip_duration_days < 1 {
        return Err(EstimateError::InvalidDuration(params.trip_duration_days));
    }

    let party = Decimal::from(params.party_count);

    let nightly_rate = rates
        .accommodation
        .get(&params.accommodation_tier)
        .copied()
        .ok_or(EstimateError::MissingAccommodationRate(
            params.accommodation_tier,
        ))?;

    let rooms = rooms_needed(params.party_count);
    // A D-day itinerary bills D-1 nights; a single-day darshan bills none.
    let nights = params.trip_duration_days - 1;
    let accommodation = Decimal::from(rooms) * nightly_rate * Decimal::from(nights);

    let pricing = rates
        .transport
        .get(&params.transport_mode)
        .ok_or(EstimateError::MissingTransportRate(params.transport_mode))?;

    let (transport, vehicles) = match pricing {
        TransportPricing::PerPerson { rate } => (*rate * party, None),
        TransportPricing::PerVehicle { rate, capacity } => {
            if *capacity < 1 {
                return Err(EstimateError::InvalidVehicleCapacity(
                    params.transport_mode,
                    *capacity,
                ));
            }
            let vehicles = vehicles_needed(params.party_count, *capacity);
            (*rate * Decimal::from(vehicles), Some(vehicles))
        }
    };

    let helicopter = if params.helicopter_addon {
        rates.helicopter_round_trip * party
    } else {
        Decimal::ZERO
    };

    let pony = if params.pony_addon {
        rates.pony_round_trip * party
    } else {
        Decimal::ZERO
    };

    // Meals run the full duration, arrival and departure days included.
    let food_and_incidentals = (rates.food_per_day + rates.incidentals_per_day)
        * party
        * Decimal::from(params.trip_duration_days);

    let total = accommodation + transport + helicopter + pony + food_and_incidentals;
    let per_person = round_money(total / party, 0);

    Ok(CostBreakdown {
        accommodation,
        transport,
        helicopter,
        pony,
        food_and_incidentals,
        total,
        per_person,
        rooms_needed: rooms,
        nights,
        vehicles_needed: vehicles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(party: i32, days: i32) -> TripParameters {
        TripParameters {
            party_count: party,
            trip_duration_days: days,
            accommodation_tier: AccommodationTier::Standard,
            transport_mode: TransportMode::PrivateSedan,
            helicopter_addon: false,
            pony_addon: false,
        }
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_halves_away_from_zero() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(3));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(5533.333), 0), dec!(5533));
        assert_eq!(round_money(dec!(5533.667), 0), dec!(5534));
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
    }

    // ==================== rounding helper tests ====================

    #[test]
    fn test_rooms_needed_double_occupancy() {
        assert_eq!(rooms_needed(1), 1);
        assert_eq!(rooms_needed(2), 1);
        assert_eq!(rooms_needed(3), 2);
        assert_eq!(rooms_needed(4), 2);
        assert_eq!(rooms_needed(5), 3);
    }

    #[test]
    fn test_vehicles_needed_rounds_up() {
        assert_eq!(vehicles_needed(5, 4), 2); // sedan overflow
        assert_eq!(vehicles_needed(6, 6), 1); // suv exactly full
        assert_eq!(vehicles_needed(7, 6), 2); // suv overflow
        assert_eq!(vehicles_needed(1, 4), 1);
    }

    // ==================== compute_trip_cost tests ====================

    #[test]
    fn test_standard_sedan_four_days() {
        let breakdown = compute_trip_cost(&params(2, 4), &RateTable::standard()).unwrap();

        assert_eq!(breakdown.rooms_needed, 1);
        assert_eq!(breakdown.nights, 3);
        assert_eq!(breakdown.accommodation, dec!(10500));
        assert_eq!(breakdown.vehicles_needed, Some(1));
        assert_eq!(breakdown.transport, dec!(15000));
        assert_eq!(breakdown.food_and_incidentals, dec!(8000));
        assert_eq!(breakdown.helicopter, dec!(0));
        assert_eq!(breakdown.pony, dec!(0));
        assert_eq!(breakdown.total, dec!(33500));
        assert_eq!(breakdown.per_person, dec!(16750));
    }

    #[test]
    fn test_helicopter_addon_charges_every_traveler() {
        let mut p = params(2, 4);
        p.helicopter_addon = true;

        let breakdown = compute_trip_cost(&p, &RateTable::standard()).unwrap();

        assert_eq!(breakdown.helicopter, dec!(17000));
        assert_eq!(breakdown.total, dec!(50500));
        assert_eq!(breakdown.per_person, dec!(25250));
    }

    #[test]
    fn test_single_day_trip_bills_no_nights() {
        let breakdown = compute_trip_cost(&params(1, 1), &RateTable::standard()).unwrap();

        assert_eq!(breakdown.nights, 0);
        assert_eq!(breakdown.accommodation, dec!(0));
        // One day: a sedan plus one traveler's food, nothing else.
        assert_eq!(breakdown.transport, dec!(15000));
        assert_eq!(breakdown.food_and_incidentals, dec!(1000));
        assert_eq!(breakdown.total, dec!(16000));
    }

    #[test]
    fn test_single_day_never_clamps_to_one_night() {
        for party in 1..=6 {
            for tier in [
                AccommodationTier::Budget,
                AccommodationTier::Standard,
                AccommodationTier::Luxury,
            ] {
                let mut p = params(party, 1);
                p.accommodation_tier = tier;
                let breakdown = compute_trip_cost(&p, &RateTable::standard()).unwrap();
                assert_eq!(breakdown.accommodation, dec!(0));
            }
        }
    }

    #[test]
    fn test_addons_are_zero_unless_selected() {
        for party in [1, 4, 11] {
            let breakdown = compute_trip_cost(&params(party, 3), &RateTable::standard()).unwrap();
            assert_eq!(breakdown.helicopter, dec!(0));
            assert_eq!(breakdown.pony, dec!(0));
        }
    }

    #[test]
    fn test_pony_addon_charges_every_traveler() {
        let mut p = params(3, 3);
        p.pony_addon = true;

        let breakdown = compute_trip_cost(&p, &RateTable::standard()).unwrap();

        assert_eq!(breakdown.pony, dec!(13500));
    }

    #[test]
    fn test_per_person_buses_split_seats_not_vehicles() {
        let mut p = params(5, 2);
        p.transport_mode = TransportMode::Bus;

        let breakdown = compute_trip_cost(&p, &RateTable::standard()).unwrap();

        assert_eq!(breakdown.transport, dec!(6000)); // 1200 x 5
        assert_eq!(breakdown.vehicles_needed, None);
    }

    #[test]
    fn test_sedan_overflow_books_second_vehicle() {
        let breakdown = compute_trip_cost(&params(5, 2), &RateTable::standard()).unwrap();

        assert_eq!(breakdown.vehicles_needed, Some(2));
        assert_eq!(breakdown.transport, dec!(30000));
    }

    #[test]
    fn test_suv_seats_six_before_second_vehicle() {
        let mut p = params(6, 2);
        p.transport_mode = TransportMode::PrivateSuv;
        let six = compute_trip_cost(&p, &RateTable::standard()).unwrap();
        assert_eq!(six.vehicles_needed, Some(1));

        p.party_count = 7;
        let seven = compute_trip_cost(&p, &RateTable::standard()).unwrap();
        assert_eq!(seven.vehicles_needed, Some(2));
    }

    #[test]
    fn test_total_is_exact_sum_of_components() {
        let rates = RateTable::standard();
        for party in 1..=8 {
            for days in 1..=6 {
                for heli in [false, true] {
                    let mut p = params(party, days);
                    p.helicopter_addon = heli;
                    p.pony_addon = !heli;
                    let b = compute_trip_cost(&p, &rates).unwrap();
                    assert_eq!(
                        b.total,
                        b.accommodation + b.transport + b.helicopter + b.pony
                            + b.food_and_incidentals,
                        "sum mismatch for party={} days={}",
                        party,
                        days
                    );
                    assert_eq!(b.per_person, round_money(b.total / Decimal::from(party), 0));
                }
            }
        }
    }

    #[test]
    fn test_per_person_rounds_uneven_splits() {
        // Party of 3 shares 2 rooms: 7000 + 15000 + 6000 = 28000,
        // which does not divide evenly by 3.
        let breakdown = compute_trip_cost(&params(3, 2), &RateTable::standard()).unwrap();

        assert_eq!(breakdown.total, dec!(28000));
        assert_eq!(breakdown.per_person, dec!(9333));
    }

    #[test]
    fn test_same_input_same_output() {
        let p = TripParameters {
            party_count: 4,
            trip_duration_days: 5,
            accommodation_tier: AccommodationTier::Luxury,
            transport_mode: TransportMode::PrivateSuv,
            helicopter_addon: true,
            pony_addon: true,
        };
        let rates = RateTable::standard();

        assert_eq!(
            compute_trip_cost(&p, &rates).unwrap(),
            compute_trip_cost(&p, &rates).unwrap()
        );
    }

    // ==================== validation tests ====================

    #[test]
    fn test_rejects_empty_party() {
        let result = compute_trip_cost(&params(0, 3), &RateTable::standard());
        assert_eq!(result, Err(EstimateError::InvalidPartyCount(0)));

        let result = compute_trip_cost(&params(-2, 3), &RateTable::standard());
        assert_eq!(result, Err(EstimateError::InvalidPartyCount(-2)));
    }

    #[test]
    fn test_rejects_zero_day_trip() {
        let result = compute_trip_cost(&params(2, 0), &RateTable::standard());
        assert_eq!(result, Err(EstimateError::InvalidDuration(0)));
    }

    #[test]
    fn test_missing_rates_are_reported() {
        let empty = RateTable {
            accommodation: Default::default(),
            transport: Default::default(),
            ..RateTable::standard()
        };

        let result = compute_trip_cost(&params(2, 3), &empty);
        assert_eq!(
            result,
            Err(EstimateError::MissingAccommodationRate(
                AccommodationTier::Standard
            ))
        );
    }

    #[test]
    fn test_missing_transport_rate_is_reported() {
        let mut table = RateTable::standard();
        table.transport.remove(&TransportMode::PrivateSedan);

        let result = compute_trip_cost(&params(2, 3), &table);
        assert_eq!(
            result,
            Err(EstimateError::MissingTransportRate(
                TransportMode::PrivateSedan
            ))
        );
    }

    #[test]
    fn test_zero_capacity_vehicle_is_a_config_error() {
        let mut table = RateTable::standard();
        table.transport.insert(
            TransportMode::PrivateSedan,
            TransportPricing::PerVehicle {
                rate: dec!(15000),
                capacity: 0,
            },
        );

        let result = compute_trip_cost(&params(2, 3), &table);
        assert_eq!(
            result,
            Err(EstimateError::InvalidVehicleCapacity(
                TransportMode::PrivateSedan,
                0
            ))
        );
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = EstimateError::MissingTransportRate(TransportMode::SharedTaxi);
        assert!(err.to_string().contains("shared_taxi"));

        let err = EstimateError::InvalidPartyCount(0);
        assert!(err.to_string().contains("0"));
    }
}
