//! Fare assembly and checkout quoting.
//!
//! The orchestration layer of the engine: picks the pricing strategy,
//! applies surge and surcharges, and produces the itemized breakdown the
//! booking layer persists. Pure and synchronous - every call runs against
//! the configuration snapshot it was given, with no shared state.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::areas::{resolve_fixed_price, validate_area_prices};
use crate::calculators::{payment_discount, return_leg_price, round_money};
use crate::error::{FareError, Result};
use crate::geo::trip_distance_miles;
use crate::models::{Location, VehicleType};
use crate::requests::FareRequest;
use crate::responses::{FareBreakdown, PricingMethod, TripQuote};
use crate::surge::resolve_surge;
use crate::tiers::{price_distance, validate_tiers};

/// Validated passenger options for a single fare computation.
#[derive(Debug, Clone)]
pub struct FareOptions {
    /// Externally measured mileage, used when coordinates are missing.
    pub miles: Option<Decimal>,
    pub stops_count: u32,
    pub child_seats_count: u32,
    pub pickup_at: NaiveDateTime,
}

/// Compute the itemized fare for one leg.
///
/// Fixed-area pricing wins when any priced area covers the pickup or
/// dropoff; the area price is a flat rate, so surge is skipped in that
/// branch. Otherwise the fare is base price plus tiered distance price,
/// multiplied by the resolved surge. Stop and child-seat surcharges are
/// added uniformly for both methods. Every monetary field is rounded to
/// cents at the point it is computed.
///
/// Round-trip and payment-method discounts are not applied here; see
/// [`quote_trip`].
///
/// # Arguments
/// * `vehicle_type` - Configuration snapshot for the requested vehicle class
/// * `pickup` / `dropoff` / `stops` - Trip geometry
/// * `options` - Validated passenger options
pub fn compute_fare(
    vehicle_type: &VehicleType,
    pickup: &Location,
    dropoff: &Location,
    stops: &[Location],
    options: &FareOptions,
) -> Result<FareBreakdown> {
    validate_area_prices(&vehicle_type.area_prices)?;

    let distance = trip_distance_miles(pickup, dropoff, stops, options.miles);

    let stops_charge = round_money(
        vehicle_type.stop_charge * Decimal::from(options.stops_count),
        2,
    );
    let child_seats_charge = round_money(
        vehicle_type.child_seat_charge * Decimal::from(options.child_seats_count),
        2,
    );

    let breakdown = match resolve_fixed_price(pickup, dropoff, &vehicle_type.area_prices) {
        Some(matched) => {
            tracing::debug!(
                vehicle_type = %vehicle_type.name,
                area = %matched.area_name,
                "fixed-area pricing selected"
            );
            let base_price = round_money(matched.price, 2);
            let subtotal = round_money(base_price + stops_charge + child_seats_charge, 2);
            FareBreakdown {
                base_price,
                distance_price: Decimal::ZERO,
                stops_charge,
                child_seats_charge,
                round_trip_discount: Decimal::ZERO,
                payment_discount: Decimal::ZERO,
                subtotal,
                final_total: subtotal,
                distance: round_money(distance, 2),
                pricing_method: PricingMethod::Fixed,
                area_name: Some(matched.area_name),
                surge_multiplier: None,
                surge_name: None,
            }
        }
        None => {
            validate_tiers(&vehicle_type.distance_tiers)?;

            let base_price = round_money(vehicle_type.base_price, 2);
            let distance_price = round_money(
                price_distance(
                    distance,
                    vehicle_type.base_distance_threshold,
                    &vehicle_type.distance_tiers,
                ),
                2,
            );

            let surge = resolve_surge(options.pickup_at, &vehicle_type.surge_pricing);
            let surged = round_money((base_price + distance_price) * surge.multiplier, 2);
            let subtotal = round_money(surged + stops_charge + child_seats_charge, 2);

            tracing::debug!(
                vehicle_type = %vehicle_type.name,
                %distance,
                surge = %surge.multiplier,
                "distance pricing selected"
            );

            FareBreakdown {
                base_price,
                distance_price,
                stops_charge,
                child_seats_charge,
                round_trip_discount: Decimal::ZERO,
                payment_discount: Decimal::ZERO,
                subtotal,
                final_total: subtotal,
                distance: round_money(distance, 2),
                pricing_method: PricingMethod::Distance,
                area_name: None,
                surge_multiplier: Some(surge.multiplier),
                surge_name: (!surge.name.is_empty()).then_some(surge.name),
            }
        }
    };

    Ok(breakdown)
}

/// Produce a full checkout quote for a booking request.
///
/// Looks up the requested vehicle type (active only), validates the
/// required numeric inputs before any computation, prices the outbound
/// leg, prices the discounted return leg for round trips, and applies the
/// payment-method discount once across the combined subtotal.
pub fn quote_trip(vehicle_types: &[VehicleType], request: &FareRequest) -> Result<TripQuote> {
    let vehicle_type = vehicle_types
        .iter()
        .find(|vt| vt.id == request.vehicle_type_id && vt.is_active)
        .ok_or(FareError::VehicleTypeNotFound(request.vehicle_type_id))?;

    let miles = request
        .miles
        .ok_or(FareError::MissingParameter("miles"))?;
    let stops_count = request
        .stops_count
        .ok_or(FareError::MissingParameter("stops_count"))?;
    let child_seats_count = request
        .child_seats_count
        .ok_or(FareError::MissingParameter("child_seats_count"))?;

    let options = FareOptions {
        miles: Some(miles),
        stops_count,
        child_seats_count,
        pickup_at: request.pickup_at,
    };

    let outbound = compute_fare(
        vehicle_type,
        &request.pickup,
        &request.dropoff,
        &request.stops,
        &options,
    )?;

    let return_leg = if request.round_trip {
        let (return_total, discount) = return_leg_price(
            outbound.final_total,
            vehicle_type.round_trip_discount_percent,
        );
        let mut leg = outbound.clone();
        leg.round_trip_discount = discount;
        leg.final_total = return_total;
        Some(leg)
    } else {
        None
    };

    let subtotal = round_money(
        outbound.final_total
            + return_leg
                .as_ref()
                .map(|leg| leg.final_total)
                .unwrap_or(Decimal::ZERO),
        2,
    );
    let discount = payment_discount(subtotal, request.payment_method);
    let total = round_money(subtotal - discount, 2);

    tracing::debug!(
        vehicle_type = %vehicle_type.name,
        %subtotal,
        %total,
        round_trip = request.round_trip,
        "quote assembled"
    );

    Ok(TripQuote {
        outbound,
        return_leg,
        subtotal,
        payment_discount: discount,
        total,
    })
}
