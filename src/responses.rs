//! Fare breakdown DTOs.
//!
//! Plain data values with no behavior, safe to serialize straight into an
//! HTTP JSON response or a persisted booking record. Never mutated after
//! being returned; every monetary field is already rounded to cents.

use rust_decimal::Decimal;
use serde::Serialize;

/// Which pricing strategy produced the base fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingMethod {
    Fixed,
    Distance,
}

/// Itemized fare for a single leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareBreakdown {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub stops_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub child_seats_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub round_trip_discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub payment_discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub final_total: Decimal,
    /// Total trip distance in miles, rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::str")]
    pub distance: Decimal,
    pub pricing_method: PricingMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_name: Option<String>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub surge_multiplier: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surge_name: Option<String>,
}

/// A full checkout quote: outbound leg, optional discounted return leg,
/// and the one payment-method discount applied across the whole trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripQuote {
    pub outbound: FareBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_leg: Option<FareBreakdown>,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub payment_discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}
