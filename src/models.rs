//! Configuration entities for the fare engine.
//!
//! These are administrator-managed documents (vehicle types, priced areas,
//! surge rules) handed to the engine as an immutable snapshot per
//! calculation. The engine never mutates them.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trip endpoint or stop.
///
/// `lat == 0 && lng == 0` is the sentinel for "no geocoded coordinates
/// available"; callers supply a mileage figure instead in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl Location {
    pub fn has_coordinates(&self) -> bool {
        self.lat != 0.0 || self.lng != 0.0
    }
}

/// A polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// How an area decides membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    Zipcode,
    City,
    Polygon,
}

/// A named service area (zip code, city, or drawn polygon).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub area_type: AreaType,
    /// Zip code or city name for the non-polygon types.
    #[serde(default)]
    pub value: Option<String>,
    /// Polygon vertices; a valid polygon needs at least 3.
    #[serde(default)]
    pub polygon: Vec<LatLng>,
    /// Legacy ordering field from older configurations. Price resolution
    /// ignores it and uses the highest matched price instead; surge rules
    /// have their own priority field.
    #[serde(default)]
    pub priority: i32,
}

/// A flat price attached to an area for one vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPrice {
    pub area: Area,
    #[serde(with = "rust_decimal::serde::str")]
    pub fixed_price: Decimal,
}

/// One band of per-mile pricing.
///
/// Tiers band the trip-distance axis starting at mile 0; the portion of a
/// tier below the vehicle's base distance threshold is covered by the base
/// price and never charged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceTier {
    #[serde(with = "rust_decimal::serde::str")]
    pub from_miles: Decimal,
    /// Upper bound in miles; 0 means open-ended (must be the last tier).
    #[serde(with = "rust_decimal::serde::str")]
    pub to_miles: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_mile: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

/// A conditional fare multiplier.
///
/// Conditions are conjunctive filters: an absent condition is always true,
/// and every configured condition must hold for the rule to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurgeRule {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
    pub is_active: bool,
    /// Days of week the rule is active, 0 = Sunday.
    #[serde(default)]
    pub days_of_week: Option<Vec<u8>>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub specific_dates: Vec<NaiveDate>,
    pub priority: i32,
}

/// Vehicle class configuration: base fare, tier table, surcharges,
/// area prices and surge rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    /// Miles included in the base price.
    #[serde(with = "rust_decimal::serde::str")]
    pub base_distance_threshold: Decimal,
    #[serde(default)]
    pub distance_tiers: Vec<DistanceTier>,
    #[serde(with = "rust_decimal::serde::str")]
    pub stop_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub child_seat_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub round_trip_discount_percent: Decimal,
    #[serde(default)]
    pub surge_pricing: Vec<SurgeRule>,
    #[serde(default)]
    pub area_prices: Vec<AreaPrice>,
}

/// How the customer pays. Cash gets a checkout-level discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Invoice,
    CreditCard,
    Zelle,
}

/// Standard tier table used when an administrator has not configured one.
///
/// Returns a fresh value on every call so callers can never share or
/// mutate a common copy.
pub fn default_distance_tiers() -> Vec<DistanceTier> {
    vec![
        DistanceTier {
            from_miles: dec!(0),
            to_miles: dec!(12),
            price_per_mile: dec!(4.00),
            description: Some("Included base range".to_string()),
        },
        DistanceTier {
            from_miles: dec!(12),
            to_miles: dec!(25),
            price_per_mile: dec!(3.50),
            description: Some("Mid range".to_string()),
        },
        DistanceTier {
            from_miles: dec!(25),
            to_miles: dec!(0),
            price_per_mile: dec!(2.50),
            description: Some("Long range".to_string()),
        },
    ]
}

/// Partial update for a vehicle type; unset fields keep their previous value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleTypeUpdate {
    pub name: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub base_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub base_distance_threshold: Option<Decimal>,
    pub distance_tiers: Option<Vec<DistanceTier>>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub stop_charge: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub child_seat_charge: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub round_trip_discount_percent: Option<Decimal>,
    pub surge_pricing: Option<Vec<SurgeRule>>,
    pub area_prices: Option<Vec<AreaPrice>>,
}

impl VehicleTypeUpdate {
    /// Merge this patch into an existing vehicle type.
    pub fn apply_to(self, vehicle_type: &mut VehicleType) {
        if let Some(name) = self.name {
            vehicle_type.name = name;
        }
        if let Some(is_active) = self.is_active {
            vehicle_type.is_active = is_active;
        }
        if let Some(base_price) = self.base_price {
            vehicle_type.base_price = base_price;
        }
        if let Some(threshold) = self.base_distance_threshold {
            vehicle_type.base_distance_threshold = threshold;
        }
        if let Some(tiers) = self.distance_tiers {
            vehicle_type.distance_tiers = tiers;
        }
        if let Some(stop_charge) = self.stop_charge {
            vehicle_type.stop_charge = stop_charge;
        }
        if let Some(child_seat_charge) = self.child_seat_charge {
            vehicle_type.child_seat_charge = child_seat_charge;
        }
        if let Some(percent) = self.round_trip_discount_percent {
            vehicle_type.round_trip_discount_percent = percent;
        }
        if let Some(surge) = self.surge_pricing {
            vehicle_type.surge_pricing = surge;
        }
        if let Some(area_prices) = self.area_prices {
            vehicle_type.area_prices = area_prices;
        }
    }
}

/// Partial update for a surge rule; unset fields keep their previous value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurgeRuleUpdate {
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub multiplier: Option<Decimal>,
    pub is_active: Option<bool>,
    pub days_of_week: Option<Option<Vec<u8>>>,
    pub start_time: Option<Option<NaiveTime>>,
    pub end_time: Option<Option<NaiveTime>>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub specific_dates: Option<Vec<NaiveDate>>,
    pub priority: Option<i32>,
}

impl SurgeRuleUpdate {
    /// Merge this patch into an existing rule. Condition fields are
    /// double-optional so a patch can clear a condition (outer `Some`,
    /// inner `None`) as well as leave it untouched (outer `None`).
    pub fn apply_to(self, rule: &mut SurgeRule) {
        if let Some(name) = self.name {
            rule.name = name;
        }
        if let Some(multiplier) = self.multiplier {
            rule.multiplier = multiplier;
        }
        if let Some(is_active) = self.is_active {
            rule.is_active = is_active;
        }
        if let Some(days) = self.days_of_week {
            rule.days_of_week = days;
        }
        if let Some(start_time) = self.start_time {
            rule.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            rule.end_time = end_time;
        }
        if let Some(start_date) = self.start_date {
            rule.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            rule.end_date = end_date;
        }
        if let Some(dates) = self.specific_dates {
            rule.specific_dates = dates;
        }
        if let Some(priority) = self.priority {
            rule.priority = priority;
        }
    }
}
