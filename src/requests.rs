//! Request DTOs for fare computation.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Location, PaymentMethod};

/// A trip to price.
///
/// `miles`, `stops_count` and `child_seats_count` are optional at the
/// serialization layer but required for a quote; a missing value is
/// rejected before any computation starts.
#[derive(Debug, Clone, Deserialize)]
pub struct FareRequest {
    pub vehicle_type_id: Uuid,
    pub pickup: Location,
    pub dropoff: Location,
    #[serde(default)]
    pub stops: Vec<Location>,
    /// Externally measured trip mileage; used when either endpoint has no
    /// geocoded coordinates.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub miles: Option<Decimal>,
    #[serde(default)]
    pub stops_count: Option<u32>,
    #[serde(default)]
    pub child_seats_count: Option<u32>,
    #[serde(default)]
    pub round_trip: bool,
    pub payment_method: PaymentMethod,
    /// Pickup wall-clock time in the operator's local timezone.
    pub pickup_at: NaiveDateTime,
}
