//! Fare calculation engine for the ShuttleOps airport-shuttle back office.
//!
//! Turns a trip request (pickup, dropoff, stops, vehicle type, passenger
//! extras, payment method, time) into an itemized price. Two pricing
//! strategies: flat rates for configured service areas, tiered per-mile
//! pricing everywhere else, with time-conditional surge multipliers and
//! stacked surcharges and discounts on top.
//!
//! The engine is pure and stateless. Configuration (vehicle types, areas,
//! surge rules) arrives as an immutable snapshot per call; persistence,
//! geocoding and the HTTP layer live in the surrounding back office.

pub mod areas;
pub mod calculators;
pub mod error;
pub mod geo;
pub mod models;
pub mod requests;
pub mod responses;
pub mod services;
pub mod surge;
pub mod tiers;

// Re-export commonly used items
pub use calculators::round_money;
pub use error::{FareError, Result};
pub use requests::FareRequest;
pub use responses::{FareBreakdown, PricingMethod, TripQuote};
pub use services::{compute_fare, quote_trip, FareOptions};
