//! Fixed-price area resolution.

use rust_decimal::Decimal;

use crate::error::{FareError, Result};
use crate::geo::location_in_area;
use crate::models::{AreaPrice, AreaType, Location};

/// Outcome of fixed-price area matching.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPriceMatch {
    pub price: Decimal,
    /// The matched area's name, or a combined label when several matched.
    pub area_name: String,
}

/// Check that every priced area is well-formed.
///
/// A polygon area needs at least 3 vertices; anything less can never
/// contain a point, so the area price would silently never match and the
/// trip would fall through to distance pricing at a different rate.
/// Caught here as a configuration error instead.
pub fn validate_area_prices(area_prices: &[AreaPrice]) -> Result<()> {
    for area_price in area_prices {
        let area = &area_price.area;
        if area.area_type == AreaType::Polygon && area.polygon.len() < 3 {
            return Err(FareError::InvalidConfiguration(format!(
                "polygon area '{}' has {} vertices, at least 3 required",
                area.name,
                area.polygon.len()
            )));
        }
    }
    Ok(())
}

/// Find the fixed price for a trip, if any priced area covers it.
///
/// An area price matches when the pickup OR the dropoff falls inside its
/// area. When several areas match, the highest fixed price wins - this is
/// the authoritative business rule; the legacy `priority` field on areas
/// plays no part here. Returns `None` when nothing matches, in which case
/// the caller falls back to distance pricing.
///
/// The returned price is the base fare only; stop and child-seat
/// surcharges and the round-trip discount are applied later, uniformly
/// for both pricing methods.
pub fn resolve_fixed_price(
    pickup: &Location,
    dropoff: &Location,
    area_prices: &[AreaPrice],
) -> Option<FixedPriceMatch> {
    let mut matches: Vec<&AreaPrice> = area_prices
        .iter()
        .filter(|ap| location_in_area(pickup, &ap.area) || location_in_area(dropoff, &ap.area))
        .collect();

    if matches.is_empty() {
        return None;
    }

    // Names in configuration order, for the transparency label
    let names: Vec<&str> = matches.iter().map(|ap| ap.area.name.as_str()).collect();

    matches.sort_by(|a, b| b.fixed_price.cmp(&a.fixed_price));
    let winner = matches[0];

    let area_name = if names.len() > 1 {
        format!(
            "Multiple areas: {} (using highest: ${})",
            names.join(", "),
            winner.fixed_price
        )
    } else {
        winner.area.name.clone()
    };

    Some(FixedPriceMatch {
        price: winner.fixed_price,
        area_name,
    })
}
