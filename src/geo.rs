//! Geographic matching and distance math.
//!
//! Pure functions over caller-supplied coordinates - the engine never
//! geocodes; free-text addresses are resolved upstream.

use rust_decimal::Decimal;

use crate::models::{Area, AreaType, LatLng, Location};

/// Earth radius in miles
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two points in miles.
pub fn haversine_miles(from: &Location, to: &Location) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_MILES * c
}

/// Ray-casting point-in-polygon test.
///
/// Casts a ray along the longitude axis and toggles on each edge crossing.
/// Polygons with fewer than 3 vertices never contain anything. Points
/// exactly on an edge get whatever the crossing count happens to produce;
/// callers must not rely on boundary behavior.
pub fn point_in_polygon(lat: f64, lng: f64, polygon: &[LatLng]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.lat > lat) != (b.lat > lat) {
            let intersect_lng = (b.lng - a.lng) * (lat - a.lat) / (b.lat - a.lat) + a.lng;
            if lng < intersect_lng {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Decide whether a location falls inside an area.
///
/// Zip code areas compare exactly, city areas case-insensitively, polygon
/// areas by ray casting against the location's coordinates.
pub fn location_in_area(location: &Location, area: &Area) -> bool {
    match area.area_type {
        AreaType::Zipcode => match (&location.zipcode, &area.value) {
            (Some(zip), Some(value)) => zip == value,
            _ => false,
        },
        AreaType::City => match (&location.city, &area.value) {
            (Some(city), Some(value)) => city.eq_ignore_ascii_case(value),
            _ => false,
        },
        AreaType::Polygon => point_in_polygon(location.lat, location.lng, &area.polygon),
    }
}

/// Total trip distance in miles: pickup through each stop to dropoff.
///
/// When either endpoint carries the zero/zero "not geocoded" sentinel the
/// externally supplied mileage is used instead (zero when absent). Stops
/// without coordinates are left out of the leg chain.
pub fn trip_distance_miles(
    pickup: &Location,
    dropoff: &Location,
    stops: &[Location],
    provided_miles: Option<Decimal>,
) -> Decimal {
    if !pickup.has_coordinates() || !dropoff.has_coordinates() {
        return provided_miles.unwrap_or(Decimal::ZERO);
    }

    let mut total = 0.0;
    let mut previous = pickup;
    for stop in stops.iter().filter(|s| s.has_coordinates()) {
        total += haversine_miles(previous, stop);
        previous = stop;
    }
    total += haversine_miles(previous, dropoff);

    // Haversine output is always finite, so the conversion cannot fail
    Decimal::from_f64_retain(total).unwrap_or(Decimal::ZERO)
}
