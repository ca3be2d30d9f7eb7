//! Great-circle distance helpers
//!
//! Pure arithmetic over WGS84 coordinates. Inputs are not validated here;
//! request DTOs reject non-finite values before they reach this module.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two coordinates, in kilometers.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Arithmetic midpoint of two coordinates.
///
/// Not a geodesic midpoint; the error is negligible at the few-kilometer
/// scale this service operates on.
pub fn midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
    Coordinate {
        lat: (a.lat + b.lat) / 2.0,
        lng: (a.lng + b.lng) / 2.0,
    }
}

/// Round to one decimal place (distances reported in km)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places (match scores)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
