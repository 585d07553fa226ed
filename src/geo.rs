//! Great-circle distance and nearby-beach ranking
//!
//! Distances are computed with the haversine formula on a spherical Earth.
//! Ranking sorts on the unrounded distance (ties broken by beach id) while the
//! returned distance is rounded to one decimal place, so display rounding can
//! never reorder results between requests.

use serde::Serialize;

use crate::error::ShorelineError;
use crate::models::{Beach, Coordinate};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A beach annotated with its distance from the query origin
#[derive(Debug, Clone, Serialize)]
pub struct DistanceResult {
    pub beach: Beach,
    /// Great-circle distance in km, rounded to one decimal place
    pub distance_km: f64,
}

/// Great-circle distance in kilometers between two validated coordinates
///
/// The returned value is unrounded; callers that display distances should
/// round through [`round_display_km`].
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> Result<f64, ShorelineError> {
    from.validate()?;
    to.validate()?;
    Ok(haversine_km(from, to))
}

/// Round a distance to one decimal place, half up
#[must_use]
pub fn round_display_km(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

/// Rank beaches by distance from `origin`, nearest first
///
/// With `radius_km = Some(r)` beaches farther than `r` km are dropped; a
/// distance exactly equal to the radius is kept. With `None` all beaches are
/// ranked. Ties at equal distance are ordered by ascending beach id.
pub fn rank(
    origin: &Coordinate,
    beaches: &[Beach],
    radius_km: Option<f64>,
) -> Result<Vec<DistanceResult>, ShorelineError> {
    origin.validate()?;

    if let Some(radius) = radius_km {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ShorelineError::validation(format!(
                "search radius must be a positive number of kilometers, got {radius}"
            )));
        }
    }

    let mut ranked = Vec::with_capacity(beaches.len());
    for beach in beaches {
        beach.coordinate.validate()?;
        ranked.push((beach, haversine_km(origin, &beach.coordinate)));
    }

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.id.cmp(&b.0.id)));

    Ok(ranked
        .into_iter()
        .map(|(beach, raw_km)| DistanceResult {
            beach: beach.clone(),
            distance_km: round_display_km(raw_km),
        })
        .filter(|result| radius_km.is_none_or(|radius| result.distance_km <= radius))
        .collect())
}

fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    // Floating-point error can push `a` marginally outside [0, 1] for
    // antipodal points, which would make the sqrt calls produce NaN.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
