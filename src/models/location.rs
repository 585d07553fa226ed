//! Geographic coordinate model and validation

use serde::{Deserialize, Serialize};

use crate::error::ShorelineError;

/// A point on the globe in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a validated coordinate
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ShorelineError> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check latitude/longitude ranges and reject non-finite values
    pub fn validate(&self) -> Result<(), ShorelineError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(ShorelineError::invalid_coordinate(format!(
                "coordinates must be finite, got ({}, {})",
                self.latitude, self.longitude
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ShorelineError::invalid_coordinate(format!(
                "latitude {} out of range [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ShorelineError::invalid_coordinate(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    /// Format as a "lat, lon" display string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinate() {
        let coordinate = Coordinate::new(13.0827, 80.2707).unwrap();
        assert_eq!(coordinate.latitude, 13.0827);
        assert_eq!(coordinate.longitude, 80.2707);
    }

    #[test]
    fn test_range_boundaries_are_valid() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            Coordinate::new(90.01, 0.0),
            Err(ShorelineError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            Coordinate::new(0.0, -180.5),
            Err(ShorelineError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_format_coordinates() {
        let coordinate = Coordinate::new(12.6269, 80.1929).unwrap();
        assert_eq!(coordinate.format_coordinates(), "12.6269, 80.1929");
    }
}
