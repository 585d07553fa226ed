//! Place-name lookup for the location search box
//!
//! Real geocoding is out of scope; searches run against a fixed table of major
//! Indian cities, matching on city or state substrings.

use serde::Serialize;

use crate::error::ShorelineError;
use crate::models::Coordinate;
use crate::Result;

/// A resolved place from the lookup table
#[derive(Debug, Clone, Serialize)]
pub struct PlaceMatch {
    pub name: String,
    pub state: String,
    /// Combined display string, e.g. "Chennai, Tamil Nadu"
    pub display: String,
    pub latitude: f64,
    pub longitude: f64,
}

struct City {
    name: &'static str,
    state: &'static str,
    latitude: f64,
    longitude: f64,
}

const CITIES: [City; 15] = [
    City { name: "Chennai", state: "Tamil Nadu", latitude: 13.0827, longitude: 80.2707 },
    City { name: "Mumbai", state: "Maharashtra", latitude: 19.0760, longitude: 72.8777 },
    City { name: "Delhi", state: "Delhi", latitude: 28.6139, longitude: 77.2090 },
    City { name: "Kolkata", state: "West Bengal", latitude: 22.5726, longitude: 88.3639 },
    City { name: "Bangalore", state: "Karnataka", latitude: 12.9716, longitude: 77.5946 },
    City { name: "Hyderabad", state: "Telangana", latitude: 17.3850, longitude: 78.4867 },
    City { name: "Kochi", state: "Kerala", latitude: 9.9312, longitude: 76.2673 },
    City { name: "Goa", state: "Goa", latitude: 15.2993, longitude: 74.1240 },
    City { name: "Pondicherry", state: "Puducherry", latitude: 11.9416, longitude: 79.8083 },
    City { name: "Visakhapatnam", state: "Andhra Pradesh", latitude: 17.6868, longitude: 83.2185 },
    City { name: "Madurai", state: "Tamil Nadu", latitude: 9.9252, longitude: 78.1198 },
    City { name: "Thiruvananthapuram", state: "Kerala", latitude: 8.5241, longitude: 76.9366 },
    City { name: "Mahabalipuram", state: "Tamil Nadu", latitude: 12.6269, longitude: 80.1929 },
    City { name: "Puri", state: "Odisha", latitude: 19.8133, longitude: 85.8312 },
    City { name: "Kovalam", state: "Kerala", latitude: 8.3988, longitude: 76.9820 },
];

/// Search the place table by city or state name, case-insensitive
pub fn search(query: &str) -> Result<Vec<PlaceMatch>> {
    let query = query.trim();
    if query.chars().count() < 2 {
        return Err(ShorelineError::validation(
            "search query must be at least 2 characters",
        ));
    }

    let query_lower = query.to_lowercase();
    Ok(CITIES
        .iter()
        .filter(|city| {
            city.name.to_lowercase().contains(&query_lower)
                || city.state.to_lowercase().contains(&query_lower)
        })
        .map(|city| PlaceMatch {
            name: city.name.to_string(),
            state: city.state.to_string(),
            display: format!("{}, {}", city.name, city.state),
            latitude: city.latitude,
            longitude: city.longitude,
        })
        .collect())
}

impl PlaceMatch {
    /// Coordinate of the matched place
    pub fn coordinate(&self) -> Result<Coordinate> {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_by_city_name() {
        let matches = search("chennai").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].display, "Chennai, Tamil Nadu");
        assert_eq!(matches[0].latitude, 13.0827);
    }

    #[test]
    fn test_search_by_state() {
        let matches = search("tamil nadu").unwrap();
        let names: Vec<&str> = matches.iter().map(|place| place.name.as_str()).collect();
        assert!(names.contains(&"Chennai"));
        assert!(names.contains(&"Madurai"));
        assert!(names.contains(&"Mahabalipuram"));
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let matches = search("atlantis").unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_short_query_rejected() {
        assert!(matches!(
            search("a"),
            Err(ShorelineError::Validation { .. })
        ));
        assert!(matches!(
            search("  x  "),
            Err(ShorelineError::Validation { .. })
        ));
    }

    #[test]
    fn test_all_table_entries_have_valid_coordinates() {
        for city in &CITIES {
            assert!(Coordinate::new(city.latitude, city.longitude).is_ok());
        }
    }
}
