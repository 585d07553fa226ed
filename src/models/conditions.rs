//! Condition readings, water quality and safety level models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ShorelineError;

/// Water quality category reported for a beach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterQuality {
    Good,
    Moderate,
    Poor,
}

impl FromStr for WaterQuality {
    type Err = ShorelineError;

    /// Parse a water quality string; unrecognized values are rejected rather
    /// than bucketed into `Poor`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(WaterQuality::Good),
            "moderate" => Ok(WaterQuality::Moderate),
            "poor" => Ok(WaterQuality::Poor),
            other => Err(ShorelineError::invalid_condition(format!(
                "unrecognized water quality '{other}'"
            ))),
        }
    }
}

impl fmt::Display for WaterQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterQuality::Good => write!(f, "good"),
            WaterQuality::Moderate => write!(f, "moderate"),
            WaterQuality::Poor => write!(f, "poor"),
        }
    }
}

/// Overall swimming safety level for a beach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Safe,
    Caution,
    Unsafe,
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyLevel::Safe => write!(f, "safe"),
            SafetyLevel::Caution => write!(f, "caution"),
            SafetyLevel::Unsafe => write!(f, "unsafe"),
        }
    }
}

/// Tide state at observation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TideStatus {
    High,
    Low,
}

/// The raw readings the safety classifier operates on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionInputs {
    /// Significant wave height in meters
    pub wave_height_m: f64,
    /// Sustained wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Reported water quality category
    pub water_quality: WaterQuality,
}

/// Latest observed conditions for a beach
///
/// The stored `safety_status` of the upstream feed is deliberately absent here:
/// safety is always recomputed from the readings, never served from storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionSnapshot {
    pub beach_id: u32,
    /// Air temperature in Celsius
    pub temperature_c: f64,
    /// Apparent temperature in Celsius
    pub feels_like_c: f64,
    /// Significant wave height in meters
    pub wave_height_m: f64,
    pub wave_description: String,
    /// Sustained wind speed in km/h
    pub wind_speed_kmh: f64,
    pub wind_description: String,
    pub uv_index: u8,
    pub uv_description: String,
    pub water_quality: WaterQuality,
    pub water_quality_description: String,
    pub tide_status: TideStatus,
    pub tide_description: String,
    pub swimming_advisory: String,
    pub advisory_description: String,
    pub updated_at: DateTime<Utc>,
}

impl ConditionSnapshot {
    /// Extract the classifier inputs from this snapshot
    #[must_use]
    pub fn inputs(&self) -> ConditionInputs {
        ConditionInputs {
            wave_height_m: self.wave_height_m,
            wind_speed_kmh: self.wind_speed_kmh,
            water_quality: self.water_quality,
        }
    }
}

/// Severity of an active hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardSeverity {
    Low,
    Moderate,
    High,
}

/// An active hazard reported at a beach (rip current, heat, jellyfish, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub beach_id: u32,
    pub kind: String,
    pub severity: HazardSeverity,
    pub description: String,
    pub active: bool,
}

/// A facility near a beach (lifeguard post, restroom, parking, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: u32,
    pub beach_id: u32,
    pub kind: String,
    pub name: String,
    /// Walking distance from the beach entrance in meters
    pub distance_m: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_quality_parsing() {
        assert_eq!(WaterQuality::from_str("good").unwrap(), WaterQuality::Good);
        assert_eq!(
            WaterQuality::from_str("moderate").unwrap(),
            WaterQuality::Moderate
        );
        assert_eq!(WaterQuality::from_str("poor").unwrap(), WaterQuality::Poor);
    }

    #[test]
    fn test_unrecognized_water_quality_rejected() {
        let err = WaterQuality::from_str("excellent").unwrap_err();
        assert!(matches!(err, ShorelineError::InvalidCondition { .. }));
        assert!(err.to_string().contains("excellent"));
    }

    #[test]
    fn test_safety_level_serialization() {
        assert_eq!(
            serde_json::to_string(&SafetyLevel::Caution).unwrap(),
            "\"caution\""
        );
        assert_eq!(SafetyLevel::Unsafe.to_string(), "unsafe");
    }
}
