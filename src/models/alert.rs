//! Alert models for beach advisories

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Weather,
    Ocean,
    WaterQuality,
    Safety,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Weather => write!(f, "weather"),
            AlertKind::Ocean => write!(f, "ocean"),
            AlertKind::WaterQuality => write!(f, "water_quality"),
            AlertKind::Safety => write!(f, "safety"),
        }
    }
}

/// Alert priority; ordering is used to surface high-priority alerts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
}

/// An advisory shown to beachgoers, optionally scoped to a single beach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    /// `None` for region-wide alerts
    pub beach_id: Option<u32>,
    pub title: String,
    pub description: String,
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Emergency contact shown on the alerts page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: u32,
    pub name: String,
    pub number: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(AlertPriority::High > AlertPriority::Medium);
        assert!(AlertPriority::Medium > AlertPriority::Low);
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&AlertKind::WaterQuality).unwrap(),
            "\"water_quality\""
        );
    }
}
