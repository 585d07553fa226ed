//! `Shoreline` - Beach discovery and coastal safety conditions
//!
//! This library provides the core functionality for beach distance ranking,
//! safety classification from live conditions, and the coastal alert feed.

pub mod alerts;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod places;
pub mod safety;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use alerts::AlertBoard;
pub use catalog::{BeachCatalog, BeachStatus, NearbyBeach};
pub use config::ShorelineConfig;
pub use error::ShorelineError;
pub use geo::DistanceResult;
pub use models::{
    Alert, AlertKind, AlertPriority, Amenity, Beach, ConditionInputs, ConditionSnapshot,
    Coordinate, EmergencyContact, Hazard, SafetyLevel, TideStatus, WaterQuality,
};
pub use safety::SafetyAssessment;
pub use weather::{ConditionsProvider, DemoProvider, MarineReport, OpenWeatherMapClient, WeatherReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ShorelineError>;
