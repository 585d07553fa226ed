//! Data models for beaches, conditions and alerts

pub mod alert;
pub mod beach;
pub mod conditions;
pub mod location;

pub use alert::{Alert, AlertKind, AlertPriority, EmergencyContact};
pub use beach::Beach;
pub use conditions::{
    Amenity, ConditionInputs, ConditionSnapshot, Hazard, HazardSeverity, SafetyLevel, TideStatus,
    WaterQuality,
};
pub use location::Coordinate;
