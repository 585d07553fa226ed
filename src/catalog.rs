//! In-memory beach catalog
//!
//! Holds the current snapshot of beaches together with their latest condition
//! readings, active hazards and amenities. Persistence lives upstream; the
//! catalog only serves reads. Safety levels are recomputed from the condition
//! readings on every read so a stale stored status can never be served.

use std::collections::HashMap;

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::error::ShorelineError;
use crate::models::{
    Amenity, Beach, ConditionSnapshot, Coordinate, Hazard, HazardSeverity, TideStatus,
    WaterQuality,
};
use crate::safety::{self, SafetyAssessment};
use crate::{geo, Result};

/// A beach combined with its latest conditions, recomputed safety and hazards
#[derive(Debug, Clone, Serialize)]
pub struct BeachStatus {
    pub beach: Beach,
    pub conditions: Option<ConditionSnapshot>,
    /// Safety derived from `conditions`; `None` when no readings exist yet
    pub safety: Option<SafetyAssessment>,
    pub hazards: Vec<Hazard>,
}

/// A ranked beach status with its distance from the query origin
#[derive(Debug, Clone, Serialize)]
pub struct NearbyBeach {
    #[serde(flatten)]
    pub status: BeachStatus,
    /// Distance in km, rounded to one decimal place
    pub distance_km: f64,
}

/// Read-only snapshot of the beach catalog
pub struct BeachCatalog {
    beaches: Vec<Beach>,
    conditions: HashMap<u32, ConditionSnapshot>,
    hazards: Vec<Hazard>,
    amenities: Vec<Amenity>,
}

impl BeachCatalog {
    #[must_use]
    pub fn new(
        beaches: Vec<Beach>,
        conditions: Vec<ConditionSnapshot>,
        hazards: Vec<Hazard>,
        amenities: Vec<Amenity>,
    ) -> Self {
        Self {
            beaches,
            conditions: conditions
                .into_iter()
                .map(|snapshot| (snapshot.beach_id, snapshot))
                .collect(),
            hazards,
            amenities,
        }
    }

    /// All beaches with their status, sorted by name
    pub fn all_beaches(&self) -> Result<Vec<BeachStatus>> {
        let mut statuses = self
            .beaches
            .iter()
            .map(|beach| self.status_for(beach))
            .collect::<Result<Vec<_>>>()?;
        statuses.sort_by(|a, b| a.beach.name.cmp(&b.beach.name));
        Ok(statuses)
    }

    /// A single beach with full status
    pub fn beach(&self, beach_id: u32) -> Result<BeachStatus> {
        let beach = self
            .beaches
            .iter()
            .find(|beach| beach.id == beach_id)
            .ok_or_else(|| ShorelineError::not_found(format!("Beach {beach_id} not found")))?;
        self.status_for(beach)
    }

    /// Beaches ranked by distance from `origin`, optionally capped by a radius
    pub fn nearby(&self, origin: &Coordinate, radius_km: Option<f64>) -> Result<Vec<NearbyBeach>> {
        debug!(
            "Ranking {} beaches from ({}, {}), radius {:?}",
            self.beaches.len(),
            origin.latitude,
            origin.longitude,
            radius_km
        );
        geo::rank(origin, &self.beaches, radius_km)?
            .into_iter()
            .map(|ranked| {
                Ok(NearbyBeach {
                    status: self.status_for(&ranked.beach)?,
                    distance_km: ranked.distance_km,
                })
            })
            .collect()
    }

    /// Amenities for a beach, sorted by kind
    pub fn amenities(&self, beach_id: u32) -> Result<Vec<Amenity>> {
        if !self.beaches.iter().any(|beach| beach.id == beach_id) {
            return Err(ShorelineError::not_found(format!(
                "Beach {beach_id} not found"
            )));
        }
        let mut amenities: Vec<Amenity> = self
            .amenities
            .iter()
            .filter(|amenity| amenity.beach_id == beach_id)
            .cloned()
            .collect();
        amenities.sort_by(|a, b| a.kind.cmp(&b.kind));
        Ok(amenities)
    }

    fn status_for(&self, beach: &Beach) -> Result<BeachStatus> {
        let conditions = self.conditions.get(&beach.id).cloned();
        let safety = match &conditions {
            Some(snapshot) => Some(safety::assess(&snapshot.inputs())?),
            None => None,
        };
        let hazards = self
            .hazards
            .iter()
            .filter(|hazard| hazard.beach_id == beach.id && hazard.active)
            .cloned()
            .collect();
        Ok(BeachStatus {
            beach: beach.clone(),
            conditions,
            safety,
            hazards,
        })
    }

    /// Build the demo catalog with the seeded south-Indian beaches
    pub fn seeded() -> Result<Self> {
        let beaches = vec![
            Beach::new(
                1,
                "Kovalam Beach",
                "Tamil Nadu, India",
                Coordinate::new(12.7891, 80.2547)?,
            )
            .with_description("A beautiful beach known for its clear waters and serene environment.")
            .with_image_url("https://images.unsplash.com/photo-1507525428034-b723cf961d3e"),
            Beach::new(
                2,
                "Marina Beach",
                "Chennai, Tamil Nadu, India",
                Coordinate::new(13.0500, 80.2824)?,
            )
            .with_description("One of the longest urban beaches in the world with golden sands.")
            .with_image_url("https://images.unsplash.com/photo-1519046904884-53103b34b206"),
            Beach::new(
                3,
                "Mahabalipuram Beach",
                "Tamil Nadu, India",
                Coordinate::new(12.6269, 80.1929)?,
            )
            .with_description("Historic beach with ancient shore temples and rock carvings.")
            .with_image_url("https://images.unsplash.com/photo-1519046904884-53103b34b206"),
        ];

        let now = Utc::now();
        let conditions = vec![
            ConditionSnapshot {
                beach_id: 1,
                temperature_c: 32.0,
                feels_like_c: 35.0,
                wave_height_m: 1.2,
                wave_description: "Moderate waves".to_string(),
                wind_speed_kmh: 18.0,
                wind_description: "Mild breeze".to_string(),
                uv_index: 9,
                uv_description: "Very High - Apply Sunscreen".to_string(),
                water_quality: WaterQuality::Good,
                water_quality_description: "No major pollutants detected".to_string(),
                tide_status: TideStatus::Low,
                tide_description: "Low tide (receding)".to_string(),
                swimming_advisory: "Safe for Swimming".to_string(),
                advisory_description: "Caution for stronger waves after 3 PM".to_string(),
                updated_at: now,
            },
            ConditionSnapshot {
                beach_id: 2,
                temperature_c: 30.0,
                feels_like_c: 32.0,
                wave_height_m: 1.8,
                wave_description: "Moderate to high waves".to_string(),
                wind_speed_kmh: 25.0,
                wind_description: "Moderate winds".to_string(),
                uv_index: 8,
                uv_description: "Very High - Apply Sunscreen".to_string(),
                water_quality: WaterQuality::Moderate,
                water_quality_description: "Some turbidity observed".to_string(),
                tide_status: TideStatus::High,
                tide_description: "High tide (approaching peak)".to_string(),
                swimming_advisory: "Swim with Caution".to_string(),
                advisory_description: "Strong winds may cause rough waters".to_string(),
                updated_at: now,
            },
            ConditionSnapshot {
                beach_id: 3,
                temperature_c: 29.0,
                feels_like_c: 31.0,
                wave_height_m: 2.5,
                wave_description: "High waves, rough sea".to_string(),
                wind_speed_kmh: 40.0,
                wind_description: "Strong winds".to_string(),
                uv_index: 7,
                uv_description: "High - Use sunscreen".to_string(),
                water_quality: WaterQuality::Poor,
                water_quality_description: "High turbidity and suspected pollution".to_string(),
                tide_status: TideStatus::High,
                tide_description: "High tide with storm surge".to_string(),
                swimming_advisory: "Unsafe for Swimming".to_string(),
                advisory_description: "Dangerous conditions due to high waves and rip currents"
                    .to_string(),
                updated_at: now,
            },
        ];

        let hazards = vec![
            Hazard {
                id: 1,
                beach_id: 1,
                kind: "rip_current".to_string(),
                severity: HazardSeverity::Moderate,
                description: "Moderate risk near rocky areas - Avoid deep waters".to_string(),
                active: true,
            },
            Hazard {
                id: 2,
                beach_id: 1,
                kind: "heat".to_string(),
                severity: HazardSeverity::Moderate,
                description: "UV levels are high - Stay hydrated and use sunscreen".to_string(),
                active: true,
            },
            Hazard {
                id: 3,
                beach_id: 2,
                kind: "wind".to_string(),
                severity: HazardSeverity::Moderate,
                description: "Strong winds expected - Secure loose items".to_string(),
                active: true,
            },
            Hazard {
                id: 4,
                beach_id: 2,
                kind: "current".to_string(),
                severity: HazardSeverity::Moderate,
                description: "Moderate currents present - Swim with caution".to_string(),
                active: true,
            },
            Hazard {
                id: 5,
                beach_id: 3,
                kind: "tide".to_string(),
                severity: HazardSeverity::High,
                description: "High tide alert - Avoid shore areas between 2:00 PM and 5:00 PM"
                    .to_string(),
                active: true,
            },
            Hazard {
                id: 6,
                beach_id: 3,
                kind: "rip_current".to_string(),
                severity: HazardSeverity::High,
                description: "Dangerous rip currents observed".to_string(),
                active: true,
            },
            Hazard {
                id: 7,
                beach_id: 3,
                kind: "storm".to_string(),
                severity: HazardSeverity::High,
                description: "Storm warning in effect".to_string(),
                active: true,
            },
        ];

        let amenities = vec![
            Amenity {
                id: 1,
                beach_id: 1,
                kind: "lifeguard".to_string(),
                name: "Lifeguard Station".to_string(),
                distance_m: Some(200),
            },
            Amenity {
                id: 2,
                beach_id: 1,
                kind: "restroom".to_string(),
                name: "Public Restrooms".to_string(),
                distance_m: Some(100),
            },
            Amenity {
                id: 3,
                beach_id: 1,
                kind: "food".to_string(),
                name: "Kovalam Seafood Restaurant".to_string(),
                distance_m: Some(300),
            },
            Amenity {
                id: 4,
                beach_id: 1,
                kind: "parking".to_string(),
                name: "Beach Parking".to_string(),
                distance_m: Some(150),
            },
            Amenity {
                id: 5,
                beach_id: 2,
                kind: "lifeguard".to_string(),
                name: "Marina Lifeguard Tower".to_string(),
                distance_m: Some(300),
            },
            Amenity {
                id: 6,
                beach_id: 2,
                kind: "restroom".to_string(),
                name: "Public Restrooms".to_string(),
                distance_m: Some(200),
            },
            Amenity {
                id: 7,
                beach_id: 2,
                kind: "food".to_string(),
                name: "Beach Cafe".to_string(),
                distance_m: Some(400),
            },
            Amenity {
                id: 8,
                beach_id: 2,
                kind: "parking".to_string(),
                name: "Marina Parking Lot".to_string(),
                distance_m: Some(250),
            },
            Amenity {
                id: 9,
                beach_id: 3,
                kind: "lifeguard".to_string(),
                name: "Beach Safety Point".to_string(),
                distance_m: Some(350),
            },
            Amenity {
                id: 10,
                beach_id: 3,
                kind: "restroom".to_string(),
                name: "Tourist Restrooms".to_string(),
                distance_m: Some(250),
            },
            Amenity {
                id: 11,
                beach_id: 3,
                kind: "food".to_string(),
                name: "Shore Temple Restaurant".to_string(),
                distance_m: Some(500),
            },
            Amenity {
                id: 12,
                beach_id: 3,
                kind: "parking".to_string(),
                name: "Temple Parking".to_string(),
                distance_m: Some(300),
            },
        ];

        Ok(Self::new(beaches, conditions, hazards, amenities))
    }
}
