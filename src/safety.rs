//! Beach safety classification
//!
//! Derives an overall swimming safety level from wave height, wind speed and
//! water quality. Each factor is normalized to [0, 1] where 1 is safest, the
//! factors are combined with fixed weights, and the composite score is mapped
//! to one of three discrete levels. The computation is total and deterministic;
//! safety is always recomputed from readings, never read back from storage.

use serde::Serialize;

use crate::error::ShorelineError;
use crate::models::{ConditionInputs, SafetyLevel, WaterQuality};

// Factor weights; they must sum to exactly 1.0 or the classification
// boundaries shift system-wide.
const WAVE_WEIGHT: f64 = 0.4;
const WIND_WEIGHT: f64 = 0.3;
const WATER_QUALITY_WEIGHT: f64 = 0.3;

/// Composite score at or above which conditions are considered safe
const SAFE_THRESHOLD: f64 = 0.7;
/// Composite score at or above which conditions warrant caution rather than
/// being outright unsafe
const CAUTION_THRESHOLD: f64 = 0.3;

/// Full safety assessment with the per-factor breakdown
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SafetyAssessment {
    pub level: SafetyLevel,
    /// Weighted composite score in [0, 1]
    pub score: f64,
    pub wave_factor: f64,
    pub wind_factor: f64,
    pub water_quality_factor: f64,
}

/// Classify condition readings into a safety level
pub fn classify(inputs: &ConditionInputs) -> Result<SafetyLevel, ShorelineError> {
    Ok(assess(inputs)?.level)
}

/// Compute the composite safety score and per-factor breakdown
pub fn assess(inputs: &ConditionInputs) -> Result<SafetyAssessment, ShorelineError> {
    validate(inputs)?;

    let wave_factor = wave_factor(inputs.wave_height_m);
    let wind_factor = wind_factor(inputs.wind_speed_kmh);
    let water_quality_factor = water_quality_factor(inputs.water_quality);

    let score = WAVE_WEIGHT * wave_factor
        + WIND_WEIGHT * wind_factor
        + WATER_QUALITY_WEIGHT * water_quality_factor;

    let level = if score >= SAFE_THRESHOLD {
        SafetyLevel::Safe
    } else if score >= CAUTION_THRESHOLD {
        SafetyLevel::Caution
    } else {
        SafetyLevel::Unsafe
    };

    Ok(SafetyAssessment {
        level,
        score,
        wave_factor,
        wind_factor,
        water_quality_factor,
    })
}

fn validate(inputs: &ConditionInputs) -> Result<(), ShorelineError> {
    if !inputs.wave_height_m.is_finite() || inputs.wave_height_m < 0.0 {
        return Err(ShorelineError::invalid_condition(format!(
            "wave height must be a non-negative number of meters, got {}",
            inputs.wave_height_m
        )));
    }
    if !inputs.wind_speed_kmh.is_finite() || inputs.wind_speed_kmh < 0.0 {
        return Err(ShorelineError::invalid_condition(format!(
            "wind speed must be a non-negative number of km/h, got {}",
            inputs.wind_speed_kmh
        )));
    }
    Ok(())
}

/// Wave height sub-score, 1 = calmest
fn wave_factor(wave_height_m: f64) -> f64 {
    if wave_height_m < 1.0 {
        1.0
    } else if wave_height_m < 1.5 {
        0.8
    } else if wave_height_m < 2.0 {
        0.4
    } else {
        0.0
    }
}

/// Wind speed sub-score, 1 = calmest
fn wind_factor(wind_speed_kmh: f64) -> f64 {
    if wind_speed_kmh < 15.0 {
        1.0
    } else if wind_speed_kmh < 25.0 {
        0.7
    } else if wind_speed_kmh < 35.0 {
        0.3
    } else {
        0.0
    }
}

/// Water quality sub-score
fn water_quality_factor(water_quality: WaterQuality) -> f64 {
    match water_quality {
        WaterQuality::Good => 1.0,
        WaterQuality::Moderate => 0.5,
        WaterQuality::Poor => 0.0,
    }
}
