//! HTTP API routes
//!
//! Thin axum layer over the catalog, alert board and condition providers.
//! Handlers validate and translate inputs, call into the library, and map
//! errors to HTTP statuses; no domain logic lives here.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    alerts::AlertBoard,
    catalog::{BeachCatalog, BeachStatus, NearbyBeach},
    config::DefaultsConfig,
    error::ShorelineError,
    models::{Alert, AlertKind, Amenity, Coordinate, EmergencyContact},
    places::{self, PlaceMatch},
    weather::{ConditionsProvider, MarineReport, WeatherReport},
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<BeachCatalog>,
    pub alerts: Arc<AlertBoard>,
    pub provider: Arc<dyn ConditionsProvider>,
    pub defaults: DefaultsConfig,
}

/// JSON error body returned for all failed requests
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn into_api_error(err: ShorelineError) -> ApiError {
    let status = match &err {
        ShorelineError::NotFound { .. } => StatusCode::NOT_FOUND,
        ShorelineError::Validation { .. }
        | ShorelineError::InvalidCoordinate { .. }
        | ShorelineError::InvalidCondition { .. } => StatusCode::BAD_REQUEST,
        ShorelineError::Api { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorBody {
            message: err.user_message(),
        }),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/beaches", get(get_beaches))
        .route("/beaches/nearby", get(get_nearby_beaches))
        .route("/beaches/{id}", get(get_beach))
        .route("/beaches/{id}/alerts", get(get_beach_alerts))
        .route("/beaches/{id}/amenities", get(get_beach_amenities))
        .route("/alerts", get(get_alerts))
        .route("/emergency-contacts", get(get_emergency_contacts))
        .route("/weather/{lat}/{lon}", get(get_weather))
        .route("/marine/{lat}/{lon}", get(get_marine))
        .route("/search-location", get(search_location))
        .with_state(state)
}

async fn get_beaches(State(state): State<AppState>) -> Result<Json<Vec<BeachStatus>>, ApiError> {
    let beaches = state.catalog.all_beaches().map_err(into_api_error)?;
    Ok(Json(beaches))
}

async fn get_beach(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<BeachStatus>, ApiError> {
    let beach = state.catalog.beach(id).map_err(into_api_error)?;
    Ok(Json(beach))
}

#[derive(Debug, Deserialize)]
struct NearbyQuery {
    lat: f64,
    lon: f64,
    /// Radius in km; the configured default applies when omitted
    radius: Option<f64>,
    /// Rank the whole catalog with no radius cutoff
    #[serde(default)]
    unbounded: bool,
}

async fn get_nearby_beaches(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<NearbyBeach>>, ApiError> {
    let origin = Coordinate::new(query.lat, query.lon).map_err(into_api_error)?;
    let radius_km = if query.unbounded {
        None
    } else {
        Some(query.radius.unwrap_or(state.defaults.search_radius_km))
    };

    let mut nearby = state
        .catalog
        .nearby(&origin, radius_km)
        .map_err(into_api_error)?;
    nearby.truncate(state.defaults.max_results as usize);
    Ok(Json(nearby))
}

#[derive(Debug, Deserialize)]
struct AlertsQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

fn parse_alert_kind(raw: &str) -> Result<Option<AlertKind>, ShorelineError> {
    match raw {
        "all" => Ok(None),
        "weather" => Ok(Some(AlertKind::Weather)),
        "ocean" => Ok(Some(AlertKind::Ocean)),
        "water_quality" => Ok(Some(AlertKind::WaterQuality)),
        "safety" => Ok(Some(AlertKind::Safety)),
        other => Err(ShorelineError::validation(format!(
            "unknown alert type '{other}'"
        ))),
    }
}

async fn get_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertsQuery>,
) -> Result<Json<Vec<Alert>>, ApiError> {
    let kind = match query.kind.as_deref() {
        Some(raw) => parse_alert_kind(raw).map_err(into_api_error)?,
        None => None,
    };
    Ok(Json(state.alerts.active(kind, Utc::now())))
}

async fn get_beach_alerts(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<Alert>>, ApiError> {
    // 404 for unknown beaches instead of an empty list
    state.catalog.beach(id).map_err(into_api_error)?;
    Ok(Json(state.alerts.for_beach(id, Utc::now())))
}

async fn get_beach_amenities(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<Amenity>>, ApiError> {
    let amenities = state.catalog.amenities(id).map_err(into_api_error)?;
    Ok(Json(amenities))
}

async fn get_emergency_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmergencyContact>>, ApiError> {
    Ok(Json(state.alerts.emergency_contacts()))
}

async fn get_weather(
    State(state): State<AppState>,
    Path((lat, lon)): Path<(f64, f64)>,
) -> Result<Json<WeatherReport>, ApiError> {
    let coordinate = Coordinate::new(lat, lon).map_err(into_api_error)?;
    let report = state
        .provider
        .weather(&coordinate)
        .await
        .map_err(into_api_error)?;
    Ok(Json(report))
}

async fn get_marine(
    State(state): State<AppState>,
    Path((lat, lon)): Path<(f64, f64)>,
) -> Result<Json<MarineReport>, ApiError> {
    let coordinate = Coordinate::new(lat, lon).map_err(into_api_error)?;
    let report = state
        .provider
        .marine(&coordinate)
        .await
        .map_err(into_api_error)?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: String,
}

async fn search_location(
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<PlaceMatch>>, ApiError> {
    let matches = places::search(&query.q).map_err(into_api_error)?;
    if matches.is_empty() {
        return Err(into_api_error(ShorelineError::not_found(
            "No locations found matching your query",
        )));
    }
    Ok(Json(matches))
}
