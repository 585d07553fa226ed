//! Active alert board
//!
//! Serves the alert feed shown on the alerts page: region-wide and per-beach
//! advisories ordered by priority, plus the emergency contact list. Expired
//! alerts are filtered out on read.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::models::{Alert, AlertKind, AlertPriority, EmergencyContact};

/// Read-only snapshot of current alerts and emergency contacts
pub struct AlertBoard {
    alerts: Vec<Alert>,
    contacts: Vec<EmergencyContact>,
}

impl AlertBoard {
    #[must_use]
    pub fn new(alerts: Vec<Alert>, contacts: Vec<EmergencyContact>) -> Self {
        Self { alerts, contacts }
    }

    /// Active alerts, optionally filtered by kind, ordered by priority
    /// (high first) then newest first
    pub fn active(&self, kind: Option<AlertKind>, now: DateTime<Utc>) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|alert| Self::is_live(alert, now))
            .filter(|alert| kind.is_none_or(|wanted| alert.kind == wanted))
            .cloned()
            .collect();
        alerts.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        debug!("{} active alerts (filter: {:?})", alerts.len(), kind);
        alerts
    }

    /// Active alerts scoped to a single beach
    pub fn for_beach(&self, beach_id: u32, now: DateTime<Utc>) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|alert| Self::is_live(alert, now))
            .filter(|alert| alert.beach_id == Some(beach_id))
            .cloned()
            .collect();
        alerts.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        alerts
    }

    /// Emergency contacts shown alongside the alert feed
    #[must_use]
    pub fn emergency_contacts(&self) -> Vec<EmergencyContact> {
        self.contacts.clone()
    }

    fn is_live(alert: &Alert, now: DateTime<Utc>) -> bool {
        alert.active && alert.expires_at.is_none_or(|expires_at| expires_at > now)
    }

    /// Build the demo alert board matching the seeded catalog
    #[must_use]
    pub fn seeded() -> Self {
        let now = Utc::now();
        let alerts = vec![
            Alert {
                id: 1,
                beach_id: Some(3),
                title: "High Tide Alert".to_string(),
                description: "Dangerous high tide conditions expected at Mahabalipuram Beach. \
                              Avoid shore areas between 2:00 PM and 5:00 PM."
                    .to_string(),
                kind: AlertKind::Ocean,
                priority: AlertPriority::High,
                active: true,
                created_at: now,
                expires_at: Some(now + Duration::hours(24)),
            },
            Alert {
                id: 2,
                beach_id: Some(2),
                title: "Strong Wind Warning".to_string(),
                description: "Wind speeds increasing to 25-30 km/h at Marina Beach. Use caution \
                              with beach umbrellas and light equipment."
                    .to_string(),
                kind: AlertKind::Weather,
                priority: AlertPriority::Medium,
                active: true,
                created_at: now,
                expires_at: Some(now + Duration::hours(12)),
            },
            Alert {
                id: 3,
                beach_id: Some(1),
                title: "UV Index Update".to_string(),
                description: "UV index is very high (9) at Kovalam Beach today. Remember to \
                              apply sunscreen and stay hydrated."
                    .to_string(),
                kind: AlertKind::Weather,
                priority: AlertPriority::Low,
                active: true,
                created_at: now,
                expires_at: Some(now + Duration::hours(8)),
            },
        ];
        let contacts = vec![
            EmergencyContact {
                id: 1,
                name: "Coast Guard".to_string(),
                number: "1800-180-3123".to_string(),
                description: Some("National Coast Guard emergency hotline".to_string()),
            },
            EmergencyContact {
                id: 2,
                name: "Beach Patrol".to_string(),
                number: "104".to_string(),
                description: Some("Local beach patrol emergency contact".to_string()),
            },
        ];
        Self::new(alerts, contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_ordered_by_priority_then_recency() {
        let board = AlertBoard::seeded();
        let alerts = board.active(None, Utc::now());
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].priority, AlertPriority::High);
        assert_eq!(alerts[1].priority, AlertPriority::Medium);
        assert_eq!(alerts[2].priority, AlertPriority::Low);
    }

    #[test]
    fn test_kind_filter() {
        let board = AlertBoard::seeded();
        let weather = board.active(Some(AlertKind::Weather), Utc::now());
        assert_eq!(weather.len(), 2);
        assert!(weather.iter().all(|alert| alert.kind == AlertKind::Weather));

        let water_quality = board.active(Some(AlertKind::WaterQuality), Utc::now());
        assert!(water_quality.is_empty());
    }

    #[test]
    fn test_expired_alerts_dropped() {
        let board = AlertBoard::seeded();
        let far_future = Utc::now() + Duration::hours(48);
        assert!(board.active(None, far_future).is_empty());
    }

    #[test]
    fn test_for_beach_scoping() {
        let board = AlertBoard::seeded();
        let marina = board.for_beach(2, Utc::now());
        assert_eq!(marina.len(), 1);
        assert_eq!(marina[0].title, "Strong Wind Warning");

        let nowhere = board.for_beach(42, Utc::now());
        assert!(nowhere.is_empty());
    }

    #[test]
    fn test_emergency_contacts() {
        let board = AlertBoard::seeded();
        let contacts = board.emergency_contacts();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "Coast Guard");
    }
}
