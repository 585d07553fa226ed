//! Beach catalog entry model

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// A beach in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beach {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Human-readable region, e.g. "Chennai, Tamil Nadu, India"
    pub region: String,
    pub coordinate: Coordinate,
    pub image_url: Option<String>,
}

impl Beach {
    #[must_use]
    pub fn new(id: u32, name: &str, region: &str, coordinate: Coordinate) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: String::new(),
            region: region.to_string(),
            coordinate,
            image_url: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: &str) -> Self {
        self.image_url = Some(image_url.to_string());
        self
    }
}
