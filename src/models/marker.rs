use serde::{Deserialize, Serialize};

use crate::utils::constants::HOT_THRESHOLD;
use super::geo::LngLat;

/// Geo-located site shown on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub viability_score: u8,
}

impl Marker {
    pub fn new(id: &str, name: &str, latitude: f64, longitude: f64, viability_score: u8) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            latitude,
            longitude,
            viability_score: viability_score.min(100),
        }
    }

    pub fn is_hot(&self) -> bool {
        is_hot_score(self.viability_score)
    }

    pub fn position(&self) -> LngLat {
        LngLat::new(self.longitude, self.latitude)
    }

}

pub fn is_hot_score(score: u8) -> bool {
    score >= HOT_THRESHOLD
}

/// Sidebar figures for the active module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerSummary {
    pub total: usize,
    pub hot: usize,
    pub average_score: u8,
}

impl MarkerSummary {
    pub fn of(markers: &[Marker]) -> Self {
        if markers.is_empty() {
            return Self::default();
        }
        let sum: u32 = markers.iter().map(|m| m.viability_score as u32).sum();
        Self {
            total: markers.len(),
            hot: markers.iter().filter(|m| m.is_hot()).count(),
            average_score: (sum / markers.len() as u32) as u8,
        }
    }
}
