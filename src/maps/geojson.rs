// ============================================================================
// GEOJSON - Marker list -> renderer geometry
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::{LngLat, Marker};
use super::traits::MarkerProperties;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: LngLat },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: MarkerProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.properties.id.as_str())
    }
}

impl From<&Marker> for Feature {
    fn from(marker: &Marker) -> Self {
        Feature {
            geometry: Geometry::Point { coordinates: marker.position() },
            properties: MarkerProperties {
                id: marker.id.clone(),
                name: marker.name.clone(),
                viability_score: marker.viability_score,
            },
        }
    }
}

impl<'a> FromIterator<&'a Marker> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = &'a Marker>>(iter: I) -> Self {
        Self { features: iter.into_iter().map(Feature::from).collect() }
    }
}

/// One point per marker
pub fn marker_collection(markers: &[Marker]) -> FeatureCollection {
    markers.iter().collect()
}

/// Points for the hot subset only (score >= HOT_THRESHOLD)
pub fn hot_zone_collection(markers: &[Marker]) -> FeatureCollection {
    markers.iter().filter(|m| m.is_hot()).collect()
}
