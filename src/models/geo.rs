use serde::{Deserialize, Serialize};

use super::marker::Marker;

/// Longitude/latitude pair, serialized as `[lng, lat]` like the renderer expects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat(pub f64, pub f64);

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self(lng, lat)
    }

    pub fn lng(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }
}

/// South-west / north-east bounding box, serialized as `[[w, s], [e, n]]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLatBounds(pub LngLat, pub LngLat);

impl LngLatBounds {
    pub fn from_point(point: LngLat) -> Self {
        Self(point, point)
    }

    pub fn extend(&mut self, point: LngLat) {
        self.0 = LngLat::new(self.0.lng().min(point.lng()), self.0.lat().min(point.lat()));
        self.1 = LngLat::new(self.1.lng().max(point.lng()), self.1.lat().max(point.lat()));
    }

    /// Bounds covering every marker, or `None` for an empty list
    pub fn from_markers(markers: &[Marker]) -> Option<Self> {
        let mut iter = markers.iter().map(Marker::position);
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |mut bounds, point| {
            bounds.extend(point);
            bounds
        }))
    }
}

/// Pointer position relative to the map container, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
