use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{LngLat, LngLatBounds, ScreenPoint};
use super::geojson::FeatureCollection;
use super::style::LayerSpec;

/// Boundary with the map rendering engine.
///
/// Every mutator may fail until the style-loaded signal has fired once; callers
/// go through [`super::guard::guarded`] instead of propagating those errors.
pub trait MapRenderer {
    /// Guard returned by [`MapRenderer::subscribe`]; dropping it unregisters the handler
    type Subscription;

    fn add_raster_source(&mut self, id: &str, tiles_url: &str, tile_size: u32, attribution: &str) -> Result<(), MapError>;

    /// Register a GeoJSON source whose `promote_id` property becomes the feature-state key
    fn add_geojson_source(&mut self, id: &str, data: &FeatureCollection, promote_id: &str) -> Result<(), MapError>;

    /// Replace the whole geometry of an existing GeoJSON source
    fn set_geojson_data(&mut self, id: &str, data: &FeatureCollection) -> Result<(), MapError>;

    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), MapError>;

    fn set_paint_property(&mut self, layer_id: &str, name: &str, value: &Value) -> Result<(), MapError>;

    fn set_layout_property(&mut self, layer_id: &str, name: &str, value: &Value) -> Result<(), MapError>;

    fn set_feature_state(&mut self, source_id: &str, feature_id: &str, state: &FeatureState) -> Result<(), MapError>;

    fn fly_to(&mut self, options: &FlyToOptions) -> Result<(), MapError>;

    fn fit_bounds(&mut self, bounds: &LngLatBounds, options: &FitBoundsOptions) -> Result<(), MapError>;

    fn set_cursor(&mut self, cursor: &str) -> Result<(), MapError>;

    fn subscribe(&mut self, kind: PointerEventKind, layer_id: &str, handler: PointerHandler) -> Result<Self::Subscription, MapError>;

    fn is_style_loaded(&self) -> bool;

    /// Destroy the renderer instance
    fn remove(self);
}

/// Errors raised at the renderer boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("map is not ready")]
    NotReady,
    #[error("map style is not loaded yet")]
    StyleNotLoaded,
    #[error("no renderer instance (not mounted or already torn down)")]
    NoRenderer,
    #[error("map container element not found")]
    MissingContainer,
    #[error("renderer error: {0}")]
    Renderer(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::Serialization(err.to_string())
    }
}

/// Partial feature-state update; `None` fields are left untouched by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

impl FeatureState {
    pub fn hover(value: bool) -> Self {
        Self { hover: Some(value), ..Self::default() }
    }

    pub fn selected(value: bool) -> Self {
        Self { selected: Some(value), ..Self::default() }
    }

    /// Merge `update` on top of `self` the way the renderer's feature-state store does
    pub fn merged(self, update: FeatureState) -> Self {
        Self {
            hover: update.hover.or(self.hover),
            selected: update.selected.or(self.selected),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyToOptions {
    pub center: LngLat,
    pub zoom: f64,
    pub duration: u32,
    pub essential: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitBoundsOptions {
    pub padding: u32,
    pub max_zoom: f64,
    pub duration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PointerEventKind {
    Move,
    Leave,
    Click,
}

impl PointerEventKind {
    /// Renderer event name
    pub fn as_str(&self) -> &'static str {
        match self {
            PointerEventKind::Move => "mousemove",
            PointerEventKind::Leave => "mouseleave",
            PointerEventKind::Click => "click",
        }
    }
}

/// Queryable properties carried by every rendered marker feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerProperties {
    pub id: String,
    pub name: String,
    pub viability_score: u8,
}

/// Pointer event over a layer, with the top-most feature under the pointer (if any)
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub point: ScreenPoint,
    pub feature: Option<MarkerProperties>,
}

pub type PointerHandler = Box<dyn FnMut(PointerEvent)>;
