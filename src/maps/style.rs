// ============================================================================
// STYLE - Layer descriptors and paint expressions
// ============================================================================

use serde::Serialize;
use serde_json::{json, Value};

use crate::utils::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Raster,
    Circle,
}

/// Layer descriptor in the renderer's style-spec shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSpec {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    pub paint: Value,
    pub layout: Value,
}

/// Colour branch: hot sites always use HOT_COLOR, the rest follow the module accent
pub fn marker_color_expression(category_color: &str) -> Value {
    json!([
        "case",
        [">=", ["get", "viabilityScore"], HOT_THRESHOLD],
        HOT_COLOR,
        category_color
    ])
}

/// `visibility` layout value
pub fn visibility_value(visible: bool) -> Value {
    Value::from(if visible { "visible" } else { "none" })
}

pub fn basemap_layer() -> LayerSpec {
    LayerSpec {
        id: BASEMAP_LAYER,
        kind: LayerKind::Raster,
        source: BASEMAP_SOURCE,
        filter: None,
        paint: json!({}),
        layout: json!({}),
    }
}

/// Site layers bottom to top: hot-zone glow, hot-zone inner, marker glow, marker circle, hot badge
pub fn marker_layers(category_color: &str) -> Vec<LayerSpec> {
    let color = marker_color_expression(category_color);

    vec![
        LayerSpec {
            id: HOT_ZONE_GLOW_LAYER,
            kind: LayerKind::Circle,
            source: HOT_ZONES_SOURCE,
            filter: None,
            paint: json!({
                "circle-radius": ["interpolate", ["linear"], ["zoom"], 3, 28, 8, 70],
                "circle-color": HOT_COLOR,
                "circle-opacity": 0.12,
                "circle-blur": 1.0
            }),
            layout: json!({ "visibility": visibility_value(true) }),
        },
        LayerSpec {
            id: HOT_ZONE_INNER_LAYER,
            kind: LayerKind::Circle,
            source: HOT_ZONES_SOURCE,
            filter: None,
            paint: json!({
                "circle-radius": ["interpolate", ["linear"], ["zoom"], 3, 14, 8, 34],
                "circle-color": HOT_COLOR,
                "circle-opacity": 0.22,
                "circle-blur": 0.6
            }),
            layout: json!({ "visibility": visibility_value(true) }),
        },
        LayerSpec {
            id: MARKER_GLOW_LAYER,
            kind: LayerKind::Circle,
            source: MARKERS_SOURCE,
            filter: None,
            paint: json!({
                "circle-radius": [
                    "case",
                    ["boolean", ["feature-state", "selected"], false], 22,
                    ["boolean", ["feature-state", "hover"], false], 18,
                    13
                ],
                "circle-color": color.clone(),
                "circle-opacity": 0.3,
                "circle-blur": 0.8
            }),
            layout: json!({}),
        },
        LayerSpec {
            id: MARKER_CIRCLE_LAYER,
            kind: LayerKind::Circle,
            source: MARKERS_SOURCE,
            filter: None,
            paint: json!({
                "circle-radius": [
                    "case",
                    ["boolean", ["feature-state", "selected"], false], 11,
                    ["boolean", ["feature-state", "hover"], false], 9,
                    7
                ],
                "circle-color": color,
                "circle-stroke-color": "#ffffff",
                "circle-stroke-width": [
                    "case",
                    ["boolean", ["feature-state", "selected"], false], 3,
                    ["boolean", ["feature-state", "hover"], false], 2,
                    1
                ]
            }),
            layout: json!({}),
        },
        LayerSpec {
            id: MARKER_HOT_BADGE_LAYER,
            kind: LayerKind::Circle,
            source: MARKERS_SOURCE,
            filter: Some(json!([">=", ["get", "viabilityScore"], HOT_THRESHOLD])),
            paint: json!({
                "circle-radius": 3,
                "circle-color": "#ffffff",
                "circle-stroke-color": HOT_COLOR,
                "circle-stroke-width": 1.5,
                "circle-translate": [8, -8]
            }),
            layout: json!({}),
        },
    ]
}

/// Layers whose `circle-color` follows the module accent
pub const ACCENT_LAYERS: [&str; 2] = [MARKER_GLOW_LAYER, MARKER_CIRCLE_LAYER];

/// Layers toggled by the hot-zone switch
pub const HOT_ZONE_LAYERS: [&str; 2] = [HOT_ZONE_GLOW_LAYER, HOT_ZONE_INNER_LAYER];
