use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::MapConfig;
use crate::models::{LngLat, LngLatBounds, ScreenPoint};
use crate::utils::maplibre_ffi::{self, MaplibreMap, NavigationControl};
use super::geojson::FeatureCollection;
use super::style::LayerSpec;
use super::traits::*;

impl From<JsValue> for MapError {
    fn from(err: JsValue) -> Self {
        MapError::Renderer(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

/// Plain JS objects (not `Map`s) so maplibre accepts them
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, MapError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MapError::Serialization(e.to_string()))
}

fn pointer_event(raw: &JsValue) -> PointerEvent {
    let point = js_sys::Reflect::get(raw, &JsValue::from_str("point"))
        .ok()
        .and_then(|p| serde_wasm_bindgen::from_value::<ScreenPoint>(p).ok())
        .unwrap_or_default();

    let feature = js_sys::Reflect::get(raw, &JsValue::from_str("features"))
        .ok()
        .and_then(|features| features.dyn_into::<js_sys::Array>().ok())
        .map(|features| features.get(0))
        .filter(|first| !first.is_undefined())
        .and_then(|first| js_sys::Reflect::get(&first, &JsValue::from_str("properties")).ok())
        .and_then(|props| serde_wasm_bindgen::from_value::<MarkerProperties>(props).ok());

    PointerEvent { point, feature }
}

/// Map renderer backed by MapLibre GL JS
pub struct MaplibreRenderer {
    map: MaplibreMap,
    _on_load: Closure<dyn FnMut()>,
}

impl MaplibreRenderer {
    /// Create the map in `container`; `on_load` fires once when the style is loaded
    pub fn create<F>(container: &web_sys::HtmlElement, config: &MapConfig, on_load: F) -> Result<Self, MapError>
    where
        F: FnMut() + 'static,
    {
        log::info!("🗺️ [MAP] Creating maplibre map...");

        let options = to_js(&json!({
            "style": { "version": 8, "sources": {}, "layers": [] },
            "center": LngLat::new(config.default_center_lng, config.default_center_lat),
            "zoom": config.default_zoom,
            "minZoom": config.min_zoom,
            "maxZoom": config.max_zoom,
        }))?;
        js_sys::Reflect::set(&options, &JsValue::from_str("container"), container)?;

        let map = MaplibreMap::new(&options)?;

        let control = NavigationControl::new(&to_js(&json!({ "showCompass": false }))?);
        map.add_control(&control, "top-right");

        let on_load = Closure::wrap(Box::new(on_load) as Box<dyn FnMut()>);
        map.once("load", on_load.as_ref().unchecked_ref());

        Ok(Self { map, _on_load: on_load })
    }
}

/// `map.on(event, layer, listener)` registration; `off` runs on drop
pub struct LayerSubscription {
    map: MaplibreMap,
    event: &'static str,
    layer_id: String,
    listener: Closure<dyn FnMut(JsValue)>,
}

impl Drop for LayerSubscription {
    fn drop(&mut self) {
        self.map
            .off_layer(self.event, &self.layer_id, self.listener.as_ref().unchecked_ref());
        log::debug!("🔌 [MAP] {} listener on {} removed", self.event, self.layer_id);
    }
}

impl MapRenderer for MaplibreRenderer {
    type Subscription = LayerSubscription;

    fn add_raster_source(&mut self, id: &str, tiles_url: &str, tile_size: u32, attribution: &str) -> Result<(), MapError> {
        let source = to_js(&json!({
            "type": "raster",
            "tiles": [tiles_url],
            "tileSize": tile_size,
            "attribution": attribution,
        }))?;
        Ok(self.map.add_source(id, &source)?)
    }

    fn add_geojson_source(&mut self, id: &str, data: &FeatureCollection, promote_id: &str) -> Result<(), MapError> {
        let source = to_js(&json!({
            "type": "geojson",
            "data": serde_json::to_value(data)?,
            "promoteId": promote_id,
        }))?;
        Ok(self.map.add_source(id, &source)?)
    }

    fn set_geojson_data(&mut self, id: &str, data: &FeatureCollection) -> Result<(), MapError> {
        let data = to_js(data)?;
        Ok(maplibre_ffi::set_source_data(&self.map, id, &data)?)
    }

    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), MapError> {
        Ok(self.map.add_layer(&to_js(layer)?)?)
    }

    fn set_paint_property(&mut self, layer_id: &str, name: &str, value: &Value) -> Result<(), MapError> {
        Ok(self.map.set_paint_property(layer_id, name, &to_js(value)?)?)
    }

    fn set_layout_property(&mut self, layer_id: &str, name: &str, value: &Value) -> Result<(), MapError> {
        Ok(self.map.set_layout_property(layer_id, name, &to_js(value)?)?)
    }

    fn set_feature_state(&mut self, source_id: &str, feature_id: &str, state: &FeatureState) -> Result<(), MapError> {
        let feature = to_js(&json!({ "source": source_id, "id": feature_id }))?;
        Ok(self.map.set_feature_state(&feature, &to_js(state)?)?)
    }

    fn fly_to(&mut self, options: &FlyToOptions) -> Result<(), MapError> {
        Ok(self.map.fly_to(&to_js(options)?)?)
    }

    fn fit_bounds(&mut self, bounds: &LngLatBounds, options: &FitBoundsOptions) -> Result<(), MapError> {
        Ok(self.map.fit_bounds(&to_js(bounds)?, &to_js(options)?)?)
    }

    fn set_cursor(&mut self, cursor: &str) -> Result<(), MapError> {
        Ok(self.map.get_canvas().style().set_property("cursor", cursor)?)
    }

    fn subscribe(&mut self, kind: PointerEventKind, layer_id: &str, handler: PointerHandler) -> Result<Self::Subscription, MapError> {
        let mut handler = handler;
        let listener = Closure::wrap(Box::new(move |raw: JsValue| {
            handler(pointer_event(&raw));
        }) as Box<dyn FnMut(JsValue)>);

        self.map
            .on_layer(kind.as_str(), layer_id, listener.as_ref().unchecked_ref());

        Ok(LayerSubscription {
            map: self.map.clone(),
            event: kind.as_str(),
            layer_id: layer_id.to_string(),
            listener,
        })
    }

    fn is_style_loaded(&self) -> bool {
        self.map.is_style_loaded().is_truthy()
    }

    fn remove(self) {
        if let Err(e) = self.map.remove() {
            log::warn!("⚠️ [MAP] map.remove() failed: {:?}", e);
        }
    }
}
