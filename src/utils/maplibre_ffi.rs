// ============================================================================
// MAPLIBRE FFI - Bindings to maplibre-gl (loaded from index.html)
// ============================================================================
// Raw imports only, no state. Mutators are `catch` so a JS exception comes
// back as Err(JsValue) instead of aborting the module.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(js_namespace = maplibregl)]
extern "C" {
    #[derive(Debug, Clone)]
    #[wasm_bindgen(js_name = Map)]
    pub type MaplibreMap;

    #[wasm_bindgen(constructor, catch, js_class = "Map")]
    pub fn new(options: &JsValue) -> Result<MaplibreMap, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addSource)]
    pub fn add_source(this: &MaplibreMap, id: &str, source: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getSource)]
    pub fn get_source(this: &MaplibreMap, id: &str) -> JsValue;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    pub fn add_layer(this: &MaplibreMap, layer: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = setPaintProperty)]
    pub fn set_paint_property(this: &MaplibreMap, layer_id: &str, name: &str, value: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = setLayoutProperty)]
    pub fn set_layout_property(this: &MaplibreMap, layer_id: &str, name: &str, value: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = setFeatureState)]
    pub fn set_feature_state(this: &MaplibreMap, feature: &JsValue, state: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = flyTo)]
    pub fn fly_to(this: &MaplibreMap, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = fitBounds)]
    pub fn fit_bounds(this: &MaplibreMap, bounds: &JsValue, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = isStyleLoaded)]
    pub fn is_style_loaded(this: &MaplibreMap) -> JsValue;

    #[wasm_bindgen(method, js_name = getCanvas)]
    pub fn get_canvas(this: &MaplibreMap) -> web_sys::HtmlElement;

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &MaplibreMap, control: &JsValue, position: &str);

    /// `map.on(type, layerId, listener)`
    #[wasm_bindgen(method, js_name = on)]
    pub fn on_layer(this: &MaplibreMap, event: &str, layer_id: &str, listener: &js_sys::Function);

    /// `map.off(type, layerId, listener)`
    #[wasm_bindgen(method, js_name = off)]
    pub fn off_layer(this: &MaplibreMap, event: &str, layer_id: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn once(this: &MaplibreMap, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, catch)]
    pub fn remove(this: &MaplibreMap) -> Result<(), JsValue>;

    #[derive(Debug, Clone)]
    #[wasm_bindgen(js_name = NavigationControl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_class = "NavigationControl")]
    pub fn new(options: &JsValue) -> NavigationControl;
}

/// Call `source.setData(data)`; errors when the source does not exist yet
pub fn set_source_data(map: &MaplibreMap, source_id: &str, data: &JsValue) -> Result<(), JsValue> {
    let source = map.get_source(source_id);
    if source.is_undefined() || source.is_null() {
        return Err(JsValue::from_str(&format!("source '{}' not found", source_id)));
    }
    let set_data: js_sys::Function = js_sys::Reflect::get(&source, &JsValue::from_str("setData"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("source has no setData"))?;
    set_data.call1(&source, data)?;
    Ok(())
}
