//! In-memory renderer that records every call, used by the unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

use crate::models::LngLatBounds;
use super::geojson::FeatureCollection;
use super::style::LayerSpec;
use super::traits::*;

#[derive(Debug, Clone, PartialEq)]
pub enum CameraMove {
    FlyTo(FlyToOptions),
    FitBounds(LngLatBounds, FitBoundsOptions),
}

type SharedHandler = Rc<RefCell<PointerHandler>>;

pub struct Recording {
    pub raster_sources: Vec<String>,
    pub sources: BTreeMap<String, FeatureCollection>,
    pub promote_ids: BTreeMap<String, String>,
    pub layers: Vec<LayerSpec>,
    pub paint: BTreeMap<(String, String), Value>,
    pub layout: BTreeMap<(String, String), Value>,
    pub feature_states: BTreeMap<(String, String), FeatureState>,
    pub camera: Vec<CameraMove>,
    pub cursor: String,
    pub data_pushes: usize,
    pub style_loaded: bool,
    /// Every mutator fails with `StyleNotLoaded` while set
    pub fail_mutations: bool,
    pub removed: bool,
    handlers: BTreeMap<u64, (PointerEventKind, String, SharedHandler)>,
    next_handler: u64,
}

impl Default for Recording {
    fn default() -> Self {
        Self {
            raster_sources: Vec::new(),
            sources: BTreeMap::new(),
            promote_ids: BTreeMap::new(),
            layers: Vec::new(),
            paint: BTreeMap::new(),
            layout: BTreeMap::new(),
            feature_states: BTreeMap::new(),
            camera: Vec::new(),
            cursor: String::new(),
            data_pushes: 0,
            style_loaded: true,
            fail_mutations: false,
            removed: false,
            handlers: BTreeMap::new(),
            next_handler: 0,
        }
    }
}

impl Recording {
    fn check(&self) -> Result<(), MapError> {
        if self.removed {
            return Err(MapError::Renderer("map has been removed".to_string()));
        }
        if self.fail_mutations {
            return Err(MapError::StyleNotLoaded);
        }
        Ok(())
    }

    fn ids_with(&self, flag: impl Fn(&FeatureState) -> bool) -> Vec<String> {
        self.feature_states
            .iter()
            .filter(|(_, state)| flag(state))
            .map(|((_, id), _)| id.clone())
            .collect()
    }

    pub fn hovered(&self) -> Vec<String> {
        self.ids_with(|s| s.hover == Some(true))
    }

    pub fn selected(&self) -> Vec<String> {
        self.ids_with(|s| s.selected == Some(true))
    }

    pub fn state_of(&self, source: &str, id: &str) -> FeatureState {
        self.feature_states
            .get(&(source.to_string(), id.to_string()))
            .copied()
            .unwrap_or_default()
    }

    pub fn fly_tos(&self) -> Vec<FlyToOptions> {
        self.camera
            .iter()
            .filter_map(|m| match m {
                CameraMove::FlyTo(options) => Some(*options),
                CameraMove::FitBounds(..) => None,
            })
            .collect()
    }

    pub fn fit_bounds(&self) -> Vec<(LngLatBounds, FitBoundsOptions)> {
        self.camera
            .iter()
            .filter_map(|m| match m {
                CameraMove::FitBounds(bounds, options) => Some((*bounds, *options)),
                CameraMove::FlyTo(_) => None,
            })
            .collect()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

pub type SharedRecording = Rc<RefCell<Recording>>;

/// Dispatch a pointer event to every handler subscribed on `layer_id` for `kind`
pub fn fire(recording: &SharedRecording, kind: PointerEventKind, layer_id: &str, event: PointerEvent) {
    let handlers: Vec<SharedHandler> = recording
        .borrow()
        .handlers
        .values()
        .filter(|(k, layer, _)| *k == kind && layer == layer_id)
        .map(|(_, _, handler)| handler.clone())
        .collect();

    for handler in handlers {
        let mut handler = handler.borrow_mut();
        (*handler)(event.clone());
    }
}

pub struct RecordingRenderer {
    recording: SharedRecording,
}

impl RecordingRenderer {
    pub fn new() -> (Self, SharedRecording) {
        let recording = Rc::new(RefCell::new(Recording::default()));
        (Self { recording: recording.clone() }, recording)
    }
}

pub struct RecordingSubscription {
    id: u64,
    recording: SharedRecording,
}

impl Drop for RecordingSubscription {
    fn drop(&mut self) {
        self.recording.borrow_mut().handlers.remove(&self.id);
    }
}

impl MapRenderer for RecordingRenderer {
    type Subscription = RecordingSubscription;

    fn add_raster_source(&mut self, id: &str, _tiles_url: &str, _tile_size: u32, _attribution: &str) -> Result<(), MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        rec.raster_sources.push(id.to_string());
        Ok(())
    }

    fn add_geojson_source(&mut self, id: &str, data: &FeatureCollection, promote_id: &str) -> Result<(), MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        if rec.sources.contains_key(id) {
            return Err(MapError::Renderer(format!("source {} already exists", id)));
        }
        rec.sources.insert(id.to_string(), data.clone());
        rec.promote_ids.insert(id.to_string(), promote_id.to_string());
        Ok(())
    }

    fn set_geojson_data(&mut self, id: &str, data: &FeatureCollection) -> Result<(), MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        let source = rec
            .sources
            .get_mut(id)
            .ok_or_else(|| MapError::Renderer(format!("unknown source {}", id)))?;
        *source = data.clone();
        rec.data_pushes += 1;
        Ok(())
    }

    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        if rec.layers.iter().any(|l| l.id == layer.id) {
            return Err(MapError::Renderer(format!("layer {} already exists", layer.id)));
        }
        rec.layers.push(layer.clone());
        Ok(())
    }

    fn set_paint_property(&mut self, layer_id: &str, name: &str, value: &Value) -> Result<(), MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        rec.paint.insert((layer_id.to_string(), name.to_string()), value.clone());
        Ok(())
    }

    fn set_layout_property(&mut self, layer_id: &str, name: &str, value: &Value) -> Result<(), MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        rec.layout.insert((layer_id.to_string(), name.to_string()), value.clone());
        Ok(())
    }

    fn set_feature_state(&mut self, source_id: &str, feature_id: &str, state: &FeatureState) -> Result<(), MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        if !rec.sources.contains_key(source_id) {
            return Err(MapError::Renderer(format!("unknown source {}", source_id)));
        }
        let entry = rec
            .feature_states
            .entry((source_id.to_string(), feature_id.to_string()))
            .or_default();
        *entry = entry.merged(*state);
        Ok(())
    }

    fn fly_to(&mut self, options: &FlyToOptions) -> Result<(), MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        rec.camera.push(CameraMove::FlyTo(*options));
        Ok(())
    }

    fn fit_bounds(&mut self, bounds: &LngLatBounds, options: &FitBoundsOptions) -> Result<(), MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        rec.camera.push(CameraMove::FitBounds(*bounds, *options));
        Ok(())
    }

    fn set_cursor(&mut self, cursor: &str) -> Result<(), MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        rec.cursor = cursor.to_string();
        Ok(())
    }

    fn subscribe(&mut self, kind: PointerEventKind, layer_id: &str, handler: PointerHandler) -> Result<Self::Subscription, MapError> {
        let mut rec = self.recording.borrow_mut();
        rec.check()?;
        let id = rec.next_handler;
        rec.next_handler += 1;
        rec.handlers.insert(id, (kind, layer_id.to_string(), Rc::new(RefCell::new(handler))));
        Ok(RecordingSubscription { id, recording: self.recording.clone() })
    }

    fn is_style_loaded(&self) -> bool {
        let rec = self.recording.borrow();
        rec.style_loaded && !rec.removed
    }

    fn remove(self) {
        let mut rec = self.recording.borrow_mut();
        rec.removed = true;
        rec.style_loaded = false;
    }
}
