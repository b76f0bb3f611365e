// ============================================================================
// MAP ENGINE - Lifecycle of the single renderer instance
// ============================================================================
// uninitialized -> mounted (style loading) -> ready -> torn down
// All access to the renderer goes through `with_renderer`, never the raw handle.
// ============================================================================

use crate::config::MapConfig;
use crate::utils::constants::*;
use super::geojson::FeatureCollection;
use super::guard::guarded;
use super::style;
use super::traits::{MapError, MapRenderer};

pub struct MapEngine<R: MapRenderer> {
    config: MapConfig,
    renderer: Option<R>,
    initializing: bool,
    ready: bool,
    /// Bumped on every teardown; work stamped with an older epoch is stale
    epoch: u64,
}

impl<R: MapRenderer> MapEngine<R> {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            renderer: None,
            initializing: false,
            ready: false,
            epoch: 0,
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Create the renderer once. Returns `Ok(false)` when already mounted or mounting.
    pub fn mount<F>(&mut self, create: F) -> Result<bool, MapError>
    where
        F: FnOnce(&MapConfig, u64) -> Result<R, MapError>,
    {
        if self.initializing || self.renderer.is_some() {
            log::debug!("🗺️ [MAP] mount ignored, renderer already initializing");
            return Ok(false);
        }

        self.initializing = true;
        match create(&self.config, self.epoch) {
            Ok(renderer) => {
                log::info!("🗺️ [MAP] Renderer created (epoch {}), waiting for style", self.epoch);
                self.renderer = Some(renderer);
                Ok(true)
            }
            Err(e) => {
                self.initializing = false;
                log::error!("❌ [MAP] Renderer creation failed: {}", e);
                Err(e)
            }
        }
    }

    /// Style-loaded signal: register sources and layers, then flip to ready.
    ///
    /// Ignored for a stale epoch, a torn-down engine or a second signal.
    pub fn on_style_loaded(&mut self, epoch: u64, category_color: &str) {
        if epoch != self.epoch {
            log::debug!("🗺️ [MAP] Ignoring load signal from epoch {} (current {})", epoch, self.epoch);
            return;
        }
        if self.ready {
            return;
        }

        let config = self.config.clone();
        let Some(renderer) = self.renderer.as_mut() else {
            log::debug!("🗺️ [MAP] Load signal after teardown, ignoring");
            return;
        };

        guarded("addSource(basemap)", || {
            renderer.add_raster_source(BASEMAP_SOURCE, &config.tile_url, config.tile_size, &config.tile_attribution)
        });
        guarded("addLayer(basemap)", || renderer.add_layer(&style::basemap_layer()));

        let empty = FeatureCollection::empty();
        for source in [MARKERS_SOURCE, HOT_ZONES_SOURCE] {
            guarded("addSource", || renderer.add_geojson_source(source, &empty, FEATURE_ID_PROPERTY));
        }
        for layer in style::marker_layers(category_color) {
            guarded("addLayer", || renderer.add_layer(&layer));
        }

        self.ready = true;
        log::info!("✅ [MAP] Style loaded, sources and layers registered");
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_mounted(&self) -> bool {
        self.renderer.is_some()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Ready and the renderer reports its style as loaded right now
    pub fn is_style_loaded(&self) -> bool {
        self.ready && self.renderer.as_ref().is_some_and(|r| r.is_style_loaded())
    }

    /// Guarded access to the renderer; `None` when not ready or when the call fails
    pub fn with_renderer<T, F>(&mut self, operation: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut R) -> Result<T, MapError>,
    {
        let ready = self.ready;
        let renderer = self.renderer.as_mut();
        guarded(operation, move || {
            let renderer = renderer.ok_or(MapError::NoRenderer)?;
            if !ready {
                return Err(MapError::NotReady);
            }
            f(renderer)
        })
    }

    /// Destroy the renderer and reset so a later mount starts fresh
    pub fn teardown(&mut self) {
        if let Some(renderer) = self.renderer.take() {
            renderer.remove();
            log::info!("🧹 [MAP] Renderer removed (epoch {})", self.epoch);
        }
        self.ready = false;
        self.initializing = false;
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::testing::RecordingRenderer;

    fn mounted() -> (MapEngine<RecordingRenderer>, crate::maps::testing::SharedRecording) {
        let (renderer, recording) = RecordingRenderer::new();
        let mut engine = MapEngine::new(MapConfig::default());
        assert_eq!(engine.mount(move |_, _| Ok(renderer)), Ok(true));
        (engine, recording)
    }

    #[test]
    fn second_mount_is_a_noop() {
        let (mut engine, _recording) = mounted();
        let mut called = false;
        let result = engine.mount(|_, _| {
            called = true;
            Ok(RecordingRenderer::new().0)
        });
        assert_eq!(result, Ok(false));
        assert!(!called);
    }

    #[test]
    fn failed_creation_releases_the_guard() {
        let mut engine: MapEngine<RecordingRenderer> = MapEngine::new(MapConfig::default());
        assert_eq!(engine.mount(|_, _| Err(MapError::MissingContainer)), Err(MapError::MissingContainer));
        assert_eq!(engine.mount(|_, _| Ok(RecordingRenderer::new().0)), Ok(true));
    }

    #[test]
    fn style_load_registers_sources_and_layers() {
        let (mut engine, recording) = mounted();
        assert!(!engine.is_ready());
        engine.on_style_loaded(0, "#123456");
        assert!(engine.is_ready());

        let rec = recording.borrow();
        assert_eq!(rec.raster_sources, vec![BASEMAP_SOURCE.to_string()]);
        assert!(rec.sources.contains_key(MARKERS_SOURCE));
        assert!(rec.sources.contains_key(HOT_ZONES_SOURCE));
        assert_eq!(rec.promote_ids.get(MARKERS_SOURCE).map(String::as_str), Some(FEATURE_ID_PROPERTY));
        let layer_ids: Vec<_> = rec.layers.iter().map(|l| l.id).collect();
        assert_eq!(
            layer_ids,
            vec![
                BASEMAP_LAYER,
                HOT_ZONE_GLOW_LAYER,
                HOT_ZONE_INNER_LAYER,
                MARKER_GLOW_LAYER,
                MARKER_CIRCLE_LAYER,
                MARKER_HOT_BADGE_LAYER
            ]
        );
    }

    #[test]
    fn repeated_load_signal_does_not_duplicate_layers() {
        let (mut engine, recording) = mounted();
        engine.on_style_loaded(0, "#123456");
        engine.on_style_loaded(0, "#123456");
        assert_eq!(recording.borrow().layers.len(), 6);
    }

    #[test]
    fn calls_before_ready_are_skipped() {
        let (mut engine, recording) = mounted();
        let result = engine.with_renderer("setCursor", |r| r.set_cursor("pointer"));
        assert_eq!(result, None);
        assert_eq!(recording.borrow().cursor, "");
    }

    #[test]
    fn renderer_errors_are_swallowed() {
        let (mut engine, recording) = mounted();
        engine.on_style_loaded(0, "#123456");
        recording.borrow_mut().fail_mutations = true;
        assert_eq!(engine.with_renderer("setCursor", |r| r.set_cursor("pointer")), None);
    }

    #[test]
    fn teardown_allows_remount_and_ignores_stale_load() {
        let (mut engine, recording) = mounted();
        engine.on_style_loaded(0, "#123456");
        engine.teardown();

        assert!(recording.borrow().removed);
        assert!(!engine.is_ready());
        assert!(!engine.is_mounted());
        assert_eq!(engine.epoch(), 1);

        let (renderer, second) = RecordingRenderer::new();
        assert_eq!(engine.mount(move |_, _| Ok(renderer)), Ok(true));
        engine.on_style_loaded(0, "#123456");
        assert!(!engine.is_ready());
        assert!(second.borrow().layers.is_empty());

        engine.on_style_loaded(1, "#123456");
        assert!(engine.is_ready());
    }

    #[test]
    fn load_after_teardown_is_ignored() {
        let (mut engine, _recording) = mounted();
        engine.teardown();
        engine.on_style_loaded(1, "#123456");
        assert!(!engine.is_ready());
    }
}
