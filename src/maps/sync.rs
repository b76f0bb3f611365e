// ============================================================================
// MARKER SYNC - Full-replacement push of marker and hot-zone geometry
// ============================================================================

use crate::models::{LngLatBounds, Marker};
use crate::utils::constants::*;
use super::engine::MapEngine;
use super::geojson::{hot_zone_collection, marker_collection};
use super::style::{marker_color_expression, visibility_value, ACCENT_LAYERS, HOT_ZONE_LAYERS};
use super::traits::{FitBoundsOptions, MapRenderer};

/// Result of one synchronization pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    pub markers: usize,
    pub hot_zones: usize,
    pub camera_fitted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSynchronizer {
    category_color: String,
    hot_zones_visible: bool,
}

impl MarkerSynchronizer {
    pub fn new(category_color: &str) -> Self {
        Self {
            category_color: category_color.to_string(),
            hot_zones_visible: true,
        }
    }

    pub fn category_color(&self) -> &str {
        &self.category_color
    }

    pub fn hot_zones_visible(&self) -> bool {
        self.hot_zones_visible
    }

    /// Push the full marker list and its hot subset, restyle, then frame the markers.
    /// Returns `None` when the map is not ready or the geometry push failed.
    pub fn sync<R: MapRenderer>(
        &mut self,
        engine: &mut MapEngine<R>,
        markers: &[Marker],
        category_color: &str,
    ) -> Option<SyncReport> {
        if !engine.is_ready() {
            log::debug!("⏳ [SYNC] Map not ready, deferring {} markers", markers.len());
            return None;
        }

        let points = marker_collection(markers);
        let hot = hot_zone_collection(markers);
        log::info!("📍 [SYNC] Pushing {} markers ({} hot zones)", points.len(), hot.len());

        engine.with_renderer("setData(markers)", |r| r.set_geojson_data(MARKERS_SOURCE, &points))?;
        engine.with_renderer("setData(hot-zones)", |r| r.set_geojson_data(HOT_ZONES_SOURCE, &hot));

        self.apply_category_color(engine, category_color);

        let mut camera_fitted = false;
        if let Some(bounds) = LngLatBounds::from_markers(markers) {
            let config = engine.config();
            let options = FitBoundsOptions {
                padding: config.fit_padding,
                max_zoom: config.fit_max_zoom,
                duration: config.fit_duration_ms,
            };
            camera_fitted = engine
                .with_renderer("fitBounds", |r| r.fit_bounds(&bounds, &options))
                .is_some();
        }

        Some(SyncReport {
            markers: points.len(),
            hot_zones: hot.len(),
            camera_fitted,
        })
    }

    /// Restyle marker layers in place; hot markers keep HOT_COLOR
    pub fn apply_category_color<R: MapRenderer>(&mut self, engine: &mut MapEngine<R>, category_color: &str) {
        self.category_color = category_color.to_string();
        let expression = marker_color_expression(category_color);
        for layer in ACCENT_LAYERS {
            engine.with_renderer("setPaintProperty(circle-color)", |r| {
                r.set_paint_property(layer, "circle-color", &expression)
            });
        }
    }

    pub fn set_hot_zones_visible<R: MapRenderer>(&mut self, engine: &mut MapEngine<R>, visible: bool) {
        self.hot_zones_visible = visible;
        let value = visibility_value(visible);
        for layer in HOT_ZONE_LAYERS {
            engine.with_renderer("setLayoutProperty(visibility)", |r| {
                r.set_layout_property(layer, "visibility", &value)
            });
        }
        log::debug!("🔥 [SYNC] Hot zones {}", if visible { "shown" } else { "hidden" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::maps::testing::{RecordingRenderer, SharedRecording};
    use crate::models::LngLat;

    fn ready_engine() -> (MapEngine<RecordingRenderer>, SharedRecording) {
        let (renderer, recording) = RecordingRenderer::new();
        let mut engine = MapEngine::new(MapConfig::default());
        let _ = engine.mount(move |_, _| Ok(renderer));
        engine.on_style_loaded(0, "#123456");
        (engine, recording)
    }

    fn sample() -> Vec<Marker> {
        vec![
            Marker::new("a", "Ring of Fire", 52.75, -86.30, 85),
            Marker::new("b", "Thompson", 55.74, -97.86, 40),
            Marker::new("c", "Quest CCS", 53.78, -113.08, 80),
        ]
    }

    #[test]
    fn pushes_every_marker_and_exact_hot_subset() {
        let (mut engine, recording) = ready_engine();
        let mut sync = MarkerSynchronizer::new("#123456");

        let report = sync.sync(&mut engine, &sample(), "#123456");
        assert_eq!(report, Some(SyncReport { markers: 3, hot_zones: 2, camera_fitted: true }));

        let rec = recording.borrow();
        let markers: Vec<_> = rec.sources[MARKERS_SOURCE].ids().collect();
        assert_eq!(markers, vec!["a", "b", "c"]);
        let hot: Vec<_> = rec.sources[HOT_ZONES_SOURCE].ids().collect();
        assert_eq!(hot, vec!["a", "c"]);
        let b = &rec.sources[MARKERS_SOURCE].features[1].properties;
        assert_eq!((b.name.as_str(), b.viability_score), ("Thompson", 40));
    }

    #[test]
    fn syncing_twice_is_idempotent() {
        let (mut engine, recording) = ready_engine();
        let mut sync = MarkerSynchronizer::new("#123456");
        sync.sync(&mut engine, &sample(), "#123456");
        let first = recording.borrow().sources.clone();
        sync.sync(&mut engine, &sample(), "#123456");
        assert_eq!(recording.borrow().sources, first);
        assert_eq!(recording.borrow().sources[MARKERS_SOURCE].len(), 3);
    }

    #[test]
    fn empty_list_clears_sources_without_moving_camera() {
        let (mut engine, recording) = ready_engine();
        let mut sync = MarkerSynchronizer::new("#123456");
        sync.sync(&mut engine, &sample(), "#123456");

        let report = sync.sync(&mut engine, &[], "#123456");
        assert_eq!(report, Some(SyncReport { markers: 0, hot_zones: 0, camera_fitted: false }));
        let rec = recording.borrow();
        assert!(rec.sources[MARKERS_SOURCE].is_empty());
        assert!(rec.sources[HOT_ZONES_SOURCE].is_empty());
        assert_eq!(rec.fit_bounds().len(), 1);
    }

    #[test]
    fn fit_bounds_uses_padding_and_zoom_ceiling() {
        let (mut engine, recording) = ready_engine();
        let mut sync = MarkerSynchronizer::new("#123456");
        sync.sync(&mut engine, &sample()[..1], "#123456");

        let fits = recording.borrow().fit_bounds();
        let (bounds, options) = fits[0];
        assert_eq!(bounds.0, LngLat::new(-86.30, 52.75));
        assert_eq!(options, FitBoundsOptions { padding: 60, max_zoom: 7.0, duration: 1000 });
    }

    #[test]
    fn color_change_restyles_in_place() {
        let (mut engine, recording) = ready_engine();
        let mut sync = MarkerSynchronizer::new("#123456");
        sync.sync(&mut engine, &sample(), "#123456");
        let layers_before = recording.borrow().layers.len();

        sync.apply_category_color(&mut engine, "#abcdef");
        let rec = recording.borrow();
        assert_eq!(rec.layers.len(), layers_before);
        for layer in ACCENT_LAYERS {
            let paint = &rec.paint[&(layer.to_string(), "circle-color".to_string())];
            assert_eq!(paint[2], HOT_COLOR);
            assert_eq!(paint[3], "#abcdef");
        }
        assert_eq!(sync.category_color(), "#abcdef");
    }

    #[test]
    fn hot_zone_toggle_sets_visibility() {
        let (mut engine, recording) = ready_engine();
        let mut sync = MarkerSynchronizer::new("#123456");
        sync.set_hot_zones_visible(&mut engine, false);
        let rec = recording.borrow();
        for layer in HOT_ZONE_LAYERS {
            assert_eq!(rec.layout[&(layer.to_string(), "visibility".to_string())], "none");
        }
        assert!(!sync.hot_zones_visible());
    }

    #[test]
    fn not_ready_is_skipped() {
        let (renderer, recording) = RecordingRenderer::new();
        let mut engine = MapEngine::new(MapConfig::default());
        let _ = engine.mount(move |_, _| Ok(renderer));
        let mut sync = MarkerSynchronizer::new("#123456");
        assert_eq!(sync.sync(&mut engine, &sample(), "#123456"), None);
        assert_eq!(recording.borrow().data_pushes, 0);
    }

    #[test]
    fn renderer_failure_is_swallowed() {
        let (mut engine, recording) = ready_engine();
        recording.borrow_mut().fail_mutations = true;
        let mut sync = MarkerSynchronizer::new("#123456");
        assert_eq!(sync.sync(&mut engine, &sample(), "#123456"), None);
    }
}
