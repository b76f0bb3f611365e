// ============================================================================
// CONFIG - Compile-time configuration (.env -> build.rs -> option_env!)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            map_config: MapConfig::default(),
        }
    }
}

/// Map camera, tiles and animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub tile_url: String,
    pub tile_attribution: String,
    pub tile_size: u32,
    /// Padding (px) around markers when fitting the viewport
    pub fit_padding: u32,
    /// Ceiling so a single marker does not over-zoom
    pub fit_max_zoom: f64,
    pub fit_duration_ms: u32,
    pub fly_to_zoom: f64,
    pub fly_to_duration_ms: u32,
    pub selection_delay_ms: u32,
    pub tooltip_offset_x: f64,
    pub tooltip_offset_y: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Geographic centre of Canada
            default_center_lat: 56.1304,
            default_center_lng: -106.3468,
            default_zoom: 3.0,
            min_zoom: 2.0,
            max_zoom: 16.0,
            tile_url: "https://basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "© OpenStreetMap contributors © CARTO".to_string(),
            tile_size: 256,
            fit_padding: 60,
            fit_max_zoom: 7.0,
            fit_duration_ms: 1000,
            fly_to_zoom: 8.0,
            fly_to_duration_ms: 1500,
            selection_delay_ms: 100,
            tooltip_offset_x: 14.0,
            tooltip_offset_y: -14.0,
        }
    }
}

fn env_or<T: std::str::FromStr>(value: Option<&'static str>, fallback: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(fallback)
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = MapConfig::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: env_or(option_env!("ENABLE_LOGGING"), true),
            map_config: MapConfig {
                default_center_lat: env_or(option_env!("DEFAULT_MAP_CENTER_LAT"), defaults.default_center_lat),
                default_center_lng: env_or(option_env!("DEFAULT_MAP_CENTER_LNG"), defaults.default_center_lng),
                default_zoom: env_or(option_env!("DEFAULT_MAP_ZOOM"), defaults.default_zoom),
                min_zoom: env_or(option_env!("MAP_MIN_ZOOM"), defaults.min_zoom),
                max_zoom: env_or(option_env!("MAP_MAX_ZOOM"), defaults.max_zoom),
                tile_url: option_env!("MAP_TILE_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.tile_url),
                tile_attribution: option_env!("MAP_TILE_ATTRIBUTION")
                    .map(str::to_string)
                    .unwrap_or(defaults.tile_attribution),
                tile_size: env_or(option_env!("MAP_TILE_SIZE"), defaults.tile_size),
                fit_padding: env_or(option_env!("MAP_FIT_PADDING"), defaults.fit_padding),
                fit_max_zoom: env_or(option_env!("MAP_FIT_MAX_ZOOM"), defaults.fit_max_zoom),
                fit_duration_ms: env_or(option_env!("MAP_FIT_DURATION_MS"), defaults.fit_duration_ms),
                fly_to_zoom: env_or(option_env!("MAP_FLY_TO_ZOOM"), defaults.fly_to_zoom),
                fly_to_duration_ms: env_or(option_env!("MAP_FLY_TO_DURATION_MS"), defaults.fly_to_duration_ms),
                selection_delay_ms: env_or(option_env!("MAP_SELECTION_DELAY_MS"), defaults.selection_delay_ms),
                tooltip_offset_x: env_or(option_env!("TOOLTIP_OFFSET_X"), defaults.tooltip_offset_x),
                tooltip_offset_y: env_or(option_env!("TOOLTIP_OFFSET_Y"), defaults.tooltip_offset_y),
            },
        }
    }

    /// Whether console logging is enabled
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
