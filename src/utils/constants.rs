/// Viability score at or above which a site is a "hot opportunity".
/// Shared by marker styling, hot-zone geometry and tooltip classification.
pub const HOT_THRESHOLD: u8 = 80;

/// Accent used for hot markers regardless of the active module
pub const HOT_COLOR: &str = "#ff6b35";

/// DOM id of the map container
pub const MAP_CONTAINER_ID: &str = "mission-map";

// Renderer source ids
pub const BASEMAP_SOURCE: &str = "basemap";
pub const MARKERS_SOURCE: &str = "markers";
pub const HOT_ZONES_SOURCE: &str = "hot-zones";

/// Property promoted to the renderer feature id (feature-state key)
pub const FEATURE_ID_PROPERTY: &str = "id";

// Renderer layer ids, bottom to top
pub const BASEMAP_LAYER: &str = "basemap-tiles";
pub const HOT_ZONE_GLOW_LAYER: &str = "hot-zone-glow";
pub const HOT_ZONE_INNER_LAYER: &str = "hot-zone-inner";
pub const MARKER_GLOW_LAYER: &str = "marker-glow";
pub const MARKER_CIRCLE_LAYER: &str = "marker-circle";
pub const MARKER_HOT_BADGE_LAYER: &str = "marker-hot-badge";
