pub mod marker;
pub mod geo;
pub mod tooltip;
pub mod mission_module;
pub mod demo;

pub use marker::{Marker, MarkerSummary, is_hot_score};
pub use geo::{LngLat, LngLatBounds, ScreenPoint};
pub use tooltip::TooltipState;
pub use mission_module::MissionModule;
