pub mod app;
pub mod canada_map;
pub mod tooltip;

pub use app::App;
pub use canada_map::{CanadaMap, CanadaMapProps};
pub use tooltip::Tooltip;
