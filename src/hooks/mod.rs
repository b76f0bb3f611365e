pub mod use_canada_map;

pub use use_canada_map::{use_canada_map, UseCanadaMapHandle};
