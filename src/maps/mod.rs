// Map layer: renderer boundary + controller, plus the platform binding

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod traits;
pub mod geojson;
pub mod style;
pub mod guard;
pub mod engine;
pub mod sync;
pub mod interaction;
pub mod selection;
pub mod controller;

#[cfg(test)]
pub mod testing;

pub use traits::{MapError, MapRenderer};
pub use controller::{MapController, SharedMapController};
pub use interaction::wire_interactions;
