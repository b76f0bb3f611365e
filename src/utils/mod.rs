// Shared helpers

pub mod constants;
#[cfg(target_arch = "wasm32")]
pub mod maplibre_ffi;

pub use constants::*;
