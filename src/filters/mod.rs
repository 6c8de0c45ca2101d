//! Filter module.
//!
//! Contains the fast blur engine, its box-size derivation and configuration.

pub mod blur;
pub mod box_sizes;
pub mod config;

pub use blur::{fast_blur, horizontal_blur, FastBlur, DEFAULT_PASSES};
pub use box_sizes::box_sizes;
pub use config::BlurConfig;
