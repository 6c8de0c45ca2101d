//! Core types and traits for Spice.
//!
//! This module contains the containers the filters operate on:
//! - Generic row-major matrices with overscan-aware access
//! - Fixed-channel floating point pixels
//! - The numeric trait blurrable elements implement
//! - Conversions to and from `image` buffers
//! - Error types

pub mod convert;
pub mod error;
pub mod matrix;
pub mod pixel;
pub mod sample;

// Re-export commonly used types
pub use error::{BlurError, ConfigError, MatrixError, SpiceError};
pub use matrix::{Matrix, Overscan};
pub use pixel::{CmykChannel, GrayMatrix, Pixel, RgbChannel, RgbMatrix, RgbaMatrix};
pub use sample::Sample;
