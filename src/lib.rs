//! # Spice - Pixel Matrices and Fast Blur
//!
//! Spice provides generic two-dimensional matrices of scalars or multi-channel
//! pixels, and a fast approximation of Gaussian blur built from repeated box
//! blurs.
//!
//! ## Features
//!
//! - **Generic containers**: [`Matrix<T>`](core::matrix::Matrix) works with any
//!   element implementing [`Sample`](core::sample::Sample), including `f32` and
//!   [`Pixel<N>`](core::pixel::Pixel)
//! - **Explicit overscan**: out-of-range reads either fail or clamp to the edge
//! - **Fast blur**: O(width) sliding-window passes, independent of radius
//! - **Parallel rows**: rows are blurred on the rayon thread pool
//! - **Configurable**: blur parameters load from TOML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use spice::prelude::*;
//!
//! // A 30x20 image that is black on the left and white on the right
//! let source = Matrix::from_fn(30, 20, |x, _| if x < 15 { 0.0f32 } else { 1.0 });
//!
//! // Blur with standard deviation 3 using three box passes per axis
//! let blurred = fast_blur(&source, 3.0, 3).unwrap();
//!
//! assert_eq!(blurred.dimensions(), (30, 20));
//! assert!(blurred[(15, 10)] > 0.5 && blurred[(15, 10)] < 0.6);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into two modules:
//!
//! - [`core`]: Matrix and pixel containers, the sample trait, error handling
//! - [`filters`]: Box-size derivation, the blur engine and its configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod filters;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use spice::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use crate::core::matrix::{Matrix, Overscan};
    pub use crate::core::pixel::{
        CmykChannel, CmykMatrix, CmykaMatrix, GrayMatrix, Pixel, RgbChannel, RgbMatrix,
        RgbPixel, RgbaMatrix, RgbaPixel,
    };
    pub use crate::core::sample::Sample;

    // Errors
    pub use crate::core::error::{
        BlurError, BlurResult, ConfigError, ConfigResult, MatrixError, MatrixResult, SpiceError,
        SpiceResult,
    };

    // Filters
    pub use crate::filters::blur::{fast_blur, horizontal_blur, FastBlur, DEFAULT_PASSES};
    pub use crate::filters::box_sizes::box_sizes;
    pub use crate::filters::config::BlurConfig;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
