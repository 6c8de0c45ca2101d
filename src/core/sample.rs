//! The numeric contract for blurrable matrix elements.

use crate::core::pixel::Pixel;
use std::ops::{Add, Div, Sub};

/// An element the blur engine can average.
///
/// Requires addition, subtraction and division by an `f32` scalar, with
/// `Default` providing the zero value. `Send + Sync` lets rows be processed
/// on the rayon pool.
pub trait Sample:
    Copy + Default + Send + Sync + Add<Output = Self> + Sub<Output = Self> + Div<f32, Output = Self>
{
}

impl Sample for f32 {}

impl<const N: usize> Sample for Pixel<N> {}
