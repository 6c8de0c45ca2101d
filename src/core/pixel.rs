//! Fixed-channel floating point pixels.
//!
//! Channel layout follows a simple rule:
//! - RGB pixels: `[red, green, blue, alpha, ...]`
//! - CMYK pixels: `[cyan, magenta, yellow, black, alpha, ...]`
//!
//! [`RgbChannel`] and [`CmykChannel`] index into that layout. Arithmetic acts
//! on every channel independently; alpha gets no special treatment.

use crate::core::matrix::Matrix;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Sub, SubAssign};

/// Named channels of an RGB(A) pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
    Alpha,
}

/// Named channels of a CMYK(A) pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmykChannel {
    Cyan,
    Magenta,
    Yellow,
    Black,
    Alpha,
}

/// A pixel with `N` `f32` channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel<const N: usize> {
    /// Raw channel values.
    pub channels: [f32; N],
}

/// Three-channel RGB pixel.
pub type RgbPixel = Pixel<3>;
/// Four-channel RGBA pixel.
pub type RgbaPixel = Pixel<4>;

/// Single-channel image.
pub type GrayMatrix = Matrix<f32>;
/// RGB image.
pub type RgbMatrix = Matrix<Pixel<3>>;
/// RGBA image.
pub type RgbaMatrix = Matrix<Pixel<4>>;
/// CMYK image.
pub type CmykMatrix = Matrix<Pixel<4>>;
/// CMYK image with alpha.
pub type CmykaMatrix = Matrix<Pixel<5>>;

impl<const N: usize> Pixel<N> {
    /// Create a pixel from channel values.
    pub const fn new(channels: [f32; N]) -> Self {
        Self { channels }
    }

    /// A pixel with every channel set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self {
            channels: [value; N],
        }
    }

    /// Number of channels.
    pub const fn channel_count(&self) -> usize {
        N
    }

    fn zip_with(mut self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        for (lhs, rhs) in self.channels.iter_mut().zip(rhs.channels) {
            *lhs = f(*lhs, rhs);
        }
        self
    }

    fn map_channels(mut self, f: impl Fn(f32) -> f32) -> Self {
        for channel in self.channels.iter_mut() {
            *channel = f(*channel);
        }
        self
    }
}

impl<const N: usize> Default for Pixel<N> {
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl<const N: usize> From<[f32; N]> for Pixel<N> {
    fn from(channels: [f32; N]) -> Self {
        Self::new(channels)
    }
}

impl<const N: usize> Index<usize> for Pixel<N> {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.channels[index]
    }
}

impl<const N: usize> IndexMut<usize> for Pixel<N> {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.channels[index]
    }
}

impl<const N: usize> Index<RgbChannel> for Pixel<N> {
    type Output = f32;

    fn index(&self, channel: RgbChannel) -> &f32 {
        &self.channels[channel as usize]
    }
}

impl<const N: usize> IndexMut<RgbChannel> for Pixel<N> {
    fn index_mut(&mut self, channel: RgbChannel) -> &mut f32 {
        &mut self.channels[channel as usize]
    }
}

impl<const N: usize> Index<CmykChannel> for Pixel<N> {
    type Output = f32;

    fn index(&self, channel: CmykChannel) -> &f32 {
        &self.channels[channel as usize]
    }
}

impl<const N: usize> IndexMut<CmykChannel> for Pixel<N> {
    fn index_mut(&mut self, channel: CmykChannel) -> &mut f32 {
        &mut self.channels[channel as usize]
    }
}

impl<const N: usize> Add for Pixel<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<const N: usize> AddAssign for Pixel<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> Sub for Pixel<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const N: usize> SubAssign for Pixel<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Channel-wise product.
impl<const N: usize> Mul for Pixel<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl<const N: usize> Mul<f32> for Pixel<N> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.map_channels(|a| a * rhs)
    }
}

/// Channel-wise quotient.
impl<const N: usize> Div for Pixel<N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a / b)
    }
}

impl<const N: usize> Div<f32> for Pixel<N> {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        self.map_channels(|a| a / rhs)
    }
}
