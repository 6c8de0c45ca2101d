//! Conversions between [`Matrix`] and in-memory `image` buffers.
//!
//! 8-bit channels map to `[0, 1]` floats (`value / 255`) and back (clamped,
//! scaled and rounded). `Rgb32FImage` channels are copied unchanged.
//! Decoding and encoding files is left to the `image` crate itself.

use crate::core::matrix::Matrix;
use crate::core::pixel::{GrayMatrix, Pixel, RgbMatrix, RgbaMatrix};
use image::{GrayImage, ImageBuffer, Luma, Rgb, Rgb32FImage, RgbImage, Rgba, RgbaImage};

#[inline]
fn unit_from_u8(value: u8) -> f32 {
    value as f32 / 255.0
}

#[inline]
fn u8_from_unit(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn collect<P, T>(image: &ImageBuffer<P, Vec<P::Subpixel>>, f: impl Fn(&P) -> T) -> Matrix<T>
where
    P: image::Pixel,
{
    let (width, height) = image.dimensions();
    Matrix::from_fn(width as usize, height as usize, |x, y| {
        f(image.get_pixel(x as u32, y as u32))
    })
}

impl GrayMatrix {
    /// Convert an 8-bit grayscale image.
    pub fn from_gray8(image: &GrayImage) -> Self {
        collect(image, |p| unit_from_u8(p.0[0]))
    }

    /// Convert back to an 8-bit grayscale image.
    pub fn to_gray8(&self) -> GrayImage {
        GrayImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Luma([u8_from_unit(self[(x as usize, y as usize)])])
        })
    }
}

impl RgbMatrix {
    /// Convert an 8-bit RGB image.
    pub fn from_rgb8(image: &RgbImage) -> Self {
        collect(image, |p| Pixel::new(p.0.map(unit_from_u8)))
    }

    /// Convert back to an 8-bit RGB image.
    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Rgb(self[(x as usize, y as usize)].channels.map(u8_from_unit))
        })
    }

    /// Convert a 32-bit float RGB image without rescaling.
    pub fn from_rgb32f(image: &Rgb32FImage) -> Self {
        collect(image, |p| Pixel::new(p.0))
    }

    /// Convert back to a 32-bit float RGB image.
    pub fn to_rgb32f(&self) -> Rgb32FImage {
        Rgb32FImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Rgb(self[(x as usize, y as usize)].channels)
        })
    }
}

impl RgbaMatrix {
    /// Convert an 8-bit RGBA image. Alpha becomes the fourth channel.
    pub fn from_rgba8(image: &RgbaImage) -> Self {
        collect(image, |p| Pixel::new(p.0.map(unit_from_u8)))
    }

    /// Convert back to an 8-bit RGBA image.
    pub fn to_rgba8(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Rgba(self[(x as usize, y as usize)].channels.map(u8_from_unit))
        })
    }
}

impl From<&GrayImage> for GrayMatrix {
    fn from(image: &GrayImage) -> Self {
        Self::from_gray8(image)
    }
}

impl From<&RgbImage> for RgbMatrix {
    fn from(image: &RgbImage) -> Self {
        Self::from_rgb8(image)
    }
}

impl From<&RgbaImage> for RgbaMatrix {
    fn from(image: &RgbaImage) -> Self {
        Self::from_rgba8(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_conversion() {
        let image = GrayImage::from_raw(2, 2, vec![0, 51, 255, 127]).unwrap();
        let matrix = GrayMatrix::from_gray8(&image);

        assert_eq!(matrix.dimensions(), (2, 2));
        assert_eq!(matrix[(0, 0)], 0.0);
        assert!((matrix[(1, 0)] - 0.2).abs() < 1e-6);
        assert_eq!(matrix[(0, 1)], 1.0);

        assert_eq!(matrix.to_gray8(), image);
    }

    #[test]
    fn test_gray_output_is_clamped() {
        let matrix = GrayMatrix::from_vec(3, 1, vec![-0.5, 0.5, 1.5]).unwrap();
        let image = matrix.to_gray8();
        assert_eq!(image.as_raw(), &vec![0, 128, 255]);
    }

    #[test]
    fn test_rgb_conversion_layout() {
        let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 100, y as u8 * 255, 0]));
        let matrix = RgbMatrix::from(&image);

        assert_eq!(matrix.dimensions(), (3, 2));
        assert_eq!(matrix[(0, 1)].channels, [0.0, 1.0, 0.0]);
        assert_eq!(matrix[(2, 0)].channels[1], 0.0);
        assert_eq!(matrix.to_rgb8(), image);
    }

    #[test]
    fn test_rgba_keeps_alpha() {
        let image = RgbaImage::from_pixel(2, 1, Rgba([255, 0, 0, 0]));
        let matrix = RgbaMatrix::from_rgba8(&image);
        assert_eq!(matrix[(1, 0)].channels, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(matrix.to_rgba8(), image);
    }

    #[test]
    fn test_rgb32f_is_copied_verbatim() {
        let image = Rgb32FImage::from_pixel(1, 2, Rgb([1.5, -0.25, 0.5]));
        let matrix = RgbMatrix::from_rgb32f(&image);
        assert_eq!(matrix[(0, 1)].channels, [1.5, -0.25, 0.5]);
        assert_eq!(matrix.to_rgb32f(), image);
    }
}
