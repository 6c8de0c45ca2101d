//! Fast Gaussian blur approximation built from repeated box blurs.
//!
//! A single sliding-window routine blurs rows. Running it `passes` times,
//! transposing, running it `passes` more times and transposing back gives a
//! separable two-dimensional blur. Every pass reads its input with
//! [`Overscan::Repeat`], so edges are extended rather than darkened.

use crate::core::error::{BlurError, BlurResult};
use crate::core::matrix::{Matrix, Overscan};
use crate::core::sample::Sample;
use crate::filters::box_sizes::box_sizes;
use crate::filters::config::BlurConfig;
use rayon::prelude::*;

/// Number of box passes per axis when none is given.
pub const DEFAULT_PASSES: u32 = 3;

/// Blur `source` with an approximated Gaussian of standard deviation `radius`.
///
/// Runs `passes` box blurs per axis on the rayon pool and returns a new
/// matrix of the same dimensions; `source` is left untouched.
///
/// # Errors
///
/// - [`BlurError::DegenerateInput`] if the matrix is empty or `passes` is 0.
/// - [`BlurError::InvalidRadius`] if `radius` is not positive and finite.
pub fn fast_blur<T: Sample>(source: &Matrix<T>, radius: f32, passes: u32) -> BlurResult<Matrix<T>> {
    FastBlur::new(BlurConfig::new(radius, passes)).apply(source)
}

/// One horizontal box-blur pass.
///
/// `radius` is rounded to whole pixels and the window spans `2 * radius + 1`
/// samples. A radius that rounds below 1 leaves the matrix unchanged. Each
/// row keeps its own running accumulator, so rows can be blurred on separate
/// threads when `parallel` is set.
pub fn horizontal_blur<T: Sample>(source: &Matrix<T>, radius: f32, parallel: bool) -> Matrix<T> {
    let radius = radius.round();
    if radius.is_nan() || radius < 1.0 || source.is_empty() {
        log::trace!("Identity pass for radius {}", radius);
        return source.clone();
    }

    let r = radius as isize;
    let diameter = radius + radius + 1.0;
    let width = source.width();

    let mut output = Matrix::new(width, source.height());
    let rows = output.as_mut_slice();
    if parallel {
        rows.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| blur_row(source, y as isize, row, r, diameter));
    } else {
        rows.chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| blur_row(source, y as isize, row, r, diameter));
    }
    output
}

/// Sliding-window average of row `y` of `source` into `row`.
fn blur_row<T: Sample>(source: &Matrix<T>, y: isize, row: &mut [T], r: isize, diameter: f32) {
    let sample = |x: isize| *source.clamped(x, y);

    let mut accumulator = T::default();
    for offset in -r..=r {
        accumulator = accumulator + sample(offset);
    }
    accumulator = accumulator / diameter;
    row[0] = accumulator;

    for x in 1..row.len() as isize {
        accumulator = accumulator - sample(x - r - 1) / diameter + sample(x + r) / diameter;
        row[x as usize] = accumulator;
    }
}

/// Configured fast blur.
///
/// # Example
///
/// ```rust
/// use spice::prelude::*;
///
/// let source = Matrix::from_fn(8, 8, |x, _| if x < 4 { 0.0f32 } else { 1.0 });
/// let blurred = FastBlur::new(BlurConfig::default().with_radius(1.5))
///     .apply(&source)
///     .unwrap();
/// assert_eq!(blurred.dimensions(), source.dimensions());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FastBlur {
    config: BlurConfig,
}

impl FastBlur {
    /// Create a blur filter from a configuration.
    pub fn new(config: BlurConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BlurConfig {
        &self.config
    }

    /// The per-pass radii this filter applies along each axis.
    pub fn box_sizes(&self) -> Vec<f32> {
        box_sizes(self.config.radius, self.config.passes)
    }

    /// Blur `source` into a new matrix.
    pub fn apply<T: Sample>(&self, source: &Matrix<T>) -> BlurResult<Matrix<T>> {
        let BlurConfig {
            radius,
            passes,
            parallel,
        } = self.config;

        if source.is_empty() || passes == 0 {
            return Err(BlurError::DegenerateInput {
                width: source.width(),
                height: source.height(),
                passes,
            });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BlurError::InvalidRadius(radius));
        }

        let radii = self.box_sizes();
        log::debug!(
            "Blurring {}x{} matrix with radius {} using box sizes {:?}",
            source.width(),
            source.height(),
            radius,
            radii
        );

        let mut blurred = horizontal_blur(source, radii[0], parallel);
        for &r in &radii[1..] {
            blurred = horizontal_blur(&blurred, r, parallel);
        }

        // vertical passes are horizontal passes over the transpose
        blurred = blurred.transpose();
        for &r in &radii {
            blurred = horizontal_blur(&blurred, r, parallel);
        }

        Ok(blurred.transpose())
    }

    /// Replace `target` with its blurred copy.
    pub fn apply_in_place<T: Sample>(&self, target: &mut Matrix<T>) -> BlurResult<()> {
        *target = self.apply(target)?;
        Ok(())
    }
}

impl<T: Sample> Matrix<T> {
    /// Shorthand for [`fast_blur`].
    pub fn fast_blur(&self, radius: f32, passes: u32) -> BlurResult<Matrix<T>> {
        fast_blur(self, radius, passes)
    }

    /// Value at `(x, y)` with clamp-to-edge overscan.
    pub fn sample_repeat(&self, x: isize, y: isize) -> Option<T> {
        self.at(x, y, Overscan::Repeat).ok().copied()
    }
}
