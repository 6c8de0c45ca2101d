//! Dense two-dimensional matrix storage.
//!
//! [`Matrix`] stores elements in row-major order (`index = y * width + x`).
//! Element reads take an explicit [`Overscan`] mode that decides what happens
//! when a coordinate falls outside the matrix.

use crate::core::error::{MatrixError, MatrixResult};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Policy for reading coordinates outside the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overscan {
    /// Reserved. No remapping is defined, so out-of-range reads are rejected.
    None,
    /// Out-of-range reads fail with [`MatrixError::OutOfBounds`].
    #[default]
    Error,
    /// Each coordinate is clamped to the nearest edge.
    Repeat,
}

/// Generic row-major matrix.
///
/// `T` is usually a scalar (`f32`) or a [`Pixel`](crate::core::pixel::Pixel).
/// `T::default()` is treated as the zero value.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Matrix<T> {
    /// Create a matrix filled with `T::default()`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix with every element set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Returns a transposed copy: element `(x, y)` moves to `(y, x)`.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for x in 0..self.width {
            for y in 0..self.height {
                data.push(self.data[y * self.width + x].clone());
            }
        }

        Self {
            width: self.height,
            height: self.width,
            data,
        }
    }
}

impl<T> Matrix<T> {
    /// Wrap existing row-major data.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> MatrixResult<Self> {
        if data.len() != width * height {
            return Err(MatrixError::DataLength {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Build a matrix by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read an element, resolving out-of-range coordinates with `overscan`.
    pub fn at(&self, x: isize, y: isize, overscan: Overscan) -> MatrixResult<&T> {
        let index = self.resolve(x, y, overscan)?;
        Ok(&self.data[index])
    }

    /// Mutable counterpart of [`Matrix::at`].
    ///
    /// With [`Overscan::Repeat`] the returned reference points at the edge
    /// element the coordinate was clamped to.
    pub fn at_mut(&mut self, x: isize, y: isize, overscan: Overscan) -> MatrixResult<&mut T> {
        let index = self.resolve(x, y, overscan)?;
        Ok(&mut self.data[index])
    }

    /// Bounds-checked read without overscan.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.data.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Overwrite the element at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> MatrixResult<()> {
        *self.at_mut(x as isize, y as isize, Overscan::Error)? = value;
        Ok(())
    }

    /// Clamp-to-edge read. Callers guarantee the matrix is non-empty.
    #[inline]
    pub(crate) fn clamped(&self, x: isize, y: isize) -> &T {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        &self.data[y * self.width + x]
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.data[start..start + self.width])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.data.chunks(self.width.max(1))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` to every element, producing a matrix of the same shape.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }

    fn resolve(&self, x: isize, y: isize, overscan: Overscan) -> MatrixResult<usize> {
        let in_range =
            x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height;
        if in_range {
            return Ok(y as usize * self.width + x as usize);
        }

        match overscan {
            Overscan::Repeat if !self.is_empty() => {
                let x = x.clamp(0, self.width as isize - 1) as usize;
                let y = y.clamp(0, self.height as isize - 1) as usize;
                Ok(y * self.width + x)
            }
            _ => Err(MatrixError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }
}

impl<T: Clone + Default> Default for Matrix<T> {
    /// A 1x1 matrix holding the zero value.
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Unchecked-overscan indexing by `(x, y)`. Panics when out of range.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(
            x < self.width && y < self.height,
            "Cannot access {}x{} matrix at ({}, {})",
            self.width,
            self.height,
            x,
            y
        );
        &self.data[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        assert!(
            x < self.width && y < self.height,
            "Cannot access {}x{} matrix at ({}, {})",
            self.width,
            self.height,
            x,
            y
        );
        &mut self.data[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_default() {
        let m: Matrix<f32> = Matrix::default();
        assert_eq!(m.dimensions(), (1, 1));
        assert_eq!(m[(0, 0)], 0.0);
    }

    #[test]
    fn test_constructor_dimensions() {
        let m: Matrix<f32> = Matrix::new(2, 3);
        assert_eq!(m.width(), 2);
        assert_eq!(m.height(), 3);
        assert_eq!(m.len(), 6);
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).is_ok());

        let err = Matrix::from_vec(2, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DataLength {
                width: 2,
                height: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_row_major_layout() {
        let mut m: Matrix<i32> = Matrix::new(2, 2);
        m.as_mut_slice()[1] = 42;

        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m[(1, 0)], 42);
        assert_eq!(m[(0, 1)], 0);
        assert_eq!(m[(1, 1)], 0);

        m[(0, 1)] = 47;
        assert_eq!(m.as_slice()[2], 47);
    }

    #[test]
    fn test_at_in_range() {
        let m = Matrix::from_fn(3, 2, |x, y| (y * 3 + x) as i32);
        for overscan in [Overscan::None, Overscan::Error, Overscan::Repeat] {
            assert_eq!(*m.at(2, 1, overscan).unwrap(), 5);
        }
    }

    #[test]
    fn test_at_error_overscan() {
        let m: Matrix<i32> = Matrix::new(2, 2);
        let err = m.at(2, 0, Overscan::Error).unwrap_err();
        assert!(err.is_boundary());
        assert!(m.at(0, -1, Overscan::Error).is_err());
        assert!(m.at(-3, 5, Overscan::default()).is_err());
    }

    #[test]
    fn test_at_none_overscan_rejects_out_of_range() {
        let m: Matrix<i32> = Matrix::new(2, 2);
        assert!(m.at(5, 5, Overscan::None).unwrap_err().is_boundary());
    }

    #[test]
    fn test_at_repeat_clamps_each_axis() {
        let m = Matrix::from_fn(3, 2, |x, y| (y * 3 + x) as i32);

        assert_eq!(*m.at(-5, 0, Overscan::Repeat).unwrap(), 0);
        assert_eq!(*m.at(10, 0, Overscan::Repeat).unwrap(), 2);
        assert_eq!(*m.at(1, -1, Overscan::Repeat).unwrap(), 1);
        assert_eq!(*m.at(1, 7, Overscan::Repeat).unwrap(), 4);
        assert_eq!(*m.at(-1, 9, Overscan::Repeat).unwrap(), 3);
        assert_eq!(*m.at(9, 9, Overscan::Repeat).unwrap(), 5);
    }

    #[test]
    fn test_repeat_on_empty_matrix_fails() {
        let m: Matrix<f32> = Matrix::new(0, 3);
        assert!(m.is_empty());
        assert!(m.at(0, 0, Overscan::Repeat).is_err());
    }

    #[test]
    fn test_at_mut_repeat_writes_edge() {
        let mut m: Matrix<i32> = Matrix::new(2, 2);
        *m.at_mut(-4, 1, Overscan::Repeat).unwrap() = 9;
        assert_eq!(m[(0, 1)], 9);
    }

    #[test]
    fn test_set_and_get() {
        let mut m: Matrix<f32> = Matrix::new(2, 2);
        m.set(1, 1, 0.5).unwrap();
        assert_eq!(m.get(1, 1), Some(&0.5));
        assert_eq!(m.get(2, 1), None);
        assert!(m.set(2, 0, 1.0).is_err());
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let t = m.transpose();

        assert_eq!(t.dimensions(), (2, 3));
        assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(m[(x, y)], t[(y, x)]);
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_rows() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[i32]> = m.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
        assert_eq!(m.row(1), Some(&[3, 4][..]));
        assert_eq!(m.row(3), None);

        let empty: Matrix<i32> = Matrix::new(0, 0);
        assert_eq!(empty.rows().count(), 0);
    }

    #[test]
    fn test_map() {
        let m = Matrix::from_vec(2, 1, vec![1, 2]).unwrap();
        let doubled = m.map(|v| *v as f32 * 2.0);
        assert_eq!(doubled.as_slice(), &[2.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "Cannot access 2x2 matrix at (2, 0)")]
    fn test_index_out_of_range_panics() {
        let m: Matrix<i32> = Matrix::new(2, 2);
        let _ = m[(2, 0)];
    }

    #[test]
    fn test_overscan_serde() {
        assert_eq!(serde_json::to_string(&Overscan::Repeat).unwrap(), "\"repeat\"");
        let parsed: Overscan = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, Overscan::None);
        assert_eq!(Overscan::default(), Overscan::Error);
    }
}
