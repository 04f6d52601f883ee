//! Gradient-vector grid for a Perlin-style generator.
//!
//! Only the preparation step lives here: one random gradient per grid square.
//! Blending those gradients into elevations is not provided.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// Grid dimensions for a gradient-noise terrain measured in squares of `square_len` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientNoisePreparer {
    square_len: usize,
    width_in_squares: usize,
    length_in_squares: usize,
}

/// `width × length` gradient vectors, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGradientGrid")]
pub struct GradientGrid {
    width: usize,
    length: usize,
    vectors: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct RawGradientGrid {
    width: usize,
    length: usize,
    vectors: Vec<[f64; 2]>,
}

impl TryFrom<RawGradientGrid> for GradientGrid {
    type Error = TerrainError;

    fn try_from(raw: RawGradientGrid) -> Result<Self, Self::Error> {
        let invalid = TerrainError::InvalidDimension { width: raw.width, length: raw.length };
        if raw.width == 0 || raw.length == 0 {
            return Err(invalid);
        }
        match raw.width.checked_mul(raw.length) {
            Some(n) if n == raw.vectors.len() => Ok(Self {
                width: raw.width,
                length: raw.length,
                vectors: raw.vectors,
            }),
            _ => Err(invalid),
        }
    }
}

impl GradientNoisePreparer {
    /// All three sizes must be positive, and the covered terrain must fit in `usize`.
    pub fn new(square_len: usize, width_in_squares: usize, length_in_squares: usize) -> Result<Self, TerrainError> {
        let covered_width = square_len.checked_mul(width_in_squares);
        let covered_length = square_len.checked_mul(length_in_squares);
        let invalid = TerrainError::InvalidDimension {
            width: covered_width.unwrap_or(usize::MAX),
            length: covered_length.unwrap_or(usize::MAX),
        };

        if square_len == 0 || width_in_squares == 0 || length_in_squares == 0 {
            return Err(invalid);
        }
        if covered_width.is_none()
            || covered_length.is_none()
            || width_in_squares.checked_mul(length_in_squares).is_none()
        {
            return Err(invalid);
        }
        Ok(Self { square_len, width_in_squares, length_in_squares })
    }

    pub fn square_len(&self) -> usize {
        self.square_len
    }

    /// Cell dimensions `(width, length)` of the terrain this grid would cover.
    pub fn terrain_dims(&self) -> (usize, usize) {
        // Both products were checked in `new`.
        (self.square_len * self.width_in_squares, self.square_len * self.length_in_squares)
    }

    /// Draw one gradient per square, each of length exactly `magnitude`.
    ///
    /// `gx` is uniform in `[0, magnitude)` and `gy` completes the length, so
    /// both components are non-negative.
    pub fn init_gradients<R: Rng + ?Sized>(&self, magnitude: f64, rng: &mut R) -> Result<GradientGrid, TerrainError> {
        if !(magnitude > 0.0 && magnitude <= 1.0) {
            return Err(TerrainError::InvalidMagnitude(magnitude));
        }

        let n = self.width_in_squares * self.length_in_squares;
        let mut vectors = Vec::new();
        vectors.try_reserve_exact(n).map_err(|_| TerrainError::InvalidDimension {
            width: self.width_in_squares,
            length: self.length_in_squares,
        })?;
        for _ in 0..n {
            let gx = rng.gen::<f64>() * magnitude;
            let gy = (magnitude * magnitude - gx * gx).max(0.0).sqrt();
            vectors.push([gx, gy]);
        }

        Ok(GradientGrid {
            width: self.width_in_squares,
            length: self.length_in_squares,
            vectors,
        })
    }
}

impl GradientGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Row-major view of every gradient.
    pub fn vectors(&self) -> &[[f64; 2]] {
        &self.vectors
    }

    pub fn get(&self, x: usize, y: usize) -> Result<[f64; 2], TerrainError> {
        if x >= self.width || y >= self.length {
            return Err(TerrainError::OutOfBounds { x, y, width: self.width, length: self.length });
        }
        Ok(self.vectors[y * self.width + x])
    }
}
