use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// A 2D grid of elevations in `[0, 1]`, addressed by `(x, y)` and stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTerrain")]
pub struct Terrain {
    width: usize,
    length: usize,
    /// Row-major elevations, index `y * width + x`.
    data: Vec<f32>,
}

/// Unvalidated wire shape; every deserialised `Terrain` passes through `TryFrom`.
#[derive(Deserialize)]
struct RawTerrain {
    width: usize,
    length: usize,
    data: Vec<f32>,
}

impl TryFrom<RawTerrain> for Terrain {
    type Error = TerrainError;

    fn try_from(raw: RawTerrain) -> Result<Self, Self::Error> {
        let mut terrain = Terrain::new(raw.width, raw.length)?;
        if raw.data.len() != terrain.data.len() {
            return Err(TerrainError::InvalidDimension { width: raw.width, length: raw.length });
        }
        terrain.data = raw.data;
        Ok(terrain)
    }
}

impl Terrain {
    /// Create a zero-filled terrain.
    ///
    /// Fails with `InvalidDimension` for a zero side, or for a cell count that
    /// overflows `usize` or cannot be allocated.
    pub fn new(width: usize, length: usize) -> Result<Self, TerrainError> {
        let invalid = TerrainError::InvalidDimension { width, length };
        if width == 0 || length == 0 {
            return Err(invalid);
        }
        let cells = width.checked_mul(length).ok_or(invalid)?;

        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|_| TerrainError::InvalidDimension { width, length })?;
        data.resize(cells, 0.0);
        Ok(Self { width, length, data })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn get(&self, x: usize, y: usize) -> Result<f32, TerrainError> {
        self.index(x, y).map(|i| self.data[i])
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) -> Result<(), TerrainError> {
        let i = self.index(x, y)?;
        self.data[i] = value;
        Ok(())
    }

    /// Row-major view of every elevation.
    pub fn values(&self) -> &[f32] {
        &self.data
    }

    /// Iterate rows from `y = 0` upwards; each row is indexed by `x`.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.width)
    }

    pub fn min_elevation(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_elevation(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }

    /// True when the grid is square with side `2^n + 1`, the only shape
    /// diamond-square can subdivide down to unit squares.
    pub fn is_square_power_of_two_plus_one(&self) -> bool {
        self.width == self.length && (self.width - 1).is_power_of_two()
    }

    /// Unchecked read for the subdivision loops, whose coordinates are in
    /// bounds by construction.
    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> f32 {
        debug_assert!(x < self.width && y < self.length);
        self.data[y * self.width + x]
    }

    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, value: f32) {
        debug_assert!(x < self.width && y < self.length);
        self.data[y * self.width + x] = value;
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, TerrainError> {
        if x >= self.width || y >= self.length {
            return Err(TerrainError::OutOfBounds { x, y, width: self.width, length: self.length });
        }
        Ok(y * self.width + x)
    }
}
