//! Diamond-square midpoint displacement.
//!
//! Starting from four seeded corners, each level first sets the centre of every
//! square (mean of its four diagonal corners) and then the centre of every
//! diamond (mean of its orthogonal neighbours), adding a random offset scaled by
//! the amplitude function at that level's frequency. Square length halves per
//! level until it reaches 1, so frequency doubles per level.
//!
//! Edge diamonds have only three neighbours inside the grid; the missing one is
//! dropped from the mean rather than wrapped.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, trace};

use crate::amplitude::AmplitudeFunction;
use crate::error::TerrainError;
use crate::terrain::Terrain;

#[cfg(feature = "threading")]
use rayon::prelude::*;

/// Elevation given to the four corners before subdivision.
pub const CORNER_SEED: f32 = 0.5;

/// Largest accepted side exponent: a 16385×16385 grid (~1 GiB of `f32`).
pub const MAX_SIDE_EXPONENT: u32 = 14;

/// A noise source that produces a fresh square terrain of side `2^side_exponent + 1`.
pub trait TerrainGenerator {
    fn generate<R: Rng + ?Sized>(&self, side_exponent: u32, rng: &mut R) -> Result<Terrain, TerrainError>;
}

/// Diamond-square engine parameterised by its amplitude function.
#[derive(Debug, Clone)]
pub struct DiamondSquareGenerator<A> {
    amplitude: A,
}

impl<A: AmplitudeFunction> DiamondSquareGenerator<A> {
    pub fn new(amplitude: A) -> Self {
        Self { amplitude }
    }

    pub fn amplitude_function(&self) -> &A {
        &self.amplitude
    }

    /// Generate with a `StdRng` seeded from `seed`.
    pub fn generate_seeded(&self, side_exponent: u32, seed: u64) -> Result<Terrain, TerrainError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(side_exponent, &mut rng)
    }

    /// One terrain per seed, each from its own `StdRng`, in the order of `seeds`.
    ///
    /// Runs on the rayon pool when the `threading` feature is enabled.
    pub fn generate_many(&self, side_exponent: u32, seeds: &[u64]) -> Result<Vec<Terrain>, TerrainError> {
        side_len_for(side_exponent)?;

        #[cfg(feature = "threading")]
        let seeds = seeds.par_iter();
        #[cfg(not(feature = "threading"))]
        let seeds = seeds.iter();

        seeds.map(|&seed| self.generate_seeded(side_exponent, seed)).collect()
    }

    /// Seed the corners of an existing terrain and subdivide it in place.
    ///
    /// The terrain must be square with side `2^n + 1`; anything else is
    /// rejected before a single cell is written.
    #[instrument(level = "debug", skip_all, fields(side = terrain.width()))]
    pub fn fill<R: Rng + ?Sized>(&self, terrain: &mut Terrain, rng: &mut R) -> Result<(), TerrainError> {
        if !terrain.is_square_power_of_two_plus_one() {
            return Err(TerrainError::InvalidSideLength {
                width: terrain.width(),
                length: terrain.length(),
            });
        }

        initialize_corners(terrain, CORNER_SEED);
        let square_len = terrain.width() - 1;
        self.divide(terrain, square_len, rng);

        debug!(
            min = terrain.min_elevation(),
            max = terrain.max_elevation(),
            "diamond-square fill complete"
        );
        Ok(())
    }

    /// One subdivision level, then recurse on half-size squares.
    fn divide<R: Rng + ?Sized>(&self, terrain: &mut Terrain, square_len: usize, rng: &mut R) {
        let half = square_len / 2;
        if half < 1 {
            return;
        }

        let (width, length) = (terrain.width(), terrain.length());
        trace!(square_len, frequency = frequency(terrain, square_len), "subdividing");

        for y in (half..length).step_by(square_len) {
            for x in (half..width).step_by(square_len) {
                self.update_square(terrain, x, y, square_len, rng);
            }
        }

        for y in (0..length).step_by(half) {
            for x in ((y + half) % square_len..width).step_by(square_len) {
                self.update_diamond(terrain, x, y, square_len, rng);
            }
        }

        self.divide(terrain, half, rng);
    }

    /// Centre of the square whose corners lie `square_len / 2` away diagonally.
    fn update_square<R: Rng + ?Sized>(
        &self,
        terrain: &mut Terrain,
        x: usize,
        y: usize,
        square_len: usize,
        rng: &mut R,
    ) {
        let h = square_len / 2;
        let sum = terrain.at(x - h, y - h) as f64
            + terrain.at(x - h, y + h) as f64
            + terrain.at(x + h, y - h) as f64
            + terrain.at(x + h, y + h) as f64;
        let offset = self.offset(frequency(terrain, square_len), rng);
        terrain.put(x, y, clamp_unit(sum / 4.0 + offset));
    }

    /// Centre of the diamond spanning `diamond_len` corner to corner.
    fn update_diamond<R: Rng + ?Sized>(
        &self,
        terrain: &mut Terrain,
        x: usize,
        y: usize,
        diamond_len: usize,
        rng: &mut R,
    ) {
        let mean = diamond_mean(terrain, x, y, diamond_len / 2);
        let offset = self.offset(frequency(terrain, diamond_len), rng);
        terrain.put(x, y, clamp_unit(mean + offset));
    }

    /// Uniform draw from `[-0.5, 0.5)` scaled by the amplitude at `frequency`.
    ///
    /// A centred draw is a zero offset even for an infinite amplitude.
    #[inline]
    fn offset<R: Rng + ?Sized>(&self, frequency: f64, rng: &mut R) -> f64 {
        let centred = rng.gen::<f64>() - 0.5;
        if centred == 0.0 {
            return 0.0;
        }
        centred * self.amplitude.amplitude(frequency)
    }
}

impl<A: AmplitudeFunction> TerrainGenerator for DiamondSquareGenerator<A> {
    #[instrument(level = "debug", skip(self, rng))]
    fn generate<R: Rng + ?Sized>(&self, side_exponent: u32, rng: &mut R) -> Result<Terrain, TerrainError> {
        let side_len = side_len_for(side_exponent)?;
        let mut terrain = Terrain::new(side_len, side_len)?;
        self.fill(&mut terrain, rng)?;
        Ok(terrain)
    }
}

/// `2^side_exponent + 1`, refusing exponents past `MAX_SIDE_EXPONENT`.
fn side_len_for(side_exponent: u32) -> Result<usize, TerrainError> {
    if side_exponent > MAX_SIDE_EXPONENT {
        return Err(TerrainError::ExponentTooLarge { side_exponent, max: MAX_SIDE_EXPONENT });
    }
    Ok((1usize << side_exponent) + 1)
}

fn initialize_corners(terrain: &mut Terrain, value: f32) {
    let (w, l) = (terrain.width() - 1, terrain.length() - 1);
    terrain.put(0, 0, value);
    terrain.put(0, l, value);
    terrain.put(w, 0, value);
    terrain.put(w, l, value);
}

/// Integer ratio of full side to subdivision length: 1 at the top level,
/// doubling with every halving of `sub_len`.
#[inline]
fn frequency(terrain: &Terrain, sub_len: usize) -> f64 {
    (terrain.length() / sub_len) as f64
}

/// Mean of the orthogonal neighbours at distance `half`, skipping those that
/// would fall off the grid.
fn diamond_mean(terrain: &Terrain, x: usize, y: usize, half: usize) -> f64 {
    let mut sum = 0.0f64;
    let mut count = 0u32;
    if x != 0 {
        sum += terrain.at(x - half, y) as f64;
        count += 1;
    }
    if y != 0 {
        sum += terrain.at(x, y - half) as f64;
        count += 1;
    }
    if x != terrain.width() - 1 {
        sum += terrain.at(x + half, y) as f64;
        count += 1;
    }
    if y != terrain.length() - 1 {
        sum += terrain.at(x, y + half) as f64;
        count += 1;
    }
    sum / count as f64
}

/// Hard clamp into `[0, 1]`; out-of-range values land exactly on the bound.
/// NaN, which only a NaN amplitude can produce, maps to `0.0`.
#[inline]
fn clamp_unit(value: f64) -> f32 {
    if value.is_nan() {
        0.0
    } else if value > 1.0 {
        1.0
    } else if value < 0.0 {
        0.0
    } else {
        value as f32
    }
}
