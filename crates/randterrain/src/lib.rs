//! Procedural height-map terrains built from coloured diamond-square noise.
//!
//! ```no_run
//! use randterrain::{presets, TerrainGenerator};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let terrain = presets::pink().generate(6, &mut rng)?;
//! assert_eq!(terrain.width(), 65);
//! # Ok::<(), randterrain::TerrainError>(())
//! ```

pub mod amplitude;
pub mod config;
pub mod diamond_square;
pub mod error;
pub mod gradient;
pub mod presets;
pub mod terrain;

pub use amplitude::AmplitudeFunction;
pub use config::GeneratorConfig;
pub use diamond_square::{DiamondSquareGenerator, TerrainGenerator, CORNER_SEED, MAX_SIDE_EXPONENT};
pub use error::TerrainError;
pub use gradient::{GradientGrid, GradientNoisePreparer};
pub use presets::NoiseColor;
pub use terrain::Terrain;
