use serde::{Deserialize, Serialize};

use crate::diamond_square::DiamondSquareGenerator;
use crate::error::TerrainError;
use crate::presets::NoiseColor;
use crate::terrain::Terrain;

/// One reproducible generation run. Missing fields fall back to `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// Side length is `2^side_exponent + 1`.
    pub side_exponent: u32,
    pub color: NoiseColor,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            side_exponent: 7,
            color: NoiseColor::Pink,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, TerrainError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn generator(&self) -> DiamondSquareGenerator<NoiseColor> {
        DiamondSquareGenerator::from_color(self.color)
    }

    pub fn generate(&self) -> Result<Terrain, TerrainError> {
        self.generator().generate_seeded(self.side_exponent, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(GeneratorConfig::from_json("{}").unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn partial_config_overrides_named_fields() {
        let cfg = GeneratorConfig::from_json(r#"{"color": "violet", "side_exponent": 3}"#).unwrap();
        assert_eq!(cfg.color, NoiseColor::Violet);
        assert_eq!(cfg.side_exponent, 3);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn unknown_colour_and_fields_are_rejected() {
        assert!(matches!(
            GeneratorConfig::from_json(r#"{"color": "teal"}"#),
            Err(TerrainError::Config(_))
        ));
        assert!(GeneratorConfig::from_json(r#"{"octaves": 4}"#).is_err());
    }

    #[test]
    fn generate_is_reproducible_from_config() {
        let cfg = GeneratorConfig { seed: 7, side_exponent: 4, color: NoiseColor::Red };
        let a = cfg.generate().unwrap();
        assert_eq!(a.width(), 17);
        assert_eq!(a, cfg.generate().unwrap());
        assert_eq!(a, cfg.generator().generate_seeded(4, 7).unwrap());
    }

    #[test]
    fn oversized_exponent_surfaces_as_error() {
        let cfg = GeneratorConfig { side_exponent: 30, ..GeneratorConfig::default() };
        assert!(matches!(cfg.generate(), Err(TerrainError::ExponentTooLarge { .. })));
    }
}
