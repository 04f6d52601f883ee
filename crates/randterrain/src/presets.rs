//! Named spectral colours and the preset generators built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::amplitude::AmplitudeFunction;
use crate::diamond_square::DiamondSquareGenerator;

/// Noise colour, i.e. amplitude ∝ frequency^exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseColor {
    /// frequency^-2
    Red,
    /// frequency^-1
    Pink,
    /// constant 1
    White,
    /// frequency
    Blue,
    /// frequency^2
    Violet,
}

impl NoiseColor {
    pub const ALL: [NoiseColor; 5] = [
        NoiseColor::Red,
        NoiseColor::Pink,
        NoiseColor::White,
        NoiseColor::Blue,
        NoiseColor::Violet,
    ];

    pub fn exponent(self) -> i32 {
        match self {
            NoiseColor::Red    => -2,
            NoiseColor::Pink   => -1,
            NoiseColor::White  =>  0,
            NoiseColor::Blue   =>  1,
            NoiseColor::Violet =>  2,
        }
    }
}

impl AmplitudeFunction for NoiseColor {
    #[inline]
    fn amplitude(&self, frequency: f64) -> f64 {
        frequency.powi(self.exponent())
    }
}

impl fmt::Display for NoiseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoiseColor::Red    => "red",
            NoiseColor::Pink   => "pink",
            NoiseColor::White  => "white",
            NoiseColor::Blue   => "blue",
            NoiseColor::Violet => "violet",
        };
        f.write_str(name)
    }
}

impl DiamondSquareGenerator<NoiseColor> {
    pub fn from_color(color: NoiseColor) -> Self {
        Self::new(color)
    }
}

pub fn red() -> DiamondSquareGenerator<NoiseColor> {
    DiamondSquareGenerator::from_color(NoiseColor::Red)
}

pub fn pink() -> DiamondSquareGenerator<NoiseColor> {
    DiamondSquareGenerator::from_color(NoiseColor::Pink)
}

pub fn white() -> DiamondSquareGenerator<NoiseColor> {
    DiamondSquareGenerator::from_color(NoiseColor::White)
}

pub fn blue() -> DiamondSquareGenerator<NoiseColor> {
    DiamondSquareGenerator::from_color(NoiseColor::Blue)
}

pub fn violet() -> DiamondSquareGenerator<NoiseColor> {
    DiamondSquareGenerator::from_color(NoiseColor::Violet)
}
