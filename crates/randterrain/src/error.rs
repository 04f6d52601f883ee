use thiserror::Error;

/// Everything that can go wrong while building or reading a terrain.
///
/// All variants are input-validation failures raised before any cell is
/// written; nothing here is retryable.
#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("invalid dimensions {width}x{length}: both sides must be positive")]
    InvalidDimension { width: usize, length: usize },

    #[error("side exponent {side_exponent} exceeds the supported maximum of {max}")]
    ExponentTooLarge { side_exponent: u32, max: u32 },

    #[error("coordinate ({x}, {y}) is outside a {width}x{length} grid")]
    OutOfBounds { x: usize, y: usize, width: usize, length: usize },

    #[error("a {width}x{length} terrain is not a square with side 2^n + 1")]
    InvalidSideLength { width: usize, length: usize },

    #[error("gradient magnitude {0} must lie in (0, 1]")]
    InvalidMagnitude(f64),

    #[error("invalid generator config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = TerrainError::OutOfBounds { x: 5, y: 0, width: 5, length: 5 };
        assert_eq!(e.to_string(), "coordinate (5, 0) is outside a 5x5 grid");

        let e = TerrainError::ExponentTooLarge { side_exponent: 20, max: 14 };
        assert!(e.to_string().contains("20"));
    }

    #[test]
    fn json_errors_convert_into_config_variant() {
        let raw = serde_json::from_str::<u32>("not json").unwrap_err();
        let e: TerrainError = raw.into();
        assert!(matches!(e, TerrainError::Config(_)));
    }
}
