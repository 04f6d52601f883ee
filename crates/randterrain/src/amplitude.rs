//! Frequency → amplitude mapping that sets the spectral colour of the noise.

/// Maps a subdivision frequency (always ≥ 1) to the maximum offset applied
/// at that scale. Implementations must be pure and should return finite,
/// non-negative values; an infinite amplitude pins every non-centred draw to a
/// bound and a NaN amplitude clamps to `0.0`.
pub trait AmplitudeFunction: Send + Sync {
    fn amplitude(&self, frequency: f64) -> f64;
}

impl<F> AmplitudeFunction for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    #[inline]
    fn amplitude(&self, frequency: f64) -> f64 {
        self(frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaled<A: AmplitudeFunction>(a: &A, f: f64) -> f64 {
        a.amplitude(f)
    }

    #[test]
    fn closures_are_amplitude_functions() {
        let flat = |_: f64| 0.0;
        let halving = |f: f64| 1.0 / f;
        assert_eq!(scaled(&flat, 8.0), 0.0);
        assert_eq!(scaled(&halving, 4.0), 0.25);
    }
}
