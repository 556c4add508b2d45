//! Circular statistics over angle samples.

use crate::error::{Result, RoseError};

/// Resultant lengths below this are sin/cos rounding noise of a set of
/// vectors that cancel exactly.
pub const RESULTANT_EPSILON: f64 = 1e-12;

/// Mean direction of a sample and its dispersion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanDirection {
    /// Mean angle in degrees, `[0, 360)`
    pub mean_deg: f64,
    /// Mean resultant length R, 0..=1
    pub resultant_length: f64,
    /// Circular variance, 1 - R
    pub circular_variance: f64,
    /// Circular standard deviation, sqrt(ln(1 / R²)), in radians
    pub circular_std_dev: f64,
}

/// Compute the circular mean and dispersion of angles given in degrees.
///
/// The mean comes from a quadrant-corrected `atan(s/c)`: positive cosine
/// with non-negative sine reads directly, positive cosine with negative sine
/// wraps by 360°, and everything else (including a zero cosine) is shifted
/// by 180°.
pub fn mean_and_dispersion(angles: &[f64]) -> Result<MeanDirection> {
    if angles.is_empty() {
        return Err(RoseError::InvalidInput(
            "mean direction of an empty angle set is undefined".to_string(),
        ));
    }

    let n = angles.len() as f64;
    let (sin_sum, cos_sum) = angles.iter().fold((0.0, 0.0), |(s, c), angle| {
        let rad = angle.to_radians();
        (s + rad.sin(), c + rad.cos())
    });
    let s = sin_sum / n;
    let c = cos_sum / n;

    let resultant_length = (s * s + c * c).sqrt().min(1.0);
    if resultant_length < RESULTANT_EPSILON {
        return Err(RoseError::IndeterminateDirection { resultant_length });
    }

    let base = (s / c).atan().to_degrees();
    let mean_deg = if s >= 0.0 && c > 0.0 {
        base
    } else if s < 0.0 && c > 0.0 {
        base + 360.0
    } else {
        base + 180.0
    };

    Ok(MeanDirection {
        mean_deg: mean_deg.rem_euclid(360.0),
        resultant_length,
        circular_variance: 1.0 - resultant_length,
        circular_std_dev: (1.0 / (resultant_length * resultant_length)).ln().sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_angles() {
        let stats = mean_and_dispersion(&[0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(stats.mean_deg, 0.0);
        assert_relative_eq!(stats.resultant_length, 1.0, epsilon = 1e-12);
        assert_relative_eq!(stats.circular_variance, 0.0, epsilon = 1e-12);
        assert_relative_eq!(stats.circular_std_dev, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_opposite_angles_are_indeterminate() {
        let err = mean_and_dispersion(&[0.0, 180.0]).unwrap_err();
        assert!(matches!(err, RoseError::IndeterminateDirection { .. }));

        let err = mean_and_dispersion(&[0.0, 120.0, 240.0]).unwrap_err();
        assert!(matches!(err, RoseError::IndeterminateDirection { .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            mean_and_dispersion(&[]),
            Err(RoseError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_wraparound() {
        let stats = mean_and_dispersion(&[350.0, 10.0]).unwrap();
        assert!(stats.mean_deg < 1e-9 || (360.0 - stats.mean_deg) < 1e-9);

        let stats = mean_and_dispersion(&[340.0, 350.0]).unwrap();
        assert_relative_eq!(stats.mean_deg, 345.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quadrants() {
        let mean = |angles: &[f64]| mean_and_dispersion(angles).unwrap().mean_deg;
        assert_relative_eq!(mean(&[30.0, 60.0]), 45.0, epsilon = 1e-9);
        assert_relative_eq!(mean(&[120.0, 150.0]), 135.0, epsilon = 1e-9);
        assert_relative_eq!(mean(&[210.0, 240.0]), 225.0, epsilon = 1e-9);
        assert_relative_eq!(mean(&[300.0, 330.0]), 315.0, epsilon = 1e-9);
        assert_relative_eq!(mean(&[180.0]), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_angles_share_frame() {
        let a = mean_and_dispersion(&[-30.0, -60.0]).unwrap();
        assert_relative_eq!(a.mean_deg, 315.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dispersion_of_spread_sample() {
        let stats = mean_and_dispersion(&[0.0, 90.0]).unwrap();
        let r = (0.5f64 * 0.5 + 0.5 * 0.5).sqrt();
        assert_relative_eq!(stats.mean_deg, 45.0, epsilon = 1e-9);
        assert_relative_eq!(stats.resultant_length, r, epsilon = 1e-12);
        assert_relative_eq!(stats.circular_variance, 1.0 - r, epsilon = 1e-12);
        assert_relative_eq!(stats.circular_std_dev, (1.0 / (r * r)).ln().sqrt(), epsilon = 1e-12);
    }
}
