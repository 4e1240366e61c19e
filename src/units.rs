//! Angle unit conversions.

use crate::traits::Float;

/// Converts an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// # use cml::units::radians;
/// assert!((radians(180.0f64) - std::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(radians(0.0f32), 0.0);
/// ```
#[inline]
pub fn radians<T: Float>(degrees: T) -> T {
    degrees * T::PI / T::HALF_TURN_DEGREES
}

/// Converts an angle in radians to degrees.
///
/// # Examples
///
/// ```
/// # use cml::units::degrees;
/// assert!((degrees(std::f32::consts::PI) - 180.0).abs() < 1e-4);
/// ```
#[inline]
pub fn degrees<T: Float>(radians: T) -> T {
    radians * T::HALF_TURN_DEGREES / T::PI
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn round_trip() {
        for deg in [-720.0, -90.0, 0.0, 45.0, 90.0, 360.0] {
            assert_relative_eq!(degrees(radians(deg)), deg, max_relative = 1e-12);
        }
        assert_relative_eq!(radians(90.0f32), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(degrees(1.0), 57.29577951308232);
    }
}
