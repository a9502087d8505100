// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::Point2;

/// Values whose magnitude is below this are treated as zero
pub const ZERO_EPSILON: f64 = 1e-9;

/// Relative slack applied to tolerance boundaries so that values sitting
/// exactly on the limit (e.g. 102 against 100 ± 2%) are not rejected by
/// floating-point rounding.
const BOUNDARY_SLACK: f64 = 1e-9;

/// How a tolerance value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToleranceType {
    /// Percentage of the expected value
    #[default]
    Percent,
    /// Fixed margin in the answer's own unit
    Absolute,
}

/// Check whether `actual` lies within `tolerance` of `expected`.
///
/// Percent tolerances are expressed in percent points (2.0 means 2%). An
/// expected value of zero cannot carry a relative margin, so it requires a
/// near-exact match instead.
pub fn within_tolerance(
    actual: f64,
    expected: f64,
    tolerance: f64,
    tolerance_type: ToleranceType,
) -> bool {
    let diff = (actual - expected).abs();
    match tolerance_type {
        ToleranceType::Percent => {
            if expected.abs() < ZERO_EPSILON {
                return actual.abs() <= ZERO_EPSILON;
            }
            diff / expected.abs() <= tolerance / 100.0 + BOUNDARY_SLACK
        }
        ToleranceType::Absolute => diff <= tolerance + BOUNDARY_SLACK * tolerance.abs().max(1.0),
    }
}

/// Relative error in percent. A zero expected value yields 0 for a matching
/// answer and 100 otherwise.
pub fn percent_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < ZERO_EPSILON {
        return if actual.abs() <= ZERO_EPSILON { 0.0 } else { 100.0 };
    }
    (actual - expected).abs() / expected.abs() * 100.0
}

/// Relative error as a ratio, falling back to the absolute error when the
/// reference is zero.
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < ZERO_EPSILON {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// True when both values have the same sign. A zero expected value accepts
/// any sign.
pub fn same_sign(actual: f64, expected: f64) -> bool {
    if expected == 0.0 {
        return true;
    }
    sign(actual) == sign(expected)
}

fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Smallest difference between two angles in degrees, in `[0, 180]`
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Check if two angles in degrees agree within `tolerance`, with wraparound
pub fn angles_similar(a: f64, b: f64, tolerance: f64) -> bool {
    angle_difference(a, b) <= tolerance
}

/// Euclidean distance between two points
pub fn distance(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    nalgebra::distance(a, b)
}

/// Round a fractional score and clamp it into `0..=100`
pub fn to_score(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u32
}

/// Linear interpolation
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_tolerance_boundary() {
        assert!(within_tolerance(102.0, 100.0, 2.0, ToleranceType::Percent));
        assert!(within_tolerance(98.0, 100.0, 2.0, ToleranceType::Percent));
        assert!(!within_tolerance(102.1, 100.0, 2.0, ToleranceType::Percent));
    }

    #[test]
    fn test_absolute_tolerance() {
        assert!(within_tolerance(10.5, 10.0, 0.5, ToleranceType::Absolute));
        assert!(!within_tolerance(10.6, 10.0, 0.5, ToleranceType::Absolute));
    }

    #[test]
    fn test_zero_expected_requires_exact() {
        assert!(within_tolerance(0.0, 0.0, 5.0, ToleranceType::Percent));
        assert!(!within_tolerance(0.01, 0.0, 5.0, ToleranceType::Percent));
        assert_eq!(percent_error(0.0, 0.0), 0.0);
        assert_eq!(percent_error(3.0, 0.0), 100.0);
    }

    #[test]
    fn test_percent_error() {
        assert_relative_eq!(percent_error(49.0, 50.0), 2.0, epsilon = 1e-9);
        assert_relative_eq!(percent_error(-49.0, -50.0), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_same_sign() {
        assert!(same_sign(3.0, 5.0));
        assert!(!same_sign(-3.0, 5.0));
        assert!(!same_sign(0.0, 5.0));
        assert!(same_sign(-3.0, 0.0));
    }

    #[test]
    fn test_angle_wraparound() {
        assert_eq!(angle_difference(350.0, 10.0), 20.0);
        assert_eq!(angle_difference(10.0, 350.0), 20.0);
        assert_eq!(angle_difference(-90.0, 270.0), 0.0);
        assert_eq!(angle_difference(0.0, 180.0), 180.0);
        assert!(angles_similar(355.0, 5.0, 15.0));
        assert!(!angles_similar(90.0, 110.0, 15.0));
    }

    #[test]
    fn test_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_relative_eq!(distance(&a, &b), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_score() {
        assert_eq!(to_score(83.5), 84);
        assert_eq!(to_score(-12.0), 0);
        assert_eq!(to_score(140.0), 100);
        assert_eq!(to_score(f64::NAN), 0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    }
}
