// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Numeric, geometric and unit helpers shared by the validation strategies

pub mod math;
pub mod units;

pub use math::{
    angle_difference, angles_similar, distance, lerp, percent_error, relative_error, same_sign,
    to_score, within_tolerance, ToleranceType, ZERO_EPSILON,
};
pub use units::{canonical_unit, normalize_unit, units_equivalent};
