// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Free-hand wave sketch grading
//!
//! The drawn curve is compared statistically with the analytic wave:
//! peak-to-peak amplitude, mean deviation from the expected curve, and a
//! wavelength estimated from zero crossings. Phase is not measured on its
//! own; it is accepted whenever the shape accuracy exceeds
//! [`PHASE_ACCURACY_THRESHOLD`].

use std::f64::consts::PI;

use crate::feedback::{FeedbackBuilder, FeedbackItem, FeedbackKind, FeedbackTarget};
use crate::model::{
    Point, Question, UserAnswer, ValidationDetail, ValidationResult, WaveSketchSpec,
    WaveSketchValidation, WaveType,
};
use crate::utils::{lerp, relative_error, ZERO_EPSILON};

/// Minimum number of drawn samples
pub const MIN_SKETCH_POINTS: usize = 10;

/// Relative amplitude error accepted
pub const AMPLITUDE_TOLERANCE: f64 = 0.20;

/// Relative wavelength error accepted
pub const WAVELENGTH_TOLERANCE: f64 = 0.25;

/// Shape accuracy above which the shape is accepted
pub const SHAPE_ACCURACY_THRESHOLD: f64 = 60.0;

/// Shape accuracy above which the phase is accepted
pub const PHASE_ACCURACY_THRESHOLD: f64 = 50.0;

/// Minimum score counted as correct
pub const WAVE_PASS_SCORE: u32 = 80;

const AMPLITUDE_POINTS: u32 = 30;
const WAVELENGTH_POINTS: u32 = 30;
const SHAPE_POINTS: u32 = 40;

pub fn validate_wave_sketch(question: &Question, answer: &UserAnswer) -> ValidationResult {
    let Some(spec) = question.wave_sketch.as_ref() else {
        return ValidationResult::failure(
            FeedbackTarget::WaveShape,
            "No wave defined for this question",
        );
    };

    if answer.drawn_points.len() < MIN_SKETCH_POINTS {
        return ValidationResult::failure(
            FeedbackTarget::WaveShape,
            format!(
                "insufficient drawing: sketch at least {} points of the wave",
                MIN_SKETCH_POINTS
            ),
        );
    }

    grade_sketch(spec, &answer.drawn_points)
}

/// Grade a sketch of at least [`MIN_SKETCH_POINTS`] samples
pub fn grade_sketch(spec: &WaveSketchSpec, drawn: &[Point]) -> ValidationResult {
    let mut points: Vec<Point> = drawn
        .iter()
        .copied()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    points.sort_by(|a, b| a.x.total_cmp(&b.x));

    let amplitude_error = relative_error(drawn_amplitude(&points), spec.amplitude.abs());
    let amplitude_correct = amplitude_error < AMPLITUDE_TOLERANCE;

    let overall_accuracy = shape_accuracy(spec, &points);
    let shape_correct = overall_accuracy > SHAPE_ACCURACY_THRESHOLD;
    let phase_correct = overall_accuracy > PHASE_ACCURACY_THRESHOLD;

    let (wavelength_correct, wavelength_error) = match spec.wavelength {
        Some(expected) => match estimate_wavelength(&points) {
            Some(estimate) => {
                let error = relative_error(estimate, expected);
                (error < WAVELENGTH_TOLERANCE, error)
            }
            None => (true, 0.0),
        },
        None => (true, 0.0),
    };

    let score = [
        (amplitude_correct, AMPLITUDE_POINTS),
        (wavelength_correct, WAVELENGTH_POINTS),
        (shape_correct, SHAPE_POINTS),
    ]
    .iter()
    .filter(|(ok, _)| *ok)
    .map(|(_, points)| points)
    .sum::<u32>();
    let is_correct = score >= WAVE_PASS_SCORE;

    tracing::debug!(
        amplitude_error,
        wavelength_error,
        overall_accuracy,
        score,
        "graded wave sketch"
    );

    let mut fb = FeedbackBuilder::new();

    if amplitude_correct {
        fb.success(FeedbackTarget::WaveAmplitude, "Amplitude is correct");
    } else {
        fb.push(
            FeedbackItem::new(
                FeedbackKind::Error,
                FeedbackTarget::WaveAmplitude,
                format!("Amplitude is off by {:.0}%", amplitude_error * 100.0),
            )
            .with_suggestion(format!(
                "The wave should swing between {} and {}",
                -spec.amplitude.abs(),
                spec.amplitude.abs()
            )),
        );
    }

    if wavelength_correct {
        fb.success(FeedbackTarget::WaveWavelength, "Wavelength is correct");
    } else {
        let mut item = FeedbackItem::new(
            FeedbackKind::Error,
            FeedbackTarget::WaveWavelength,
            format!("Wavelength is off by {:.0}%", wavelength_error * 100.0),
        );
        if let Some(expected) = spec.wavelength {
            item = item.with_suggestion(format!(
                "Consecutive zero crossings should be {} apart",
                expected / 2.0
            ));
        }
        fb.push(item);
    }

    if shape_correct {
        fb.success(
            FeedbackTarget::WaveShape,
            format!("Wave shape matches ({:.0}% accuracy)", overall_accuracy),
        );
    } else {
        fb.error(
            FeedbackTarget::WaveShape,
            format!("Wave shape does not match ({:.0}% accuracy)", overall_accuracy),
        );
        fb.hint(
            FeedbackTarget::WaveShape,
            match spec.wave_type {
                WaveType::Sine => {
                    "A sine wave starts at its equilibrium line when the phase is zero"
                }
                WaveType::Cosine => "A cosine wave starts at its crest when the phase is zero",
            },
        );
    }

    ValidationResult::new(is_correct, score, fb.build()).with_detail(
        ValidationDetail::WaveSketchValidation(WaveSketchValidation {
            amplitude_correct,
            wavelength_correct,
            phase_correct,
            shape_correct,
            amplitude_error,
            wavelength_error,
            phase_error: 0.0,
            overall_accuracy,
        }),
    )
}

/// Half the peak-to-peak height of the sketch
pub fn drawn_amplitude(points: &[Point]) -> f64 {
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
            (min.min(p.y), max.max(p.y))
        });
    if min.is_finite() && max.is_finite() {
        (max - min) / 2.0
    } else {
        0.0
    }
}

/// Angular wave number of the expected curve
fn wave_number(spec: &WaveSketchSpec) -> f64 {
    match (spec.wavelength, spec.frequency) {
        (Some(wavelength), _) if wavelength.abs() > ZERO_EPSILON => 2.0 * PI / wavelength,
        (_, Some(frequency)) => 2.0 * PI * frequency,
        _ => 2.0 * PI,
    }
}

/// Value of the analytic wave at `x`
pub fn expected_value(spec: &WaveSketchSpec, x: f64) -> f64 {
    let argument = wave_number(spec) * x + spec.phase;
    match spec.wave_type {
        WaveType::Sine => spec.amplitude * argument.sin(),
        WaveType::Cosine => spec.amplitude * argument.cos(),
    }
}

/// Accuracy in `0..=100` from the mean deviation normalised by amplitude
pub fn shape_accuracy(spec: &WaveSketchSpec, points: &[Point]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let scale = if spec.amplitude.abs() > ZERO_EPSILON {
        spec.amplitude.abs()
    } else {
        1.0
    };
    let mean_error = points
        .iter()
        .map(|p| (p.y - expected_value(spec, p.x)).abs() / scale)
        .sum::<f64>()
        / points.len() as f64;

    (100.0 - mean_error * 50.0).max(0.0)
}

/// Estimate the wavelength from zero crossings of x-sorted points. Returns
/// `None` when fewer than two crossings are found.
pub fn estimate_wavelength(points: &[Point]) -> Option<f64> {
    let crossings: Vec<f64> = points
        .windows(2)
        .filter(|w| w[0].y * w[1].y < 0.0)
        .map(|w| {
            let t = w[0].y / (w[0].y - w[1].y);
            lerp(w[0].x, w[1].x, t)
        })
        .collect();

    if crossings.len() < 2 {
        return None;
    }

    let half_wavelength =
        crossings.windows(2).map(|c| c[1] - c[0]).sum::<f64>() / (crossings.len() - 1) as f64;
    Some(half_wavelength * 2.0)
}
