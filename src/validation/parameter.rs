// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wave parameter identification grading

use crate::feedback::{FeedbackBuilder, FeedbackItem, FeedbackKind, FeedbackTarget};
use crate::model::{Question, UserAnswer, ValidationResult, WaveParameter};
use crate::utils::{relative_error, to_score};

/// Relative error accepted for amplitude, wavelength, frequency and period
pub const PARAMETER_TOLERANCE: f64 = 0.10;

/// Relative error accepted for the phase
pub const PHASE_TOLERANCE: f64 = 0.20;

pub fn tolerance_for(parameter: WaveParameter) -> f64 {
    match parameter {
        WaveParameter::Phase => PHASE_TOLERANCE,
        _ => PARAMETER_TOLERANCE,
    }
}

pub fn validate_parameters(question: &Question, answer: &UserAnswer) -> ValidationResult {
    let target = FeedbackTarget::Parameters;
    let Some(spec) = question
        .parameter_identify
        .as_ref()
        .filter(|s| !s.parameters.is_empty())
    else {
        return ValidationResult::failure(target, "No wave parameters defined for this question");
    };

    let mut fb = FeedbackBuilder::new();
    let mut total = 0usize;
    let mut correct = 0usize;

    for &parameter in &spec.parameters {
        let Some(expected) = spec.wave.expected(parameter) else {
            tracing::warn!(
                parameter = parameter.as_str(),
                "no reference value for requested parameter, skipping"
            );
            continue;
        };
        total += 1;

        let name = parameter.as_str();
        match answer.identified_parameters.get(&parameter) {
            Some(&value) => {
                let error = relative_error(value, expected);
                if error <= tolerance_for(parameter) {
                    correct += 1;
                    fb.success(target, format!("{} is correct ({})", capitalize(name), value));
                } else {
                    fb.push(
                        FeedbackItem::new(
                            FeedbackKind::Error,
                            target,
                            format!(
                                "{} is incorrect: you entered {}, expected {}",
                                capitalize(name),
                                value,
                                expected
                            ),
                        )
                        .with_suggestion(suggestion_for(parameter)),
                    );
                }
            }
            None => {
                fb.push(
                    FeedbackItem::new(
                        FeedbackKind::Error,
                        target,
                        format!("{} not provided", capitalize(name)),
                    )
                    .with_suggestion(suggestion_for(parameter)),
                );
            }
        }
    }

    if total == 0 {
        return ValidationResult::failure(target, "No wave parameters defined for this question");
    }

    let score = to_score(100.0 * correct as f64 / total as f64);
    ValidationResult::new(correct == total, score, fb.build())
}

fn suggestion_for(parameter: WaveParameter) -> &'static str {
    match parameter {
        WaveParameter::Amplitude => "Measure from the equilibrium line to a crest",
        WaveParameter::Wavelength => "Measure the distance between two consecutive crests",
        WaveParameter::Frequency => "Count the cycles completed per second",
        WaveParameter::Period => "The period is the inverse of the frequency",
        WaveParameter::Phase => "Compare the value at the origin with the wave's amplitude",
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
