// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Composite grading of diagram, equation and calculation steps

use super::{dcl, equation, numeric, ValidationConfig};
use crate::feedback::{FeedbackBuilder, FeedbackTarget};
use crate::model::{Question, UserAnswer, ValidationResult};
use crate::utils::to_score;

/// Minimum composite score counted as correct
pub const MULTI_STEP_PASS_SCORE: u32 = 90;

/// A graded sub-step and its configured weight
struct StepScore {
    name: &'static str,
    weight: f64,
    score: u32,
}

pub fn validate_multi_step(
    question: &Question,
    answer: &UserAnswer,
    config: &ValidationConfig,
) -> ValidationResult {
    let mut steps = Vec::new();
    let mut fb = FeedbackBuilder::new();

    match question.schema.as_ref().filter(|s| !s.is_empty()) {
        Some(schema) if !answer.placed_forces.is_empty() => {
            let result = dcl::grade_diagram(schema, &answer.placed_forces, &answer.placed_supports);
            steps.push(StepScore {
                name: "diagram",
                weight: config.dcl_weight,
                score: result.score,
            });
            fb.extend(result.feedback);
        }
        _ => tracing::debug!("skipping diagram step"),
    }

    match question.equations.as_ref().filter(|e| !e.required.is_empty()) {
        Some(spec) if !answer.selected_equations.is_empty() => {
            let result = equation::grade_selection(spec, &answer.selected_equations);
            steps.push(StepScore {
                name: "equations",
                weight: config.equation_weight,
                score: result.score,
            });
            fb.extend(result.feedback);
        }
        _ => tracing::debug!("skipping equation step"),
    }

    match (question.primary_answer(), answer.final_answer) {
        (Some(expected), Some(value)) => {
            let result = numeric::grade_value(
                expected,
                Some(value),
                answer.unit.as_deref(),
                &question.common_mistakes,
                config,
            );
            steps.push(StepScore {
                name: "calculation",
                weight: config.calculation_weight,
                score: result.score,
            });
            fb.extend(
                result
                    .feedback
                    .into_iter()
                    .map(|item| item.retarget(FeedbackTarget::Calculation)),
            );
        }
        _ => tracing::debug!("skipping calculation step"),
    }

    if steps.is_empty() {
        return ValidationResult::failure(
            FeedbackTarget::FinalAnswer,
            "No steps answered yet; complete at least one step",
        );
    }

    let score = combine(&steps);
    tracing::debug!(
        steps = ?steps.iter().map(|s| (s.name, s.score)).collect::<Vec<_>>(),
        score,
        "combined multi-step score"
    );

    ValidationResult::new(score >= MULTI_STEP_PASS_SCORE, score, fb.build())
}

/// Weighted sum of the participating steps divided by their count
fn combine(steps: &[StepScore]) -> u32 {
    if steps.is_empty() {
        return 0;
    }
    let weighted: f64 = steps.iter().map(|s| s.weight * s.score as f64).sum();
    to_score(weighted / steps.len() as f64)
}
