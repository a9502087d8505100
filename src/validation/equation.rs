// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Equilibrium equation selection grading

use std::collections::BTreeSet;

use crate::feedback::{FeedbackBuilder, FeedbackItem, FeedbackKind, FeedbackTarget};
use crate::model::{
    EquationSpec, EquationValidation, Question, UserAnswer, ValidationDetail, ValidationResult,
};
use crate::utils::to_score;

/// Points deducted per unnecessary equation
pub const WRONG_EQUATION_PENALTY: u32 = 20;

pub fn validate_equations(question: &Question, answer: &UserAnswer) -> ValidationResult {
    match question.equations.as_ref().filter(|e| !e.required.is_empty()) {
        Some(spec) => grade_selection(spec, &answer.selected_equations),
        None => ValidationResult::failure(
            FeedbackTarget::Equations,
            "No equations defined for this question",
        ),
    }
}

/// Compare the selected equation ids with the required set
pub fn grade_selection(spec: &EquationSpec, selected: &[String]) -> ValidationResult {
    let required: BTreeSet<&str> = spec.required.iter().map(|e| e.trim()).collect();
    let chosen: BTreeSet<&str> = selected
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .collect();

    // Keep the author's order for missing ones so messages read naturally
    let mut seen = BTreeSet::new();
    let missing: Vec<String> = spec
        .required
        .iter()
        .map(|e| e.trim())
        .filter(|e| !chosen.contains(e) && seen.insert(*e))
        .map(str::to_string)
        .collect();
    let wrong: Vec<String> = chosen
        .iter()
        .filter(|e| !required.contains(*e))
        .map(|e| e.to_string())
        .collect();

    let found = required.len() - missing.len();
    let coverage = to_score(100.0 * found as f64 / required.len().max(1) as f64);
    let score = coverage.saturating_sub(WRONG_EQUATION_PENALTY * wrong.len() as u32);
    let is_correct = missing.is_empty() && wrong.is_empty();

    let target = FeedbackTarget::Equations;
    let mut fb = FeedbackBuilder::new();

    if !missing.is_empty() {
        fb.push(
            FeedbackItem::new(
                FeedbackKind::Error,
                target,
                format!("Missing equations: {}", missing.join(", ")),
            )
            .with_suggestion(
                "A rigid body in plane equilibrium needs ΣFx = 0, ΣFy = 0 \
                 and ΣM = 0 about a point",
            ),
        );
    }
    if !wrong.is_empty() {
        fb.warning(
            target,
            format!("Unnecessary equations selected: {}", wrong.join(", ")),
        );
    }
    if is_correct {
        fb.success(target, "You selected exactly the equations needed");
    }

    ValidationResult::new(is_correct, score, fb.build()).with_detail(
        ValidationDetail::EquationValidation(EquationValidation {
            equations_selected: chosen.len(),
            equations_correct: is_correct,
            terms_correct: missing.is_empty(),
            signs_correct: true,
            missing_equations: missing,
            wrong_equations: wrong,
        }),
    )
}
