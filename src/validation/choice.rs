// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Single-selection grading for multiple-choice and wave-match questions

use crate::feedback::{FeedbackBuilder, FeedbackItem, FeedbackKind, FeedbackTarget};
use crate::model::{Question, UserAnswer, ValidationResult};

/// Borrowed view over either kind of option
struct Choice<'a> {
    id: &'a str,
    label: &'a str,
    is_correct: bool,
    feedback: Option<&'a str>,
}

pub fn validate_multiple_choice(question: &Question, answer: &UserAnswer) -> ValidationResult {
    let choices: Vec<Choice> = question
        .options
        .iter()
        .flatten()
        .map(|o| Choice {
            id: &o.id,
            label: &o.text,
            is_correct: o.is_correct,
            feedback: o.feedback.as_deref(),
        })
        .collect();

    grade_selection(&choices, answer.selection(), FeedbackTarget::FinalAnswer)
}

pub fn validate_wave_match(question: &Question, answer: &UserAnswer) -> ValidationResult {
    let choices: Vec<Choice> = question
        .wave_match
        .iter()
        .flat_map(|spec| spec.options.iter())
        .map(|o| Choice {
            id: &o.id,
            label: &o.equation,
            is_correct: o.is_correct,
            feedback: o.feedback.as_deref(),
        })
        .collect();

    let selection = answer
        .selected_wave_option
        .as_deref()
        .filter(|s| !s.trim().is_empty());

    grade_selection(&choices, selection, FeedbackTarget::WaveMatch)
}

fn grade_selection(
    choices: &[Choice],
    selection: Option<&str>,
    target: FeedbackTarget,
) -> ValidationResult {
    let selection = match selection {
        Some(id) if !choices.is_empty() => id,
        _ => return ValidationResult::failure(target, "no answer selected"),
    };

    let selected = choices.iter().find(|c| c.id == selection);
    let mut fb = FeedbackBuilder::new();

    if let Some(choice) = selected.filter(|c| c.is_correct) {
        fb.success(target, choice.feedback.unwrap_or("Correct answer!"));
        return ValidationResult::new(true, 100, fb.build());
    }

    let message = selected
        .and_then(|c| c.feedback)
        .unwrap_or("incorrect answer");
    let mut item = FeedbackItem::new(FeedbackKind::Error, target, message);
    if let Some(correct) = choices.iter().find(|c| c.is_correct) {
        item = item.with_suggestion(format!("The correct answer is: {}", correct.label));
    }
    fb.push(item);

    ValidationResult::new(false, 0, fb.build())
}
