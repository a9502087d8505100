// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grading case runner

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::dataset::{CaseExpectation, GradingCase};
use super::reporter::BatchReport;
use crate::model::ValidationResult;
use crate::validation::{validate, ValidationConfig};

/// Outcome of grading one case
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOutcome {
    pub name: String,
    pub question_type: String,
    pub result: ValidationResult,
    /// `None` when the case carries no expectation
    pub expectation_met: Option<bool>,
    pub mismatches: Vec<String>,
    pub time_us: u64,
}

impl CaseOutcome {
    /// Cases without expectations always pass
    pub fn passed(&self) -> bool {
        self.expectation_met.unwrap_or(true)
    }
}

/// Grade a single case and compare it with its expectation
pub fn evaluate_case(case: &GradingCase, config: &ValidationConfig) -> CaseOutcome {
    let start = Instant::now();
    let result = validate(&case.question, &case.answer, config);
    let time_us = start.elapsed().as_micros() as u64;

    let mismatches = case
        .expect
        .as_ref()
        .map(|expect| check_expectation(expect, &result))
        .unwrap_or_default();
    let expectation_met = case.expect.as_ref().map(|_| mismatches.is_empty());

    if !mismatches.is_empty() {
        tracing::debug!(case = %case.display_name(), ?mismatches, "expectation not met");
    }

    CaseOutcome {
        name: case.display_name(),
        question_type: case.question.question_type.as_str().to_string(),
        result,
        expectation_met,
        mismatches,
        time_us,
    }
}

/// Grade all cases in parallel. Outcomes keep the input order.
pub fn evaluate_cases(cases: &[GradingCase], config: &ValidationConfig) -> BatchReport {
    let outcomes: Vec<CaseOutcome> = cases
        .par_iter()
        .map(|case| evaluate_case(case, config))
        .collect();

    let mut report = BatchReport::new();
    for outcome in outcomes {
        report.add_outcome(outcome);
    }
    report
}

fn check_expectation(expect: &CaseExpectation, result: &ValidationResult) -> Vec<String> {
    let mut mismatches = Vec::new();

    if let Some(is_correct) = expect.is_correct {
        if is_correct != result.is_correct {
            mismatches.push(format!(
                "isCorrect: expected {}, got {}",
                is_correct, result.is_correct
            ));
        }
    }
    if let Some(score) = expect.score {
        if score != result.score {
            mismatches.push(format!("score: expected {}, got {}", score, result.score));
        }
    }

    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChoiceOption, Question, QuestionType, UserAnswer};

    fn choice_case(selected: &str, expect: CaseExpectation) -> GradingCase {
        let question = Question {
            id: "mc".into(),
            options: Some(vec![
                ChoiceOption {
                    id: "a".into(),
                    text: "Up".into(),
                    is_correct: true,
                    feedback: None,
                },
                ChoiceOption {
                    id: "b".into(),
                    text: "Down".into(),
                    is_correct: false,
                    feedback: None,
                },
            ]),
            ..Question::new(QuestionType::MultipleChoice)
        };
        let answer = UserAnswer {
            selected_option: Some(selected.into()),
            ..Default::default()
        };
        GradingCase::new(question, answer).with_expectation(expect)
    }

    #[test]
    fn test_expectation_met() {
        let case = choice_case(
            "a",
            CaseExpectation {
                is_correct: Some(true),
                score: Some(100),
            },
        );
        let outcome = evaluate_case(&case, &ValidationConfig::default());
        assert_eq!(outcome.expectation_met, Some(true));
        assert!(outcome.passed());
        assert_eq!(outcome.question_type, "multiple-choice");
    }

    #[test]
    fn test_expectation_mismatch() {
        let case = choice_case(
            "b",
            CaseExpectation {
                is_correct: Some(true),
                score: None,
            },
        );
        let outcome = evaluate_case(&case, &ValidationConfig::default());
        assert_eq!(outcome.expectation_met, Some(false));
        assert_eq!(outcome.mismatches, vec!["isCorrect: expected true, got false"]);
    }

    #[test]
    fn test_no_expectation_passes() {
        let mut case = choice_case("b", CaseExpectation::default());
        case.expect = None;
        let outcome = evaluate_case(&case, &ValidationConfig::default());
        assert_eq!(outcome.expectation_met, None);
        assert!(outcome.passed());
    }

    #[test]
    fn test_batch_preserves_order() {
        let cases = vec![
            choice_case("a", CaseExpectation::default()),
            choice_case("b", CaseExpectation::default()),
        ];
        let report = evaluate_cases(&cases, &ValidationConfig::default());
        assert_eq!(report.total_cases, 2);
        assert_eq!(report.correct, 1);
        assert!(report.outcomes[0].result.is_correct);
        assert!(!report.outcomes[1].result.is_correct);
    }
}
