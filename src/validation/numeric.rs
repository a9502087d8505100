// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tolerance-based grading of numeric answers

use regex::Regex;

use super::ValidationConfig;
use crate::feedback::{FeedbackBuilder, FeedbackItem, FeedbackKind, FeedbackTarget};
use crate::model::{
    CommonMistake, ExpectedAnswer, MistakePattern, NumericValidation, Question, UserAnswer,
    ValidationDetail, ValidationResult,
};
use crate::utils::{
    percent_error, same_sign, to_score, units_equivalent, within_tolerance, ToleranceType,
};

/// Percent tolerance for `value` mistake patterns without their own
pub const MISTAKE_VALUE_TOLERANCE: f64 = 2.0;

/// Score for a value inside tolerance but carrying the wrong unit
pub const WRONG_UNIT_SCORE: u32 = 80;

/// Percent error at or beyond which no partial credit is given
const PARTIAL_CREDIT_CUTOFF: f64 = 50.0;

pub fn validate_numeric(
    question: &Question,
    answer: &UserAnswer,
    config: &ValidationConfig,
) -> ValidationResult {
    let Some(expected) = question.primary_answer() else {
        return ValidationResult::failure(
            FeedbackTarget::FinalAnswer,
            "No expected answer defined for this question",
        );
    };

    grade_value(
        expected,
        answer.numeric_value,
        answer.unit.as_deref(),
        &question.common_mistakes,
        config,
    )
}

/// Grade a single submitted value against an expected answer. Shared by the
/// numeric strategy and the calculation step of multi-step questions.
pub fn grade_value(
    expected: &ExpectedAnswer,
    value: Option<f64>,
    unit: Option<&str>,
    mistakes: &[CommonMistake],
    config: &ValidationConfig,
) -> ValidationResult {
    let target = FeedbackTarget::FinalAnswer;

    let Some(value) = value.filter(|v| v.is_finite()) else {
        let mut fb = FeedbackBuilder::new();
        fb.error(target, "No numeric answer provided");
        return ValidationResult::new(false, 0, fb.build()).with_detail(
            ValidationDetail::NumericValidation(NumericValidation {
                is_within_tolerance: false,
                percent_error: 100.0,
                absolute_error: expected.value.abs(),
                unit_correct: false,
                sign_correct: true,
            }),
        );
    };

    let mut fb = FeedbackBuilder::new();

    if let Some(mistake) = find_common_mistake(value, mistakes) {
        let mut item = FeedbackItem::new(FeedbackKind::Warning, target, mistake.message.clone());
        if let Some(ref hint) = mistake.hint {
            item = item.with_suggestion(hint.clone());
        }
        fb.push(item);
    }

    let tolerance = expected.tolerance.unwrap_or(config.default_numeric_tolerance);
    let tolerance_type = expected.tolerance_type.unwrap_or(config.default_tolerance_type);

    let is_within_tolerance = within_tolerance(value, expected.value, tolerance, tolerance_type);
    let sign_correct = same_sign(value, expected.value);
    let unit_correct = match expected.unit() {
        Some(expected_unit) if config.require_correct_units => {
            unit.is_some_and(|u| units_equivalent(u, expected_unit))
        }
        _ => true,
    };

    let absolute_error = (value - expected.value).abs();
    let pct_error = percent_error(value, expected.value);

    let is_correct = is_within_tolerance && (unit_correct || !config.require_correct_units);

    let score = if is_correct {
        100
    } else if config.enable_partial_credit {
        if is_within_tolerance && !unit_correct {
            WRONG_UNIT_SCORE
        } else if sign_correct && pct_error < PARTIAL_CREDIT_CUTOFF {
            to_score(PARTIAL_CREDIT_CUTOFF - pct_error)
        } else {
            0
        }
    } else {
        0
    };

    let expected_display = format_expected(expected);

    if is_correct {
        fb.success(target, format!("Correct! {} is within tolerance", expected_display));
    } else {
        if !sign_correct {
            fb.push(
                FeedbackItem::new(FeedbackKind::Error, target, "The sign of your answer is wrong")
                    .with_suggestion("Check the direction you assumed for the unknown"),
            );
        }
        if !is_within_tolerance {
            let allowed = match tolerance_type {
                ToleranceType::Percent => format!("±{}%", tolerance),
                ToleranceType::Absolute => format!("±{}", tolerance),
            };
            fb.push(
                FeedbackItem::new(
                    FeedbackKind::Error,
                    target,
                    format!("Your answer is off by {:.1}% (allowed {})", pct_error, allowed),
                )
                .with_suggestion(format!("Expected {}", expected_display)),
            );
        }
        if config.require_correct_units && !unit_correct {
            let expected_unit = expected.unit().unwrap_or_default();
            let message = match unit.filter(|u| !u.trim().is_empty()) {
                Some(u) => format!("Wrong unit \"{}\"; expected {}", u.trim(), expected_unit),
                None => format!("Missing unit; expected {}", expected_unit),
            };
            fb.warning(target, message);
        }
    }

    ValidationResult::new(is_correct, score, fb.build()).with_detail(
        ValidationDetail::NumericValidation(NumericValidation {
            is_within_tolerance,
            percent_error: pct_error,
            absolute_error,
            unit_correct,
            sign_correct,
        }),
    )
}

/// First common mistake whose pattern matches the submitted value
pub fn find_common_mistake(value: f64, mistakes: &[CommonMistake]) -> Option<&CommonMistake> {
    mistakes.iter().find(|m| pattern_matches(&m.pattern, value))
}

fn pattern_matches(pattern: &MistakePattern, value: f64) -> bool {
    match pattern {
        MistakePattern::Value {
            value: wrong,
            tolerance,
        } => within_tolerance(
            value,
            *wrong,
            tolerance.unwrap_or(MISTAKE_VALUE_TOLERANCE),
            ToleranceType::Percent,
        ),
        MistakePattern::Range { min, max } => *min <= value && value <= *max,
        MistakePattern::Regex { pattern } => match Regex::new(pattern) {
            Ok(re) => re.is_match(&value.to_string()),
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "ignoring invalid mistake pattern");
                false
            }
        },
    }
}

fn format_expected(expected: &ExpectedAnswer) -> String {
    match expected.unit() {
        Some(unit) => format!("{} {}", expected.value, unit),
        None => expected.value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionType;
    use approx::assert_relative_eq;

    fn question(expected: ExpectedAnswer) -> Question {
        Question {
            answer: Some(expected.into()),
            ..Question::new(QuestionType::Numeric)
        }
    }

    fn submit(value: f64, unit: &str) -> UserAnswer {
        UserAnswer {
            numeric_value: Some(value),
            unit: Some(unit.into()),
            ..Default::default()
        }
    }

    fn fifty_newtons() -> Question {
        question(
            ExpectedAnswer::new(50.0)
                .with_unit("N")
                .with_tolerance(2.0, ToleranceType::Percent),
        )
    }

    #[test]
    fn test_within_tolerance_is_correct() {
        let result = validate_numeric(&fifty_newtons(), &submit(49.0, "N"), &Default::default());
        assert!(result.is_correct);
        assert_eq!(result.score, 100);
        assert_eq!(result.feedback[0].kind, FeedbackKind::Success);
    }

    #[test]
    fn test_missing_value() {
        let result =
            validate_numeric(&fifty_newtons(), &UserAnswer::default(), &Default::default());
        let detail = result.numeric().unwrap();
        assert_eq!(result.score, 0);
        assert!(!detail.is_within_tolerance);
        assert_eq!(detail.absolute_error, 50.0);
        assert!(!detail.unit_correct);
        assert!(detail.sign_correct);
        assert_eq!(result.feedback[0].kind, FeedbackKind::Error);
    }

    #[test]
    fn test_wrong_unit_scores_eighty() {
        let result = validate_numeric(&fifty_newtons(), &submit(50.0, "kN"), &Default::default());
        assert!(!result.is_correct);
        assert_eq!(result.score, WRONG_UNIT_SCORE);
        assert!(result
            .feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::Warning && f.message.contains("kN")));
    }

    #[test]
    fn test_unit_synonym_accepted() {
        let result =
            validate_numeric(&fifty_newtons(), &submit(50.0, "newtons"), &Default::default());
        assert!(result.is_correct);
    }

    #[test]
    fn test_units_not_required() {
        let config = ValidationConfig {
            require_correct_units: false,
            ..Default::default()
        };
        let result = validate_numeric(&fifty_newtons(), &submit(50.0, "kN"), &config);
        assert!(result.is_correct);
        assert!(result.numeric().unwrap().unit_correct);
    }

    #[test]
    fn test_partial_credit() {
        // 10% off: 50 - 10 = 40
        let result = validate_numeric(&fifty_newtons(), &submit(55.0, "N"), &Default::default());
        assert!(!result.is_correct);
        assert_eq!(result.score, 40);
        assert_relative_eq!(result.numeric().unwrap().percent_error, 10.0, epsilon = 1e-9);

        let config = ValidationConfig {
            enable_partial_credit: false,
            ..Default::default()
        };
        let result = validate_numeric(&fifty_newtons(), &submit(55.0, "N"), &config);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_wrong_sign() {
        let result = validate_numeric(&fifty_newtons(), &submit(-50.0, "N"), &Default::default());
        let detail = result.numeric().unwrap();
        assert!(!detail.sign_correct);
        assert_eq!(result.score, 0);
        assert!(result
            .feedback
            .iter()
            .any(|f| f.message.contains("sign")));
    }

    #[test]
    fn test_common_mistake_warns_but_grades() {
        let mut q = fifty_newtons();
        q.common_mistakes = vec![CommonMistake {
            pattern: MistakePattern::Value {
                value: 25.0,
                tolerance: None,
            },
            message: "You may have split the load between both supports".into(),
            hint: Some("Only one support carries the vertical load".into()),
        }];

        let result = validate_numeric(&q, &submit(25.2, "N"), &Default::default());
        assert_eq!(result.feedback[0].kind, FeedbackKind::Warning);
        assert!(result.feedback[0].suggestion.is_some());
        assert!(!result.is_correct);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_mistake_patterns() {
        let range = MistakePattern::Range { min: 0.04, max: 0.06 };
        assert!(pattern_matches(&range, 0.05));
        assert!(!pattern_matches(&range, 50.0));

        let regex = MistakePattern::Regex {
            pattern: "^-".into(),
        };
        assert!(pattern_matches(&regex, -50.0));
        assert!(!pattern_matches(&regex, 50.0));

        let broken = MistakePattern::Regex {
            pattern: "([".into(),
        };
        assert!(!pattern_matches(&broken, 50.0));
    }

    #[test]
    fn test_zero_expected() {
        let q = question(ExpectedAnswer::new(0.0).with_tolerance(5.0, ToleranceType::Percent));
        let exact = validate_numeric(&q, &submit(0.0, ""), &Default::default());
        assert!(exact.is_correct);

        let off = validate_numeric(&q, &submit(-0.3, ""), &Default::default());
        assert!(!off.is_correct);
        assert!(off.numeric().unwrap().sign_correct);
        assert_eq!(off.numeric().unwrap().percent_error, 100.0);
    }

    #[test]
    fn test_absolute_tolerance_from_config() {
        let q = question(ExpectedAnswer::new(12.0));
        let config = ValidationConfig {
            default_numeric_tolerance: 0.5,
            default_tolerance_type: ToleranceType::Absolute,
            ..Default::default()
        };
        assert!(validate_numeric(&q, &submit(12.4, ""), &config).is_correct);
        assert!(!validate_numeric(&q, &submit(12.6, ""), &config).is_correct);
    }

    #[test]
    fn test_no_expected_answer() {
        let q = Question::new(QuestionType::Numeric);
        let result = validate_numeric(&q, &submit(1.0, "N"), &Default::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.feedback.len(), 1);
    }
}
