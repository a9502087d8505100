// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Statics Validator
//!
//! Answer validation engine for statics and wave exercises.
//! Grades multiple-choice, numeric, free-body diagram, equation selection,
//! multi-step, wave sketch, wave match and parameter identification answers
//! into a score, a correctness verdict and targeted feedback.

pub mod error;
pub mod evaluation;
pub mod feedback;
pub mod model;
pub mod utils;
pub mod validation;

#[cfg(any(feature = "wasm", feature = "napi"))]
pub mod ffi;

pub use error::{GradeError, GradeResult};
pub use feedback::{FeedbackItem, FeedbackKind, FeedbackTarget};
pub use model::{Question, QuestionType, UserAnswer, ValidationResult};
pub use utils::ToleranceType;
pub use validation::{validate, ValidationConfig};

/// Grade JSON-encoded inputs and return the JSON-encoded result. `config`
/// may be partial; missing fields take their defaults.
pub fn validate_json(question: &str, answer: &str, config: Option<&str>) -> GradeResult<String> {
    let question: Question = serde_json::from_str(question)
        .map_err(|source| GradeError::Payload { what: "question", source })?;
    let answer: UserAnswer = serde_json::from_str(answer)
        .map_err(|source| GradeError::Payload { what: "answer", source })?;
    let config: ValidationConfig = match config {
        Some(json) if !json.trim().is_empty() => serde_json::from_str(json)
            .map_err(|source| GradeError::Payload { what: "config", source })?,
        _ => ValidationConfig::default(),
    };

    let result = validate(&question, &answer, &config);
    serde_json::to_string(&result).map_err(|source| GradeError::Payload { what: "result", source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_json_numeric() {
        let question = r#"{"id": "q1", "type": "numeric",
                           "answer": {"value": 50, "unit": "N"}}"#;
        let answer = r#"{"numericValue": 50, "unit": "N"}"#;

        let json = validate_json(question, answer, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["isCorrect"], true);
        assert_eq!(value["score"], 100);
        assert!(value["numericValidation"].is_object());
    }

    #[test]
    fn test_validate_json_partial_config() {
        let question = r#"{"type": "numeric", "answer": {"value": 100}}"#;
        let answer = r#"{"numericValue": 104}"#;

        let strict = validate_json(question, answer, None).unwrap();
        let loose_config = r#"{"defaultNumericTolerance": 5}"#;
        let loose = validate_json(question, answer, Some(loose_config)).unwrap();
        assert!(strict.contains("\"isCorrect\":false"));
        assert!(loose.contains("\"isCorrect\":true"));
    }

    #[test]
    fn test_validate_json_rejects_bad_payload() {
        let err = validate_json("{", "{}", None).unwrap_err();
        assert!(matches!(err, GradeError::Payload { what: "question", .. }));
    }
}
