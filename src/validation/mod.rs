// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Answer validation engine
//!
//! [`validate`] dispatches on the question type to one strategy per type.
//! Every strategy is a pure function of its inputs and always returns a
//! complete [`ValidationResult`]; missing answers or specifications produce
//! zero-score results with explanatory feedback instead of errors.

pub mod choice;
pub mod config;
pub mod dcl;
pub mod equation;
pub mod multi_step;
pub mod numeric;
pub mod parameter;
pub mod reporter;
pub mod wave;

pub use config::ValidationConfig;
pub use dcl::{ANGLE_TOLERANCE_DEG, POSITION_TOLERANCE};
pub use reporter::ResultReporter;

use crate::feedback::FeedbackTarget;
use crate::model::{Question, QuestionType, UserAnswer, ValidationResult};

/// Grade `answer` against `question`
pub fn validate(
    question: &Question,
    answer: &UserAnswer,
    config: &ValidationConfig,
) -> ValidationResult {
    let _span = tracing::debug_span!(
        "validate",
        question = %question.id,
        kind = question.question_type.as_str()
    )
    .entered();

    let result = match question.question_type {
        QuestionType::MultipleChoice => choice::validate_multiple_choice(question, answer),
        QuestionType::Numeric => numeric::validate_numeric(question, answer, config),
        QuestionType::Dcl => dcl::validate_dcl(question, answer),
        QuestionType::EquationSelection => equation::validate_equations(question, answer),
        QuestionType::MultiStep => multi_step::validate_multi_step(question, answer, config),
        QuestionType::WaveSketch => wave::validate_wave_sketch(question, answer),
        QuestionType::WaveMatch => choice::validate_wave_match(question, answer),
        QuestionType::ParameterIdentify => parameter::validate_parameters(question, answer),
        QuestionType::Unknown => {
            tracing::warn!(question = %question.id, "unsupported question type");
            ValidationResult::failure(FeedbackTarget::FinalAnswer, "unsupported question type")
        }
    };

    tracing::debug!(score = result.score, correct = result.is_correct, "validated answer");
    result.with_competencies(question.competencies.clone())
}
