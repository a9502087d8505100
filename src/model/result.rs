// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Graded validation results

use serde::{Deserialize, Serialize};

use crate::feedback::{FeedbackBuilder, FeedbackItem, FeedbackTarget};

/// Numeric comparison detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericValidation {
    pub is_within_tolerance: bool,
    pub percent_error: f64,
    pub absolute_error: f64,
    pub unit_correct: bool,
    pub sign_correct: bool,
}

/// Free-body diagram comparison detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DclValidation {
    pub forces_present: bool,
    pub forces_correct: bool,
    pub supports_correct: bool,
    pub directions_correct: bool,
    pub missing_forces: Vec<String>,
    pub extra_forces: Vec<String>,
    pub wrong_directions: Vec<String>,
}

/// Equation selection detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquationValidation {
    pub equations_selected: usize,
    pub equations_correct: bool,
    pub terms_correct: bool,
    pub signs_correct: bool,
    pub missing_equations: Vec<String>,
    pub wrong_equations: Vec<String>,
}

/// Wave sketch comparison detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveSketchValidation {
    pub amplitude_correct: bool,
    pub wavelength_correct: bool,
    pub phase_correct: bool,
    pub shape_correct: bool,
    /// Relative amplitude error (0.1 = 10%)
    pub amplitude_error: f64,
    /// Relative wavelength error (0.1 = 10%)
    pub wavelength_error: f64,
    pub phase_error: f64,
    /// Shape accuracy in `0..=100`
    pub overall_accuracy: f64,
}

/// Strategy-specific detail; a result carries at most one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationDetail {
    NumericValidation(NumericValidation),
    DclValidation(DclValidation),
    EquationValidation(EquationValidation),
    WaveSketchValidation(WaveSketchValidation),
}

/// Outcome of validating one answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_correct: bool,
    /// Score in `0..=100`
    pub score: u32,
    /// Partial credit in `0..=100`
    pub partial_credit: u32,
    pub feedback: Vec<FeedbackItem>,
    #[serde(default)]
    pub competencies_assessed: Vec<String>,
    #[serde(flatten)]
    pub detail: Option<ValidationDetail>,
}

impl ValidationResult {
    pub fn new(is_correct: bool, score: u32, feedback: Vec<FeedbackItem>) -> Self {
        let score = score.min(100);
        Self {
            is_correct,
            score,
            partial_credit: score,
            feedback,
            competencies_assessed: Vec::new(),
            detail: None,
        }
    }

    /// Zero-score result carrying a single error item
    pub fn failure(target: FeedbackTarget, message: impl Into<String>) -> Self {
        let mut fb = FeedbackBuilder::new();
        fb.error(target, message);
        Self::new(false, 0, fb.build())
    }

    pub fn with_detail(mut self, detail: ValidationDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_competencies(mut self, competencies: Vec<String>) -> Self {
        self.competencies_assessed = competencies;
        self
    }

    pub fn numeric(&self) -> Option<&NumericValidation> {
        match &self.detail {
            Some(ValidationDetail::NumericValidation(v)) => Some(v),
            _ => None,
        }
    }

    pub fn dcl(&self) -> Option<&DclValidation> {
        match &self.detail {
            Some(ValidationDetail::DclValidation(v)) => Some(v),
            _ => None,
        }
    }

    pub fn equations(&self) -> Option<&EquationValidation> {
        match &self.detail {
            Some(ValidationDetail::EquationValidation(v)) => Some(v),
            _ => None,
        }
    }

    pub fn wave_sketch(&self) -> Option<&WaveSketchValidation> {
        match &self.detail {
            Some(ValidationDetail::WaveSketchValidation(v)) => Some(v),
            _ => None,
        }
    }
}
