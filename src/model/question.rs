// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Question specifications supplied by the question bank

use serde::{Deserialize, Serialize};

use super::Point;
use crate::utils::ToleranceType;

/// Question type, selecting the validation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Numeric,
    Dcl,
    EquationSelection,
    MultiStep,
    WaveSketch,
    WaveMatch,
    ParameterIdentify,
    /// Any tag this engine does not know about
    #[serde(other)]
    Unknown,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::Numeric => "numeric",
            QuestionType::Dcl => "dcl",
            QuestionType::EquationSelection => "equation-selection",
            QuestionType::MultiStep => "multi-step",
            QuestionType::WaveSketch => "wave-sketch",
            QuestionType::WaveMatch => "wave-match",
            QuestionType::ParameterIdentify => "parameter-identify",
            QuestionType::Unknown => "unknown",
        }
    }
}

/// One expected numeric answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedAnswer {
    #[serde(default)]
    pub variable: String,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub tolerance: Option<f64>,
    #[serde(default)]
    pub tolerance_type: Option<ToleranceType>,
    #[serde(default)]
    pub significant_figures: Option<u32>,
}

impl ExpectedAnswer {
    pub fn new(value: f64) -> Self {
        Self {
            variable: String::new(),
            value,
            unit: None,
            tolerance: None,
            tolerance_type: None,
            significant_figures: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64, tolerance_type: ToleranceType) -> Self {
        self.tolerance = Some(tolerance);
        self.tolerance_type = Some(tolerance_type);
        self
    }

    /// Expected unit, ignoring blank strings
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// A question may carry a single expected answer or a list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedAnswers {
    Single(ExpectedAnswer),
    Many(Vec<ExpectedAnswer>),
}

impl ExpectedAnswers {
    /// The answer graded by single-value strategies (the first one)
    pub fn primary(&self) -> Option<&ExpectedAnswer> {
        match self {
            ExpectedAnswers::Single(answer) => Some(answer),
            ExpectedAnswers::Many(answers) => answers.first(),
        }
    }
}

impl From<ExpectedAnswer> for ExpectedAnswers {
    fn from(answer: ExpectedAnswer) -> Self {
        ExpectedAnswers::Single(answer)
    }
}

/// Multiple-choice option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// A force the learner is expected to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedForce {
    pub name: String,
    /// Direction in degrees
    pub angle: f64,
    pub position: Point,
}

/// A support the learner is expected to place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedSupport {
    #[serde(rename = "type")]
    pub support_type: String,
    pub position: Point,
}

/// Reference free-body diagram
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSchema {
    #[serde(default)]
    pub correct_forces: Vec<ExpectedForce>,
    #[serde(default)]
    pub correct_supports: Vec<ExpectedSupport>,
}

impl DiagramSchema {
    pub fn is_empty(&self) -> bool {
        self.correct_forces.is_empty() && self.correct_supports.is_empty()
    }
}

/// Equilibrium equations the learner must select
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationSpec {
    #[serde(default)]
    pub required: Vec<String>,
}

/// Signature of a known wrong answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MistakePattern {
    /// Matches values close to `value` (percent tolerance, 2% by default)
    Value {
        value: f64,
        #[serde(default)]
        tolerance: Option<f64>,
    },
    /// Matches values in `min..=max`
    Range { min: f64, max: f64 },
    /// Matches the submitted value's string form
    Regex { pattern: String },
}

/// A patterned wrong answer with remedial feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonMistake {
    pub pattern: MistakePattern,
    pub message: String,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Shape of an analytic wave
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveType {
    #[default]
    Sine,
    Cosine,
}

/// Expected curve for a free-hand wave sketch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveSketchSpec {
    pub amplitude: f64,
    #[serde(default)]
    pub wavelength: Option<f64>,
    #[serde(default)]
    pub frequency: Option<f64>,
    /// Phase offset in radians
    #[serde(default)]
    pub phase: f64,
    #[serde(default)]
    pub wave_type: WaveType,
}

/// Option in a wave-equation matching question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveOption {
    pub id: String,
    pub equation: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveMatchSpec {
    #[serde(default)]
    pub options: Vec<WaveOption>,
}

/// A wave parameter a learner can be asked to identify
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveParameter {
    Amplitude,
    Wavelength,
    Frequency,
    Period,
    Phase,
}

impl WaveParameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveParameter::Amplitude => "amplitude",
            WaveParameter::Wavelength => "wavelength",
            WaveParameter::Frequency => "frequency",
            WaveParameter::Period => "period",
            WaveParameter::Phase => "phase",
        }
    }
}

/// Known parameters of the displayed wave
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveParameters {
    #[serde(default)]
    pub amplitude: Option<f64>,
    #[serde(default)]
    pub wavelength: Option<f64>,
    #[serde(default)]
    pub frequency: Option<f64>,
    #[serde(default)]
    pub phase: Option<f64>,
}

impl WaveParameters {
    /// Reference value for a parameter; the period is derived from the
    /// frequency.
    pub fn expected(&self, parameter: WaveParameter) -> Option<f64> {
        match parameter {
            WaveParameter::Amplitude => self.amplitude,
            WaveParameter::Wavelength => self.wavelength,
            WaveParameter::Frequency => self.frequency,
            WaveParameter::Period => self.frequency.filter(|f| *f != 0.0).map(|f| 1.0 / f),
            WaveParameter::Phase => self.phase,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterIdentifySpec {
    #[serde(default)]
    pub wave: WaveParameters,
    #[serde(default)]
    pub parameters: Vec<WaveParameter>,
}

/// A question as supplied by the question bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<ExpectedAnswers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ChoiceOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<DiagramSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equations: Option<EquationSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_mistakes: Vec<CommonMistake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_sketch: Option<WaveSketchSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_match: Option<WaveMatchSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_identify: Option<ParameterIdentifySpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub competencies: Vec<String>,
}

impl Question {
    /// Create an empty question of the given type
    pub fn new(question_type: QuestionType) -> Self {
        Self {
            id: String::new(),
            question_type,
            answer: None,
            options: None,
            schema: None,
            equations: None,
            common_mistakes: Vec::new(),
            wave_sketch: None,
            wave_match: None,
            parameter_identify: None,
            competencies: Vec::new(),
        }
    }

    /// First expected answer, if any
    pub fn primary_answer(&self) -> Option<&ExpectedAnswer> {
        self.answer.as_ref().and_then(ExpectedAnswers::primary)
    }
}
