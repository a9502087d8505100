// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Question, answer and result records exchanged with the UI

pub mod answer;
pub mod question;
pub mod result;

pub use answer::{PlacedForce, PlacedSupport, UserAnswer};
pub use question::{
    ChoiceOption, CommonMistake, DiagramSchema, EquationSpec, ExpectedAnswer, ExpectedAnswers,
    ExpectedForce, ExpectedSupport, MistakePattern, ParameterIdentifySpec, Question, QuestionType,
    WaveMatchSpec, WaveOption, WaveParameter, WaveParameters, WaveSketchSpec, WaveType,
};
pub use result::{
    DclValidation, EquationValidation, NumericValidation, ValidationDetail, ValidationResult,
    WaveSketchValidation,
};

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A 2D point in canvas units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}
