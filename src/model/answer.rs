// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Learner answers collected by the UI

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Point, WaveParameter};

/// A force arrow placed on the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedForce {
    pub name: String,
    /// Direction in degrees
    pub angle: f64,
    pub application_point: Point,
}

/// A support symbol placed on the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedSupport {
    #[serde(rename = "type")]
    pub support_type: String,
    pub position: Point,
}

/// Flat bag of answer fields; only those relevant to the question type are
/// read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAnswer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placed_forces: Vec<PlacedForce>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placed_supports: Vec<PlacedSupport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selected_equations: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub intermediate_values: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_answer: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub drawn_points: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_wave_option: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub identified_parameters: BTreeMap<WaveParameter, f64>,
}

impl UserAnswer {
    /// Selected option id, ignoring blank strings
    pub fn selection(&self) -> Option<&str> {
        self.selected_option.as_deref().filter(|s| !s.trim().is_empty())
    }
}
