// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grading case discovery and loading

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{GradeError, GradeResult};
use crate::model::{Question, UserAnswer};

/// Expected outcome of grading a case
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseExpectation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

/// A question, a student answer and what grading should produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub question: Question,
    #[serde(default)]
    pub answer: UserAnswer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<CaseExpectation>,
}

impl GradingCase {
    pub fn new(question: Question, answer: UserAnswer) -> Self {
        Self {
            name: None,
            question,
            answer,
            expect: None,
        }
    }

    pub fn with_expectation(mut self, expect: CaseExpectation) -> Self {
        self.expect = Some(expect);
        self
    }

    /// Display name: explicit name, else question id, else "unnamed"
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ if !self.question.id.is_empty() => self.question.id.clone(),
            _ => "unnamed".to_string(),
        }
    }
}

/// Load a single grading case from a JSON file. Unnamed cases take the file
/// stem as their name.
pub fn load_case(path: impl AsRef<Path>) -> GradeResult<GradingCase> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| GradeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut case: GradingCase =
        serde_json::from_str(&content).map_err(|source| GradeError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    if case.name.is_none() {
        case.name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string);
    }
    Ok(case)
}

/// Collect `*.json` files from the given files and directories, sorted
pub fn discover_cases(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut cases = Vec::new();

    for path in paths {
        if path.is_file() && is_json(path) {
            cases.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let entry_path = entry.path();
                if entry_path.is_file() && is_json(entry_path) {
                    cases.push(entry_path.to_path_buf());
                }
            }
        }
    }

    cases.sort();
    cases.dedup();
    cases
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
