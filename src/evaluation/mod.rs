// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Batch grading of question/answer cases against recorded expectations

pub mod dataset;
pub mod reporter;
pub mod runner;

pub use dataset::{discover_cases, load_case, CaseExpectation, GradingCase};
pub use reporter::{BatchReport, BatchReporter, CaseError};
pub use runner::{evaluate_case, evaluate_cases, CaseOutcome};

use std::path::{Path, PathBuf};

use crate::error::{GradeError, GradeResult};
use crate::validation::ValidationConfig;

/// Discover, load and grade every case under `paths`. Files that fail to
/// load are recorded as errors in the report.
pub fn run_batch(paths: &[PathBuf], config: &ValidationConfig) -> BatchReport {
    let files = discover_cases(paths);
    tracing::debug!(count = files.len(), "discovered grading cases");

    let mut cases = Vec::with_capacity(files.len());
    let mut load_errors = Vec::new();
    for file in &files {
        match load_case(file) {
            Ok(case) => cases.push(case),
            Err(e) => {
                tracing::warn!(file = %file.display(), error = %e, "failed to load grading case");
                load_errors.push((file.display().to_string(), e.to_string()));
            }
        }
    }

    let mut report = evaluate_cases(&cases, config);
    for (case, error) in load_errors {
        report.add_error(case, error);
    }
    report
}

/// Write `batch_report.json` and `batch_report.md` into `output_dir`
pub fn write_reports(report: &BatchReport, output_dir: &Path) -> GradeResult<()> {
    std::fs::create_dir_all(output_dir).map_err(|source| GradeError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    BatchReporter::write_json(report, output_dir.join("batch_report.json"))?;
    BatchReporter::write_markdown(report, output_dir.join("batch_report.md"))?;
    Ok(())
}
