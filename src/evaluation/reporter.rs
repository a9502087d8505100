// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Batch report generation (JSON, Markdown and terminal)

use chrono::Utc;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::runner::CaseOutcome;
use crate::error::{GradeError, GradeResult};
use crate::validation::ResultReporter;

/// A case file that could not be loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseError {
    pub case: String,
    pub error: String,
}

/// Complete batch report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub timestamp: String,
    pub total_cases: usize,
    /// Cases whose expectation was met, or that had none
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    /// Cases graded as correct answers
    pub correct: usize,
    pub mean_score: f64,
    pub outcomes: Vec<CaseOutcome>,
    pub error_details: Vec<CaseError>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            total_cases: 0,
            passed: 0,
            failed: 0,
            errors: 0,
            correct: 0,
            mean_score: 0.0,
            outcomes: Vec::new(),
            error_details: Vec::new(),
        }
    }

    pub fn add_outcome(&mut self, outcome: CaseOutcome) {
        if outcome.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        if outcome.result.is_correct {
            self.correct += 1;
        }

        self.total_cases += 1;
        self.outcomes.push(outcome);

        let total_score: f64 = self.outcomes.iter().map(|o| o.result.score as f64).sum();
        self.mean_score = total_score / self.outcomes.len() as f64;
    }

    pub fn add_error(&mut self, case: String, error: String) {
        self.total_cases += 1;
        self.errors += 1;
        self.error_details.push(CaseError { case, error });
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total_cases == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total_cases as f64) * 100.0
        }
    }

    /// True when any case failed its expectation or could not be loaded
    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.errors > 0
    }
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Batch report writer
pub struct BatchReporter;

impl BatchReporter {
    /// Write JSON report
    pub fn write_json(report: &BatchReport, path: impl AsRef<Path>) -> GradeResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(report).map_err(|source| GradeError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| GradeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write Markdown report
    pub fn write_markdown(report: &BatchReport, path: impl AsRef<Path>) -> GradeResult<()> {
        let path = path.as_ref();
        fs::write(path, Self::to_markdown(report)).map_err(|source| GradeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_markdown(report: &BatchReport) -> String {
        let mut md = String::new();

        md.push_str("# Grading Report\n\n");

        md.push_str("## Summary\n\n");
        md.push_str(&format!("- **Total Cases**: {}\n", report.total_cases));
        md.push_str(&format!(
            "- **Passed**: {} ({:.1}%)\n",
            report.passed,
            report.pass_rate()
        ));
        md.push_str(&format!("- **Failed**: {}\n", report.failed));
        md.push_str(&format!("- **Errors**: {}\n", report.errors));
        md.push_str(&format!("- **Graded Correct**: {}\n", report.correct));
        md.push_str(&format!("- **Mean Score**: {:.1}\n\n", report.mean_score));

        md.push_str("## Detailed Results\n\n");
        md.push_str("| Case | Type | Correct | Score | Expectation | Time |\n");
        md.push_str("|------|------|---------|-------|-------------|------|\n");
        for outcome in &report.outcomes {
            let expectation = match outcome.expectation_met {
                Some(true) => "✅",
                Some(false) => "❌",
                None => "–",
            };
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {}µs |\n",
                outcome.name,
                outcome.question_type,
                if outcome.result.is_correct { "yes" } else { "no" },
                outcome.result.score,
                expectation,
                outcome.time_us
            ));
        }

        if report.failed > 0 {
            md.push_str("\n## Failed Cases\n\n");
            for outcome in report.outcomes.iter().filter(|o| !o.passed()) {
                md.push_str(&format!("- ❌ **{}**\n", outcome.name));
                for mismatch in &outcome.mismatches {
                    md.push_str(&format!("  - {}\n", mismatch));
                }
                md.push('\n');
                md.push_str(&ResultReporter::to_markdown(&outcome.name, &outcome.result));
            }
        }

        if report.errors > 0 {
            md.push_str("\n## Load Errors\n\n");
            for error in &report.error_details {
                md.push_str(&format!("- ⚠️ **{}**\n", error.case));
                md.push_str(&format!("  ```\n  {}\n  ```\n", error.error));
            }
        }

        md.push_str(&format!("\n---\n\n*Generated on {}*\n", report.timestamp));
        md
    }

    /// Print a colored summary to stdout
    pub fn print_summary(report: &BatchReport) {
        println!("\n{}", "═".repeat(80).white());
        println!("{}", "Grading Report".bold());
        println!("{}", "═".repeat(80).white());
        println!("  {} {}", "Timestamp:".white(), report.timestamp.cyan());
        println!(
            "  {} {}",
            "Total Cases:".white(),
            report.total_cases.to_string().cyan()
        );
        println!(
            "  {} {} ({:.1}%)",
            "Passed:".white(),
            report.passed.to_string().green(),
            report.pass_rate()
        );
        println!(
            "  {} {}",
            "Failed:".white(),
            if report.failed > 0 {
                report.failed.to_string().red()
            } else {
                report.failed.to_string().white()
            }
        );
        println!(
            "  {} {}",
            "Errors:".white(),
            if report.errors > 0 {
                report.errors.to_string().yellow()
            } else {
                report.errors.to_string().white()
            }
        );
        println!(
            "  {} {:.1}",
            "Mean Score:".white(),
            report.mean_score
        );

        println!("\n{}", "Cases".bold());
        println!("{}", "─".repeat(80).white());
        for outcome in &report.outcomes {
            let icon = if outcome.passed() {
                "✅".green()
            } else {
                "❌".red()
            };
            println!(
                "  {} {:<40} {:<20} {}",
                icon,
                outcome.name,
                outcome.question_type.bright_black(),
                ResultReporter::score_colored(outcome.result.score)
            );
            for mismatch in &outcome.mismatches {
                println!("       {}", mismatch.red());
            }
        }

        if report.errors > 0 {
            println!("\n{}", "Load Errors".yellow().bold());
            println!("{}", "─".repeat(80).white());
            for error in &report.error_details {
                println!("  {} {}", "⚠".yellow(), error.case.bold());
                println!("       {}", error.error.white());
            }
        }

        println!("{}", "═".repeat(80).white());
    }
}
