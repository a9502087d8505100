// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rendering of single validation results for terminals and documents

use colored::{ColoredString, Colorize};
use std::path::Path;

use crate::error::{GradeError, GradeResult};
use crate::feedback::{FeedbackItem, FeedbackKind};
use crate::model::{ValidationDetail, ValidationResult};

/// Validation result reporter
pub struct ResultReporter;

impl ResultReporter {
    /// Write JSON result
    pub fn write_json(result: &ValidationResult, path: impl AsRef<Path>) -> GradeResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(result).map_err(|source| GradeError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| GradeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render a result as Markdown
    pub fn to_markdown(title: &str, result: &ValidationResult) -> String {
        let mut md = String::new();

        md.push_str(&format!("### {}\n\n", title));
        md.push_str(&format!(
            "- **Result:** {}\n",
            if result.is_correct { "correct" } else { "incorrect" }
        ));
        md.push_str(&format!("- **Score:** {}/100\n", result.score));
        if !result.competencies_assessed.is_empty() {
            md.push_str(&format!(
                "- **Competencies:** {}\n",
                result.competencies_assessed.join(", ")
            ));
        }
        for line in Self::detail_lines(result) {
            md.push_str(&format!("- {}\n", line));
        }

        if !result.feedback.is_empty() {
            md.push_str("\n| Kind | Target | Message | Suggestion |\n");
            md.push_str("|------|--------|---------|------------|\n");
            for item in &result.feedback {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    item.kind.as_str(),
                    item.target.as_str(),
                    item.message.replace('|', "\\|"),
                    item.suggestion.as_deref().unwrap_or("").replace('|', "\\|")
                ));
            }
        }
        md.push('\n');
        md
    }

    /// Print a result with colored feedback
    pub fn print_result(title: &str, result: &ValidationResult) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Question:".bold(), title.cyan());
        println!("{}", "━".repeat(80).bright_black());

        if result.is_correct {
            println!("{} {}", "✅".green(), "Correct".green().bold());
        } else {
            println!("{} {}", "❌".red(), "Incorrect".red().bold());
        }
        println!("  {} {}", "Score:".bright_black(), Self::score_colored(result.score));

        let details = Self::detail_lines(result);
        if !details.is_empty() {
            println!("\n{}", "Details:".bold());
            for line in details {
                println!("  {}", line.bright_black());
            }
        }

        if !result.feedback.is_empty() {
            println!("\n{}", "Feedback:".bold());
            for item in &result.feedback {
                Self::print_feedback(item);
            }
        }

        println!("{}", "━".repeat(80).bright_black());
    }

    fn print_feedback(item: &FeedbackItem) {
        let label = match item.kind {
            FeedbackKind::Success => "✓".green(),
            FeedbackKind::Error => "✗".red(),
            FeedbackKind::Warning => "!".yellow(),
            FeedbackKind::Hint => "?".bright_blue(),
            FeedbackKind::Info => "i".bright_blue(),
        };
        println!(
            "  {} {} {}",
            label,
            format!("[{}]", item.target.as_str()).bright_black(),
            item.message
        );
        if let Some(ref suggestion) = item.suggestion {
            println!("      {} {}", "→".bright_black(), suggestion.italic());
        }
    }

    pub(crate) fn score_colored(score: u32) -> ColoredString {
        let text = format!("{}/100", score);
        if score >= 90 {
            text.green()
        } else if score >= 50 {
            text.yellow()
        } else {
            text.red()
        }
    }

    /// One line per field of the typed detail
    fn detail_lines(result: &ValidationResult) -> Vec<String> {
        match &result.detail {
            Some(ValidationDetail::NumericValidation(n)) => vec![
                format!("Within tolerance: {}", n.is_within_tolerance),
                format!("Percent error: {:.2}%", n.percent_error),
                format!("Absolute error: {}", n.absolute_error),
                format!("Unit correct: {}", n.unit_correct),
                format!("Sign correct: {}", n.sign_correct),
            ],
            Some(ValidationDetail::DclValidation(d)) => vec![
                format!("Missing forces: {}", list_or_none(&d.missing_forces)),
                format!("Extra forces: {}", list_or_none(&d.extra_forces)),
                format!("Wrong directions: {}", list_or_none(&d.wrong_directions)),
                format!("Supports correct: {}", d.supports_correct),
            ],
            Some(ValidationDetail::EquationValidation(e)) => vec![
                format!("Equations selected: {}", e.equations_selected),
                format!("Missing equations: {}", list_or_none(&e.missing_equations)),
                format!("Unnecessary equations: {}", list_or_none(&e.wrong_equations)),
            ],
            Some(ValidationDetail::WaveSketchValidation(w)) => vec![
                format!(
                    "Amplitude: {} ({:.1}% error)",
                    w.amplitude_correct,
                    w.amplitude_error * 100.0
                ),
                format!(
                    "Wavelength: {} ({:.1}% error)",
                    w.wavelength_correct,
                    w.wavelength_error * 100.0
                ),
                format!("Shape accuracy: {:.1}%", w.overall_accuracy),
            ],
            None => Vec::new(),
        }
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
