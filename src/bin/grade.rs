// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Command-line grader for statics and wave answers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use statics_validator::evaluation::{self, BatchReporter};
use statics_validator::validation::config::CONFIG_FILE;
use statics_validator::validation::ResultReporter;
use statics_validator::{validate, Question, UserAnswer, ValidationConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "statics-grade")]
#[command(about = "Grade statics and wave answers", long_about = None)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Grading configuration (TOML); defaults to grading.toml when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade one answer against one question
    Grade {
        /// Question JSON file
        #[arg(short, long)]
        question: PathBuf,

        /// Answer JSON file
        #[arg(short, long)]
        answer: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Also write the result as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Grade every case file under the given paths
    Batch {
        /// Case files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output directory for reports
        #[arg(short, long, default_value = "grading-reports")]
        output: PathBuf,
    },

    /// Write the effective configuration as TOML
    Config {
        /// Destination file
        #[arg(short, long, default_value = CONFIG_FILE)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Grade {
            question,
            answer,
            json,
            output,
        } => grade(question, answer, *json, output.as_deref(), &config),
        Commands::Batch { paths, output } => batch(paths, output, &config),
        Commands::Config { output } => {
            config
                .save(output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("{} {}", "✓ Configuration written to".green(), output.display());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ValidationConfig> {
    match path {
        Some(path) => Ok(ValidationConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?
            .with_env_overrides(|key| std::env::var(key).ok())),
        None => Ok(ValidationConfig::load()?),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn grade(
    question: &Path,
    answer: &Path,
    json: bool,
    output: Option<&Path>,
    config: &ValidationConfig,
) -> Result<()> {
    let question: Question = read_json(question)?;
    let answer: UserAnswer = read_json(answer)?;

    let result = validate(&question, &answer, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let title = if question.id.is_empty() {
            question.question_type.as_str().to_string()
        } else {
            question.id.clone()
        };
        ResultReporter::print_result(&title, &result);
    }

    if let Some(output) = output {
        ResultReporter::write_json(&result, output)?;
        if !json {
            println!("{} {}", "✓ Result written to".green(), output.display());
        }
    }

    Ok(())
}

fn batch(paths: &[PathBuf], output: &Path, config: &ValidationConfig) -> Result<()> {
    println!("{}", "Grading cases...".bold());

    let report = evaluation::run_batch(paths, config);
    evaluation::write_reports(&report, output)?;
    BatchReporter::print_summary(&report);

    println!(
        "\n{} {}",
        "Reports written to".white(),
        output.display().to_string().cyan()
    );

    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
