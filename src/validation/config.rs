// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grading configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GradeError, GradeResult};
use crate::utils::ToleranceType;

/// Default configuration file looked up by [`ValidationConfig::load`]
pub const CONFIG_FILE: &str = "grading.toml";

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationConfig {
    /// Tolerance used when an expected answer has none (percent points for
    /// percent tolerances)
    pub default_numeric_tolerance: f64,
    /// Tolerance type used when an expected answer has none
    pub default_tolerance_type: ToleranceType,
    /// Award partial credit for near-miss numeric answers
    pub enable_partial_credit: bool,
    /// Weight of the diagram step in multi-step questions
    pub dcl_weight: f64,
    /// Weight of the equation step in multi-step questions
    pub equation_weight: f64,
    /// Weight of the calculation step in multi-step questions
    pub calculation_weight: f64,
    /// Reject numeric answers with a wrong unit
    pub require_correct_units: bool,
    /// Advisory; the sign is always checked
    pub require_correct_sign: bool,
    /// Not consulted by any strategy yet
    pub significant_figures_check: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_numeric_tolerance: 2.0,
            default_tolerance_type: ToleranceType::Percent,
            enable_partial_credit: true,
            dcl_weight: 0.3,
            equation_weight: 0.3,
            calculation_weight: 0.4,
            require_correct_units: true,
            require_correct_sign: true,
            significant_figures_check: false,
        }
    }
}

impl ValidationConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GradeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GradeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| GradeError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `grading.toml` from the working directory when present, then
    /// apply environment variable overrides
    pub fn load() -> GradeResult<Self> {
        let config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from an environment lookup. Unparseable values are
    /// ignored.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(tolerance) = lookup("GRADING_DEFAULT_TOLERANCE").and_then(|v| v.parse().ok()) {
            self.default_numeric_tolerance = tolerance;
        }

        if let Some(kind) = lookup("GRADING_TOLERANCE_TYPE") {
            match kind.trim().to_lowercase().as_str() {
                "percent" => self.default_tolerance_type = ToleranceType::Percent,
                "absolute" => self.default_tolerance_type = ToleranceType::Absolute,
                other => tracing::warn!(value = other, "ignoring unknown GRADING_TOLERANCE_TYPE"),
            }
        }

        if let Some(partial) = lookup("GRADING_PARTIAL_CREDIT").and_then(|v| v.parse().ok()) {
            self.enable_partial_credit = partial;
        }

        if let Some(units) = lookup("GRADING_REQUIRE_UNITS").and_then(|v| v.parse().ok()) {
            self.require_correct_units = units;
        }

        self
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> GradeResult<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| GradeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
