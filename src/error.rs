// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for loading configuration and grading cases.
//!
//! The validation engine itself never fails; these errors only surface at
//! the file and JSON boundaries around it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing grading inputs.
#[derive(Error, Debug)]
pub enum GradeError {
    /// A file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document did not match the expected shape.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory JSON payload did not match the expected shape.
    #[error("invalid {what} JSON: {source}")]
    Payload {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A TOML configuration file could not be parsed.
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration could not be serialised.
    #[error("failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type for grading I/O operations.
pub type GradeResult<T> = std::result::Result<T, GradeError>;
