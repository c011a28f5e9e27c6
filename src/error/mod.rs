// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-msg.
//!
//! Validation failures are not errors: they are [`Outcome`](crate::rules::Outcome)
//! values. The types here cover the collaborators around the validator,
//! i.e. configuration layers and the message file.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-msg operations.
#[derive(Error, Debug)]
pub enum CommitMsgError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
///
/// None of these are fatal: the offending layer is logged and skipped.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {message}")]
    ReadError { path: PathBuf, message: String },

    #[error("Failed to parse configuration {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Denied types {denied:?} would leave no allowed commit type")]
    NoAllowedTypes { denied: Vec<String> },
}

/// Failures while obtaining the commit message text.
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("No commit message file given")]
    ArgumentMissing,

    #[error("Commit message file not found: {path}")]
    FileMissing { path: PathBuf },

    #[error("{path} is not a file")]
    NotAFile { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for commit-msg operations.
pub type Result<T> = std::result::Result<T, CommitMsgError>;
