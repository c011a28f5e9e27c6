// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal results of a validation run.

use crate::error::MessageError;
use serde::Serialize;
use std::path::PathBuf;

/// Classification of an [`Outcome`], carrying the stable status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutcomeKind {
    Validated,
    Merge,
    ArgumentMissing,
    FileMissing,
    ReadError,
    EmptyMessage,
    EmptyHeader,
    BadHeaderFormat,
    WrongType,
    BodyMissing,
    NoBlankLineBeforeBody,
    LineOverLong,
}

impl OutcomeKind {
    /// Stable numeric code of this kind.
    pub fn code(self) -> i32 {
        match self {
            OutcomeKind::Validated => 0,
            OutcomeKind::Merge => 1,
            OutcomeKind::ArgumentMissing => 2,
            OutcomeKind::FileMissing => 3,
            OutcomeKind::ReadError => 4,
            OutcomeKind::EmptyMessage => 5,
            OutcomeKind::EmptyHeader => 6,
            OutcomeKind::BadHeaderFormat => 7,
            OutcomeKind::WrongType => 8,
            OutcomeKind::BodyMissing => 9,
            OutcomeKind::NoBlankLineBeforeBody => 10,
            OutcomeKind::LineOverLong => 11,
        }
    }

    /// Kebab-case identifier, as used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeKind::Validated => "validated",
            OutcomeKind::Merge => "merge",
            OutcomeKind::ArgumentMissing => "argument-missing",
            OutcomeKind::FileMissing => "file-missing",
            OutcomeKind::ReadError => "read-error",
            OutcomeKind::EmptyMessage => "empty-message",
            OutcomeKind::EmptyHeader => "empty-header",
            OutcomeKind::BadHeaderFormat => "bad-header-format",
            OutcomeKind::WrongType => "wrong-type",
            OutcomeKind::BodyMissing => "body-missing",
            OutcomeKind::NoBlankLineBeforeBody => "no-blank-line-before-body",
            OutcomeKind::LineOverLong => "line-over-long",
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single result of validating one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every check passed.
    Validated,
    /// Merge commit; validation skipped.
    Merge,
    ArgumentMissing,
    FileMissing { path: PathBuf },
    ReadError { path: PathBuf },
    EmptyMessage,
    EmptyHeader,
    BadHeaderFormat { header: String },
    WrongType { commit_type: String, allowed: String },
    BodyMissing,
    NoBlankLineBeforeBody,
    LineOverLong { length: usize, limit: usize, line: String },
}

impl Outcome {
    /// The kind of this outcome.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Validated => OutcomeKind::Validated,
            Outcome::Merge => OutcomeKind::Merge,
            Outcome::ArgumentMissing => OutcomeKind::ArgumentMissing,
            Outcome::FileMissing { .. } => OutcomeKind::FileMissing,
            Outcome::ReadError { .. } => OutcomeKind::ReadError,
            Outcome::EmptyMessage => OutcomeKind::EmptyMessage,
            Outcome::EmptyHeader => OutcomeKind::EmptyHeader,
            Outcome::BadHeaderFormat { .. } => OutcomeKind::BadHeaderFormat,
            Outcome::WrongType { .. } => OutcomeKind::WrongType,
            Outcome::BodyMissing => OutcomeKind::BodyMissing,
            Outcome::NoBlankLineBeforeBody => OutcomeKind::NoBlankLineBeforeBody,
            Outcome::LineOverLong { .. } => OutcomeKind::LineOverLong,
        }
    }

    /// Whether the commit may proceed.
    ///
    /// Merge commits are not validated but must not be blocked either.
    pub fn is_normal(&self) -> bool {
        matches!(self, Outcome::Validated | Outcome::Merge)
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_normal() {
            0
        } else {
            self.kind().code()
        }
    }
}

impl From<&MessageError> for Outcome {
    fn from(err: &MessageError) -> Self {
        match err {
            MessageError::ArgumentMissing => Outcome::ArgumentMissing,
            MessageError::FileMissing { path } | MessageError::NotAFile { path } => {
                Outcome::FileMissing { path: path.clone() }
            }
            MessageError::ReadFailed { path, .. } => Outcome::ReadError { path: path.clone() },
        }
    }
}
