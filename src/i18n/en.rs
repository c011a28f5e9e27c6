// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use crate::rules::Outcome;

const FORMAT_HINT: &str = "Expected: <type>(<scope>): <subject>\n\
                           \n\
                           <body>";

pub(super) fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Validated => "Commit message validated.".to_string(),
        Outcome::Merge => "Merge commit detected, validation skipped.".to_string(),
        Outcome::ArgumentMissing => {
            "No commit message file given. Usage: commit-msg <FILE>".to_string()
        }
        Outcome::FileMissing { path } => {
            format!("Commit message file not found: {}", path.display())
        }
        Outcome::ReadError { path } => {
            format!("Failed to read commit message file: {}", path.display())
        }
        Outcome::EmptyMessage => "Commit message is empty.".to_string(),
        Outcome::EmptyHeader => "Commit message header is empty.".to_string(),
        Outcome::BadHeaderFormat { header } => format!(
            "Malformed commit message header:\n\n    {}\n\n{}",
            header, FORMAT_HINT
        ),
        Outcome::WrongType {
            commit_type,
            allowed,
        } => format!(
            "Commit type '{}' is not allowed. Allowed types: {}",
            commit_type, allowed
        ),
        Outcome::BodyMissing => "Commit message body is required but missing.".to_string(),
        Outcome::NoBlankLineBeforeBody => {
            "Header and body must be separated by exactly one blank line.".to_string()
        }
        Outcome::LineOverLong {
            length,
            limit,
            line,
        } => format!(
            "Line is {} bytes long (limit: {}):\n\n    {}",
            length, limit, line
        ),
    }
}
