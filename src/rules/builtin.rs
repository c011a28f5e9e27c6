// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in checks.
//!
//! Each check either lets validation continue or breaks with the terminal
//! [`Outcome`]. `Break(Outcome::Validated)` ends the run early as a success.

use std::ops::ControlFlow;

use crate::commit::{line_length, CommitMessage, Header};
use crate::config::Policy;

use super::outcome::Outcome;

/// Result of a single check.
pub type Check = ControlFlow<Outcome>;

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Empty or whitespace-only messages.
pub fn check_empty_message(message: &CommitMessage<'_>) -> Check {
    if message.is_blank() {
        return ControlFlow::Break(Outcome::EmptyMessage);
    }
    ControlFlow::Continue(())
}

/// Merge commits are never validated.
pub fn check_merge(message: &CommitMessage<'_>) -> Check {
    if message.is_merge() {
        return ControlFlow::Break(Outcome::Merge);
    }
    ControlFlow::Continue(())
}

/// Header shape, commit type and header length.
pub fn check_header(header: &str, policy: &Policy) -> Check {
    if is_blank(header) {
        return ControlFlow::Break(Outcome::EmptyHeader);
    }

    let Some(parsed) = Header::parse(header) else {
        return ControlFlow::Break(Outcome::BadHeaderFormat {
            header: header.to_string(),
        });
    };

    check_type(&parsed, policy)?;

    let length = line_length(header);
    if length > policy.line_limit() && !parsed.exempt_from_line_limit() {
        return ControlFlow::Break(Outcome::LineOverLong {
            length,
            limit: policy.line_limit(),
            line: header.to_string(),
        });
    }

    ControlFlow::Continue(())
}

/// The commit type must be in the allowed set.
pub fn check_type(header: &Header<'_>, policy: &Policy) -> Check {
    if policy.allows(header.commit_type) {
        return ControlFlow::Continue(());
    }
    ControlFlow::Break(Outcome::WrongType {
        commit_type: header.commit_type.to_string(),
        allowed: policy.types_listing(),
    })
}

/// Everything after the header: separator line, presence and line lengths.
pub fn check_body(body: &str, policy: &Policy) -> Check {
    if is_blank(body) {
        return ControlFlow::Break(if policy.body_required() {
            Outcome::BodyMissing
        } else {
            Outcome::Validated
        });
    }

    let separator = body.split('\n').next().unwrap_or_default();
    if !is_blank(separator) {
        return ControlFlow::Break(Outcome::NoBlankLineBeforeBody);
    }

    check_line_lengths(body, policy)
}

/// The first line longer than the limit fails.
pub fn check_line_lengths(text: &str, policy: &Policy) -> Check {
    let limit = policy.line_limit();
    match text.split('\n').find(|line| line_length(line) > limit) {
        Some(line) => ControlFlow::Break(Outcome::LineOverLong {
            length: line_length(line),
            limit,
            line: line.to_string(),
        }),
        None => ControlFlow::Continue(()),
    }
}

/// A message without any body section when one is required.
pub fn check_body_present(policy: &Policy) -> Check {
    if policy.body_required() {
        return ControlFlow::Break(Outcome::BodyMissing);
    }
    ControlFlow::Continue(())
}
