// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use std::ops::ControlFlow;

use crate::commit::{is_revert, CommitMessage};
use crate::config::Policy;

use super::builtin::{
    check_body, check_body_present, check_empty_message, check_header, check_merge, Check,
};
use super::outcome::Outcome;

/// Validate `message` against `policy`.
///
/// Checks run in a fixed order and the first one that does not pass decides
/// the outcome.
pub fn validate(message: &str, policy: &Policy) -> Outcome {
    match run_checks(&CommitMessage::new(message), policy) {
        ControlFlow::Break(outcome) => outcome,
        ControlFlow::Continue(()) => Outcome::Validated,
    }
}

fn run_checks(message: &CommitMessage<'_>, policy: &Policy) -> Check {
    check_empty_message(message)?;
    check_merge(message)?;

    // Reverts skip every header rule.
    if !is_revert(message.header()) {
        check_header(message.header(), policy)?;
    }

    match message.body() {
        Some(body) => check_body(body, policy),
        None => check_body_present(policy),
    }
}

/// Validates messages against one policy.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    policy: Policy,
}

impl RuleEngine {
    /// Create a new rule engine with the given policy.
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Validate a commit message string.
    pub fn validate(&self, message: &str) -> Outcome {
        let outcome = validate(message, &self.policy);
        tracing::debug!("Validation finished: {}", outcome.kind());
        outcome
    }
}
