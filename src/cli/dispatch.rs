// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::commit::read_message;
use crate::config::{default::example_config, load_policy, PolicyLayer};
use crate::error::Result;
use crate::report::Reporter;
use crate::rules::{Outcome, RuleEngine};
use std::io::Write;

use super::args::Cli;

/// Run the CLI with the given arguments and return the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    if cli.example_config {
        std::io::stdout().write_all(example_config().as_bytes())?;
        return Ok(0);
    }

    let overrides: Vec<PolicyLayer> = cli.lang.iter().map(PolicyLayer::with_lang).collect();
    let policy = load_policy(cli.config.as_deref(), &overrides);

    tracing::debug!(
        "Policy: lang={}, body_required={}, line_limit={}, types=[{}]",
        policy.lang(),
        policy.body_required(),
        policy.line_limit(),
        policy.types_listing()
    );

    let reporter = Reporter::new(policy.lang(), cli.format);
    let engine = RuleEngine::new(policy);

    let outcome = match read_message(cli.file.as_deref()) {
        Ok(message) => engine.validate(&message),
        Err(e) => {
            tracing::debug!("Cannot read commit message: {}", e);
            Outcome::from(&e)
        }
    };

    Ok(reporter.report(&outcome))
}
