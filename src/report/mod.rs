// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering validation outcomes for the user.

use crate::cli::args::OutputFormat;
use crate::i18n::Lang;
use crate::rules::Outcome;
use console::style;
use std::io::Write;

/// Renders outcomes in the configured language and format.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    lang: Lang,
    format: OutputFormat,
}

impl Reporter {
    /// Create a reporter.
    pub fn new(lang: Lang, format: OutputFormat) -> Self {
        Self { lang, format }
    }

    /// Print the outcome to the process streams and return the exit code.
    ///
    /// Text goes to stderr so it shows up in the git client; JSON goes to stdout.
    pub fn report(&self, outcome: &Outcome) -> i32 {
        match self.format {
            OutputFormat::Json => self.report_to(&mut std::io::stdout().lock(), outcome),
            OutputFormat::Text => self.report_to(&mut std::io::stderr().lock(), outcome),
        }
    }

    /// Write the outcome to `out` and return the exit code.
    ///
    /// The exit code depends on the outcome only, never on whether the write
    /// succeeded.
    pub fn report_to<W: Write>(&self, out: &mut W, outcome: &Outcome) -> i32 {
        let written = match self.format {
            OutputFormat::Json => self.write_json(out, outcome),
            OutputFormat::Text => self.write_text(out, outcome),
        };
        if let Err(e) = written {
            tracing::debug!("Failed to write diagnostic: {}", e);
        }
        outcome.exit_code()
    }

    /// Write the text form.
    pub fn write_text<W: Write>(&self, out: &mut W, outcome: &Outcome) -> std::io::Result<()> {
        let message = self.lang.describe(outcome);
        let icon = match outcome {
            Outcome::Validated => style("✓").for_stderr().green().bold(),
            Outcome::Merge => style("→").for_stderr().cyan().bold(),
            _ => style("✗").for_stderr().red().bold(),
        };

        if outcome.is_normal() {
            writeln!(out, "{} {}", icon, message)
        } else {
            writeln!(
                out,
                "{} {} {}",
                icon,
                style(format!("[{}]", outcome.kind())).for_stderr().red(),
                message
            )
        }
    }

    /// Write the JSON form.
    pub fn write_json<W: Write>(&self, out: &mut W, outcome: &Outcome) -> std::io::Result<()> {
        let json = serde_json::json!({
            "valid": outcome.is_normal(),
            "code": outcome.kind().code(),
            "kind": outcome.kind(),
            "message": self.lang.describe(outcome),
        });

        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        )
    }
}
