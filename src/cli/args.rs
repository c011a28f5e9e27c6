// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// commit-msg - validate a commit message against the commit convention
///
/// Install as `.git/hooks/commit-msg`; git passes the message file path.
#[derive(Parser, Debug)]
#[command(name = "commit-msg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message validator for the git commit-msg hook", long_about = None)]
pub struct Cli {
    /// Path to the commit message file
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Extra configuration file, applied after the default locations
    #[arg(short, long, env = "COMMIT_MSG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Diagnostic language (en, zh), overriding configuration
    #[arg(long, env = "COMMIT_MSG_LANG")]
    pub lang: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print an example configuration file and exit
    #[arg(long)]
    pub example_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text on stderr (default)
    #[default]
    Text,
    /// JSON on stdout for machine parsing
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_file() {
        let args = Cli::parse_from(["commit-msg", ".git/COMMIT_EDITMSG"]);
        assert_eq!(args.file, Some(PathBuf::from(".git/COMMIT_EDITMSG")));
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_file_is_optional() {
        let args = Cli::parse_from(["commit-msg"]);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_parse_options() {
        let args = Cli::parse_from([
            "commit-msg",
            "--format",
            "json",
            "--lang",
            "zh",
            "-c",
            "policy.toml",
            "-d",
            "msg.txt",
        ]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.lang.as_deref(), Some("zh"));
        assert_eq!(args.config, Some(PathBuf::from("policy.toml")));
        assert!(args.debug);
    }
}
