// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-msg - Commit Message Validator
//!
//! Validates a commit message against the `type(scope): subject` convention
//! and reports the result through a stable exit code, for use as a git
//! `commit-msg` hook.
//!
//! # Features
//!
//! - **Header Grammar**: `type(scope): subject`, with `fixup! `/`squash! ` prefixes
//! - **Layered Policy**: allowed types, body requirement and line limit from
//!   user and project configuration files
//! - **Ordered Checks**: the first violated rule decides the outcome
//! - **Localized Diagnostics**: English and Chinese messages
//!
//! # Example
//!
//! ```
//! use commit_msg::config::{Policy, PolicyLayer};
//! use commit_msg::rules::{validate, Outcome};
//!
//! let layer = PolicyLayer {
//!     types: vec!["build".to_string()],
//!     ..PolicyLayer::default()
//! };
//! let policy = Policy::from_layers([&layer]);
//!
//! assert_eq!(validate("build: bump deps", &policy), Outcome::Validated);
//! assert_eq!(validate("Merge branch 'main'", &policy), Outcome::Merge);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod i18n;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use config::Policy;
pub use error::{CommitMsgError, Result};
pub use rules::{validate, Outcome};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-msg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
