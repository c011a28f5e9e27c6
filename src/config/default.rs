// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Default maximum line length.
pub const DEFAULT_LINE_LIMIT: usize = 80;

/// Commit types allowed before any override is applied.
///
/// `Revert` is included because some tools capitalize generated reverts.
pub const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "revert", "Revert",
];

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"{
    "lang": "en",
    "bodyRequired": false,
    "lineLimit": 80,
    "types": ["build", "ci"],
    "denyTypes": []
}
"#
}
