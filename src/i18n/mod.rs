// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Localized diagnostics for validation outcomes.

mod en;
mod zh;

use crate::rules::Outcome;

/// Language used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Get the canonical tag of the language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// Render the diagnostic for an outcome in this language.
    pub fn describe(&self, outcome: &Outcome) -> String {
        match self {
            Lang::En => en::describe(outcome),
            Lang::Zh => zh::describe(outcome),
        }
    }
}

impl std::str::FromStr for Lang {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en_us" | "english" => Ok(Lang::En),
            "zh" | "zh-cn" | "zh_cn" | "cn" | "chinese" => Ok(Lang::Zh),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
