// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! A [`PolicyLayer`] is one partial override read from a `.commit-msg.json`
//! or `.commit-msg.toml` file. Omitted fields keep the previous value.

use serde::{Deserialize, Serialize};

/// One partial configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyLayer {
    /// Diagnostic language tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Whether a body is mandatory.
    #[serde(alias = "body_required", skip_serializing_if = "Option::is_none")]
    pub body_required: Option<bool>,

    /// Maximum length of any line.
    #[serde(alias = "line_limit", skip_serializing_if = "Option::is_none")]
    pub line_limit: Option<usize>,

    /// Types added to the allowed set.
    #[serde(alias = "additionalTypes", alias = "additional_types")]
    pub types: Vec<String>,

    /// Types removed from the allowed set, after additions.
    #[serde(alias = "deniedTypes", alias = "deny_types", alias = "denied_types")]
    pub deny_types: Vec<String>,
}

impl PolicyLayer {
    /// A layer that only overrides the language.
    pub fn with_lang(lang: impl Into<String>) -> Self {
        Self {
            lang: Some(lang.into()),
            ..Self::default()
        }
    }

    /// Whether the layer overrides nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_layer() {
        let json = r#"{
            "lang": "zh",
            "bodyRequired": true,
            "lineLimit": 72,
            "types": ["build", "ci"],
            "denyTypes": ["style"]
        }"#;
        let layer: PolicyLayer = serde_json::from_str(json).unwrap();
        assert_eq!(layer.lang.as_deref(), Some("zh"));
        assert_eq!(layer.body_required, Some(true));
        assert_eq!(layer.line_limit, Some(72));
        assert_eq!(layer.types, vec!["build", "ci"]);
        assert_eq!(layer.deny_types, vec!["style"]);
    }

    #[test]
    fn test_parse_partial_layer() {
        let layer: PolicyLayer = serde_json::from_str(r#"{"lineLimit": 100}"#).unwrap();
        assert_eq!(layer.line_limit, Some(100));
        assert!(layer.lang.is_none());
        assert!(layer.body_required.is_none());
        assert!(layer.types.is_empty());
    }

    #[test]
    fn test_parse_toml_layer_with_aliases() {
        let toml = r#"
body_required = true
additional_types = ["build"]
denied_types = ["perf"]
"#;
        let layer: PolicyLayer = toml::from_str(toml).unwrap();
        assert_eq!(layer.body_required, Some(true));
        assert_eq!(layer.types, vec!["build"]);
        assert_eq!(layer.deny_types, vec!["perf"]);
    }

    #[test]
    fn test_reject_wrong_value_type() {
        let result: Result<PolicyLayer, _> = serde_json::from_str(r#"{"lineLimit": "eighty"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_layer() {
        assert!(PolicyLayer::default().is_empty());
        assert!(!PolicyLayer::with_lang("en").is_empty());
    }
}
