// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The effective validation policy and the layer merge that produces it.

use crate::error::ConfigError;
use crate::i18n::Lang;
use std::collections::BTreeSet;

use super::default::{DEFAULT_LINE_LIMIT, DEFAULT_TYPES};
use super::schema::PolicyLayer;

/// Immutable validation policy, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    lang: Lang,
    body_required: bool,
    line_limit: usize,
    allowed_types: BTreeSet<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            body_required: false,
            line_limit: DEFAULT_LINE_LIMIT,
            allowed_types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Policy {
    /// Build a policy from the defaults and the given layers, lowest priority first.
    pub fn from_layers<'a>(layers: impl IntoIterator<Item = &'a PolicyLayer>) -> Self {
        let mut builder = PolicyBuilder::new();
        for layer in layers {
            builder.apply(layer);
        }
        builder.build()
    }

    /// Diagnostic language.
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Whether a body is mandatory.
    pub fn body_required(&self) -> bool {
        self.body_required
    }

    /// Maximum line length.
    pub fn line_limit(&self) -> usize {
        self.line_limit
    }

    /// Whether `commit_type` is allowed. Case-sensitive.
    pub fn allows(&self, commit_type: &str) -> bool {
        self.allowed_types.contains(commit_type)
    }

    /// Comma-joined listing of the allowed types, in sorted order.
    pub fn types_listing(&self) -> String {
        self.allowed_types
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Accumulates override layers on top of the default policy.
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    /// Start from the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a layer, or log and skip it if it is invalid.
    pub fn apply(&mut self, layer: &PolicyLayer) -> &mut Self {
        if layer.is_empty() {
            return self;
        }
        if let Err(e) = self.try_apply(layer) {
            tracing::warn!("Ignoring configuration layer: {}", e);
        }
        self
    }

    /// Apply a layer atomically: either all of it takes effect or none of it.
    pub fn try_apply(&mut self, layer: &PolicyLayer) -> Result<&mut Self, ConfigError> {
        let mut next = self.policy.clone();

        if let Some(ref tag) = layer.lang {
            match tag.parse::<Lang>() {
                Ok(lang) => next.lang = lang,
                Err(()) => tracing::warn!(
                    "Unknown language '{}', keeping '{}'",
                    tag,
                    next.lang
                ),
            }
        }

        if let Some(body_required) = layer.body_required {
            next.body_required = body_required;
        }

        if let Some(line_limit) = layer.line_limit {
            if line_limit == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "lineLimit".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
            next.line_limit = line_limit;
        }

        // Additions first, then denials: a type both added and denied ends up denied.
        next.allowed_types.extend(layer.types.iter().cloned());
        for denied in &layer.deny_types {
            next.allowed_types.remove(denied);
        }

        if next.allowed_types.is_empty() {
            return Err(ConfigError::NoAllowedTypes {
                denied: layer.deny_types.clone(),
            });
        }

        tracing::debug!(
            "Applied configuration layer: lang={}, body_required={}, line_limit={}, types=[{}]",
            next.lang,
            next.body_required,
            next.line_limit,
            next.types_listing()
        );

        self.policy = next;
        Ok(self)
    }

    /// Finish building.
    pub fn build(self) -> Policy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(types: &[&str], deny: &[&str]) -> PolicyLayer {
        PolicyLayer {
            types: types.iter().map(|t| t.to_string()).collect(),
            deny_types: deny.iter().map(|t| t.to_string()).collect(),
            ..PolicyLayer::default()
        }
    }

    #[test]
    fn test_scalars_overwrite_only_when_present() {
        let first = PolicyLayer {
            body_required: Some(true),
            line_limit: Some(100),
            ..PolicyLayer::default()
        };
        let second = PolicyLayer {
            line_limit: Some(72),
            ..PolicyLayer::default()
        };

        let policy = Policy::from_layers([&first, &second]);
        assert!(policy.body_required());
        assert_eq!(policy.line_limit(), 72);
        assert_eq!(policy.lang(), Lang::En);
    }

    #[test]
    fn test_additional_types_extend_set() {
        let policy = Policy::from_layers([&layer(&["build", "ci"], &[])]);
        assert!(policy.allows("build"));
        assert!(policy.allows("ci"));
        assert!(policy.allows("feat"));
    }

    #[test]
    fn test_denial_wins_within_layer() {
        let policy = Policy::from_layers([&layer(&["wip"], &["wip"])]);
        assert!(!policy.allows("wip"));
    }

    #[test]
    fn test_denial_wins_across_later_layer() {
        let policy = Policy::from_layers([&layer(&["wip"], &[]), &layer(&[], &["wip", "style"])]);
        assert!(!policy.allows("wip"));
        assert!(!policy.allows("style"));
    }

    #[test]
    fn test_later_layer_can_readd_denied_type() {
        let policy = Policy::from_layers([&layer(&[], &["style"]), &layer(&["style"], &[])]);
        assert!(policy.allows("style"));
    }

    #[test]
    fn test_layer_denying_everything_is_skipped() {
        let mut builder = PolicyBuilder::new();
        let all: Vec<&str> = DEFAULT_TYPES.to_vec();
        let lockout = PolicyLayer {
            line_limit: Some(50),
            ..layer(&[], &all)
        };

        assert!(matches!(
            builder.clone().try_apply(&lockout),
            Err(ConfigError::NoAllowedTypes { .. })
        ));

        builder.apply(&lockout);
        let policy = builder.build();
        assert_eq!(policy, Policy::default());
    }

    #[test]
    fn test_zero_line_limit_is_rejected() {
        let bad = PolicyLayer {
            line_limit: Some(0),
            types: vec!["build".to_string()],
            ..PolicyLayer::default()
        };
        let policy = Policy::from_layers([&bad]);
        assert_eq!(policy.line_limit(), DEFAULT_LINE_LIMIT);
        assert!(!policy.allows("build"));
    }

    #[test]
    fn test_unknown_lang_keeps_previous() {
        let zh = PolicyLayer::with_lang("zh");
        let unknown = PolicyLayer::with_lang("xx");
        let policy = Policy::from_layers([&zh, &unknown]);
        assert_eq!(policy.lang(), Lang::Zh);
    }

    #[test]
    fn test_types_listing_contains_every_type() {
        let policy = Policy::default();
        let listing = policy.types_listing();
        for t in DEFAULT_TYPES {
            assert!(listing.split(", ").any(|entry| entry == *t));
        }
        assert_eq!(listing, policy.types_listing());
    }
}
