// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit header grammar.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[fixup! |squash! ]type[(scope)]: subject`, anchored to one line.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<fixup>fixup! |squash! )?(?P<type>[A-Za-z0-9_]+)(?:\((?P<scope>[^()\s]+)\))?: (?P<subject>.+)$"
    )
    .unwrap();

    /// Headers exempt from format, type and length checks.
    static ref REVERT_REGEX: Regex = Regex::new(r"^(Revert|revert)(:| ).+").unwrap();
}

/// A header that matched the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Whether the header carried a `fixup! ` or `squash! ` prefix.
    pub fixup_or_squash: bool,
    /// Commit type, as written.
    pub commit_type: &'a str,
    /// Optional scope. Not validated.
    pub scope: Option<&'a str>,
    /// Subject text.
    pub subject: &'a str,
}

impl<'a> Header<'a> {
    /// Parse a header line. Returns `None` on a shape mismatch or a blank subject.
    pub fn parse(line: &'a str) -> Option<Self> {
        let captures = HEADER_REGEX.captures(line)?;

        let subject = captures.name("subject")?.as_str();
        if subject.trim().is_empty() {
            return None;
        }

        Some(Self {
            fixup_or_squash: captures.name("fixup").is_some(),
            commit_type: captures.name("type")?.as_str(),
            scope: captures.name("scope").map(|m| m.as_str()),
            subject,
        })
    }

    /// Whether the header is exempt from the line length limit.
    pub fn exempt_from_line_limit(&self) -> bool {
        self.fixup_or_squash || self.commit_type == "revert" || self.commit_type == "Revert"
    }
}

/// Whether `line` is a revert header, e.g. `Revert "feat: x"` or `revert: x`.
pub fn is_revert(line: &str) -> bool {
    REVERT_REGEX.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_header() {
        let header = Header::parse("feat: add login flow").unwrap();
        assert_eq!(header.commit_type, "feat");
        assert_eq!(header.scope, None);
        assert_eq!(header.subject, "add login flow");
        assert!(!header.fixup_or_squash);
    }

    #[test]
    fn test_parse_header_with_scope() {
        let header = Header::parse("fix(auth): handle expired token").unwrap();
        assert_eq!(header.commit_type, "fix");
        assert_eq!(header.scope, Some("auth"));
        assert_eq!(header.subject, "handle expired token");
    }

    #[test]
    fn test_parse_fixup_and_squash() {
        let fixup = Header::parse("fixup! feat(ui): tweak layout").unwrap();
        assert!(fixup.fixup_or_squash);
        assert_eq!(fixup.commit_type, "feat");
        assert_eq!(fixup.scope, Some("ui"));

        let squash = Header::parse("squash! docs: typo").unwrap();
        assert!(squash.fixup_or_squash);
        assert_eq!(squash.commit_type, "docs");
    }

    #[test]
    fn test_type_is_case_preserved() {
        let header = Header::parse("Feat: add login flow").unwrap();
        assert_eq!(header.commit_type, "Feat");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Header::parse("add login flow").is_none());
        assert!(Header::parse("feat:add login flow").is_none());
        assert!(Header::parse("feat : add").is_none());
        assert!(Header::parse("feat(): empty scope").is_none());
        assert!(Header::parse("feat(a b): space in scope").is_none());
        assert!(Header::parse("feat(a(b)): nested").is_none());
        assert!(Header::parse("fixup!feat: no space").is_none());
        assert!(Header::parse("feat-x: dash in type").is_none());
    }

    #[test]
    fn test_parse_rejects_blank_subject() {
        assert!(Header::parse("feat: ").is_none());
        assert!(Header::parse("feat:    ").is_none());
        assert!(Header::parse("feat: \t").is_none());
    }

    #[test]
    fn test_line_limit_exemption() {
        assert!(Header::parse("fixup! feat: x").unwrap().exempt_from_line_limit());
        assert!(Header::parse("revert: x").unwrap().exempt_from_line_limit());
        assert!(Header::parse("Revert: x").unwrap().exempt_from_line_limit());
        assert!(!Header::parse("feat: x").unwrap().exempt_from_line_limit());
    }

    #[test]
    fn test_is_revert() {
        assert!(is_revert("Revert \"feat: add login flow\""));
        assert!(is_revert("revert: feat: add login flow"));
        assert!(!is_revert("Revert"));
        assert!(!is_revert("Revert:"));
        assert!(!is_revert("REVERT: x"));
        assert!(!is_revert("Reverted something"));
    }
}
