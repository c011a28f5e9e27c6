// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure.

/// Literal prefix of merge commit messages generated by git.
const MERGE_PREFIX: &str = "Merge ";

/// A raw commit message split into header and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitMessage<'a> {
    raw: &'a str,
    header: &'a str,
    body: Option<&'a str>,
}

impl<'a> CommitMessage<'a> {
    /// Split `raw` at its first newline.
    ///
    /// The body is everything after that newline, starting with the separator
    /// line. It is `None` only when the message has no newline at all.
    pub fn new(raw: &'a str) -> Self {
        let (header, body) = match raw.split_once('\n') {
            Some((header, body)) => (header, Some(body)),
            None => (raw, None),
        };
        Self { raw, header, body }
    }

    /// First line.
    pub fn header(&self) -> &'a str {
        self.header
    }

    /// Text after the first newline, if any.
    pub fn body(&self) -> Option<&'a str> {
        self.body
    }

    /// Whether the message is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Whether git generated this as a merge commit message.
    pub fn is_merge(&self) -> bool {
        self.raw.starts_with(MERGE_PREFIX)
    }
}

/// Length of a line as the line limit counts it, in UTF-8 bytes.
///
/// A CJK character therefore counts three times toward the limit.
pub fn line_length(line: &str) -> usize {
    line.len()
}
