// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message parsing and reading.

mod header;
mod message;
mod source;

pub use header::{is_revert, Header};
pub use message::{line_length, CommitMessage};
pub use source::read_message;
