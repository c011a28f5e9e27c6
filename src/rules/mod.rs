// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module applies the ordered checks to a raw commit message and maps
//! the result to a single [`Outcome`].

mod builtin;
mod engine;
mod outcome;

pub use builtin::*;
pub use engine::{validate, RuleEngine};
pub use outcome::{Outcome, OutcomeKind};
