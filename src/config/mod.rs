// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-msg.
//!
//! This module locates and parses override layers and merges them on top of
//! the default policy.

pub mod default;
mod loader;
mod policy;
mod schema;

pub use loader::{config_candidates, find_config_files, load_layer, load_layers, load_policy};
pub use policy::{Policy, PolicyBuilder};
pub use schema::PolicyLayer;
