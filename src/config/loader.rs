// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration file discovery and loading.

use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

use super::policy::Policy;
use super::schema::PolicyLayer;

/// Configuration file names looked up in each location, lowest priority first.
const CONFIG_FILES: &[&str] = &[".commit-msg.json", ".commit-msg.toml"];

/// Hooks directory relative to a repository root.
const HOOK_DIR: &str = ".git/hooks";

/// Candidate configuration files, lowest priority first.
///
/// The user's home directory comes first. The project location is the hooks
/// directory when `work_dir` is a repository root, otherwise `work_dir` itself.
pub fn config_candidates(home: Option<&Path>, work_dir: &Path) -> Vec<PathBuf> {
    let mut locations = Vec::new();
    if let Some(home) = home {
        locations.push(home.to_path_buf());
    }

    let hook_dir = work_dir.join(HOOK_DIR);
    if hook_dir.is_dir() {
        locations.push(hook_dir);
    } else {
        locations.push(work_dir.to_path_buf());
    }

    locations
        .iter()
        .flat_map(|dir| CONFIG_FILES.iter().map(move |name| dir.join(name)))
        .collect()
}

/// Find configuration files in the default locations.
pub fn find_config_files() -> Vec<PathBuf> {
    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    config_candidates(dirs::home_dir().as_deref(), &work_dir)
}

/// Load a single layer. A missing file is not an error and yields `None`.
pub fn load_layer(path: &Path) -> Result<Option<PolicyLayer>> {
    if !path.is_file() {
        tracing::trace!("No configuration at {:?}", path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_layer(path, &content).map(Some)
}

/// Parse a layer, choosing the format from the file extension.
pub fn parse_layer(path: &Path, content: &str) -> Result<PolicyLayer> {
    let parsed: std::result::Result<PolicyLayer, String> =
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(content).map_err(|e| e.to_string()),
            _ => serde_json::from_str(content).map_err(|e| e.to_string()),
        };

    parsed.map_err(|message| {
        ConfigError::ParseError {
            path: path.to_path_buf(),
            message,
        }
        .into()
    })
}

/// Load every readable layer from `paths`, logging and skipping the broken ones.
pub fn load_layers(paths: &[PathBuf]) -> Vec<PolicyLayer> {
    paths
        .iter()
        .filter_map(|path| match load_layer(path) {
            Ok(layer) => layer,
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        })
        .collect()
}

/// Load the policy from the default locations plus an optional explicit file.
///
/// The explicit file has the highest priority among files; `extra` layers are
/// applied after it.
pub fn load_policy(explicit: Option<&Path>, extra: &[PolicyLayer]) -> Policy {
    let mut paths = find_config_files();

    if let Some(path) = explicit {
        if !path.is_file() {
            tracing::warn!("Configuration file not found: {:?}", path);
        }
        paths.push(path.to_path_buf());
    }

    let layers = load_layers(&paths);
    Policy::from_layers(layers.iter().chain(extra))
}
