//! Configuration data model.
//!
//! This module holds struct definitions plus default values. Source discovery
//! and env overrides live in sibling modules.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{DEFAULT_COLOR, DEFAULT_TODO_PATH};
use super::sources::ConfigSource;

/// Top-level runtime configuration, mirroring `todolist.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

/// Where the todo list is persisted.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Todo file path; relative paths resolve against the working directory.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TODO_PATH),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
        }
    }
}

/// Configuration payload plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
