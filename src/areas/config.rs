//! Configuration file path resolution
//!
//! Resolution only: which configuration file applies at which scope. The
//! file's contents are not parsed here.

use crate::areas::repository::METADATA_DIR;
use anyhow::Context;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Where a configuration value would be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// `<workspace>/.cask/config`
    Local,
    /// `$HOME/.caskconfig`
    Global,
    /// `/etc/caskconfig`
    System,
}

/// Resolve the configuration file path for a scope.
pub fn resolve_config_path(scope: ConfigScope, workspace_path: &Path) -> anyhow::Result<PathBuf> {
    match scope {
        ConfigScope::Local => Ok(workspace_path.join(METADATA_DIR).join("config")),
        ConfigScope::Global => BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".caskconfig"))
            .context("Unable to determine the home directory"),
        ConfigScope::System => Ok(PathBuf::from("/etc/caskconfig")),
    }
}
