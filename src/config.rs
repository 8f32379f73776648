//! Configuration file for the `syncfile` command
//!
//! The bindings themselves take [`BindingOptions`] explicitly and read no
//! configuration. This module is how the command-line front end builds those
//! options from a TOML file:
//!
//! ```toml
//! text_encoding = "latin1"   # or "utf8"
//! max_binary_len = 67108864
//! ```

use crate::helpers::{BindingOptions, TextEncoding};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SYNCFILE_CONFIG";

/// On-disk configuration. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncFileConfig {
    pub text_encoding: Option<TextEncoding>,
    pub max_binary_len: Option<usize>,
}

impl SyncFileConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid syncfile config")
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In config file {}", path.display()))
    }

    /// Resolve the config the way the command line does.
    ///
    /// An explicit path (argument, then `$SYNCFILE_CONFIG`) must exist. The
    /// default location is optional and yields defaults when absent.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Binding options with unset keys filled from defaults.
    pub fn binding_options(&self) -> BindingOptions {
        BindingOptions {
            text_encoding: self.text_encoding.unwrap_or_default(),
            max_binary_len: self.max_binary_len,
        }
    }
}

/// `$XDG_CONFIG_HOME/syncfile/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("syncfile").join("config.toml"))
}
