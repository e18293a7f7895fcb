use crate::error::Result;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the config file inside `~/.config`.
pub const CONFIG_FILE_NAME: &str = "submissions";

/// Sender identity used for the mail "From" header and the signature in the
/// message body. Sourced from the config file when present, otherwise the
/// operator is prompted for both fields.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SenderConfig {
    pub name: String,
    pub email: String,
}

impl SenderConfig {
    /// Read the sender identity from the well-known config file.
    ///
    /// Returns `Ok(None)` when the file does not exist or does not parse as a
    /// JSON object with non-empty string fields `name` and `email`. A
    /// malformed config file is not fatal; the caller falls back to
    /// interactive prompts.
    pub fn load() -> Result<Option<Self>> {
        match default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(None),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let config: SenderConfig = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(_) => return Ok(None),
        };

        if config.name.trim().is_empty() || config.email.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(config))
    }
}

/// Well-known config location: `~/.config/submissions`.
pub fn default_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join(CONFIG_FILE_NAME))
}
