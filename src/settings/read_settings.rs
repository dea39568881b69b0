use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::SettingsError;

fn default_log_level() -> String {
    "info".to_string()
}

/// Optional settings file (TOML).
///
/// ```toml
/// project_root = ".."
/// log_level = "vault_fallback=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory logical paths resolve against. Relative values are taken
    /// relative to the settings file's directory.
    #[serde(default)]
    pub project_root: Option<PathBuf>,
    /// `tracing` filter directive passed to [`crate::logging::init`].
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            project_root: None,
            log_level: default_log_level(),
        }
    }
}

/// Load settings from `path`. A missing file yields [`Settings::default`].
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
    let path = path.as_ref();
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
