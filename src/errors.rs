use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving a logical path to a plain or vault file.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Neither the plain file nor its `.vault` sibling exists under `root`.
    #[error("No decrypted or encrypted version of: {path} found in {}.", .root.display())]
    NotFound { path: String, root: PathBuf },

    /// The existence check itself failed (permission denied and similar).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VaultError {
    /// `true` for the "neither candidate exists" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, VaultError::NotFound { .. })
    }
}

/// Errors returned when loading the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
