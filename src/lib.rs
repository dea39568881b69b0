#![feature(io_error_more)]

pub mod errors;
pub mod fs_op;
pub mod logging;
pub mod settings;
pub mod template;

pub use crate::errors::{SettingsError, VaultError};
pub use crate::fs_op::{Candidates, ProjectRoot, VaultResolver};
pub use crate::template::{register, VaultFallbackHelper, VAULT_FALLBACK};

/// Resolve `logical` against `root`: the plain file if present, else its
/// `.vault` sibling.
pub fn vault_fallback(root: &ProjectRoot, logical: &str) -> Result<std::path::PathBuf, VaultError> {
    VaultResolver::new(root.clone()).resolve(logical)
}
