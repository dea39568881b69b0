use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::VaultError;
use crate::fs_op::root::ProjectRoot;
use crate::fs_op::stat::PathType;

/// Infix inserted before the extension of an encrypted sibling.
pub const VAULT_INFIX: &str = ".vault";

// Lazy stem, then a final `.ext` holding no dots or separators.
static EXTENSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)(\.[^./\\]+)$").expect("extension regex is valid"));

/// Split `logical` into `(stem, extension)`.
///
/// The extension keeps its leading dot and is empty when the final segment
/// has none, e.g. `a.b.txt` -> (`a.b`, `.txt`) and `dir.d/file` ->
/// (`dir.d/file`, `""`).
pub fn split_extension(logical: &str) -> (&str, &str) {
    match EXTENSION_RE.captures(logical) {
        Some(caps) => {
            let ext = caps.get(2).map_or("", |m| m.as_str());
            (&logical[..logical.len() - ext.len()], ext)
        }
        None => (logical, ""),
    }
}

/// The `.vault` sibling name for `logical` (not joined onto any root).
pub fn vault_name(logical: &str) -> String {
    match split_extension(logical) {
        (stem, "") => format!("{stem}{VAULT_INFIX}"),
        (stem, ext) => format!("{stem}{VAULT_INFIX}{ext}"),
    }
}

/// The two files a logical path may refer to, in lookup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub plain: PathBuf,
    pub vault: PathBuf,
}

impl Candidates {
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        [&self.plain, &self.vault].into_iter()
    }
}

/// Resolves logical paths against a fixed [`ProjectRoot`].
///
/// Stateless apart from the root; safe to share between threads.
#[derive(Debug, Clone)]
pub struct VaultResolver {
    root: ProjectRoot,
}

impl VaultResolver {
    pub fn new(root: ProjectRoot) -> Self {
        VaultResolver { root }
    }

    /// Resolver rooted at [`ProjectRoot::discover`].
    pub fn from_process_root() -> std::io::Result<Self> {
        Ok(Self::new(ProjectRoot::discover()?))
    }

    pub fn root(&self) -> &ProjectRoot {
        &self.root
    }

    /// Absolute plain and vault paths for `logical`. No filesystem access.
    pub fn candidates(&self, logical: &str) -> Candidates {
        Candidates {
            plain: self.root.join(logical),
            vault: self.root.join(vault_name(logical)),
        }
    }

    /// Return the plain file if it exists, else the vault sibling.
    ///
    /// Errors:
    /// - `VaultError::NotFound` when neither candidate exists.
    /// - `VaultError::Io` when a `stat` fails for another reason.
    pub fn resolve(&self, logical: &str) -> Result<PathBuf, VaultError> {
        let candidates = self.candidates(logical);
        for candidate in candidates.iter() {
            if PathType::probe(candidate)?.exists() {
                tracing::debug!(logical, resolved = %candidate.display(), "vault fallback resolved");
                return Ok(candidate.clone());
            }
            tracing::trace!(candidate = %candidate.display(), "candidate missing");
        }
        Err(VaultError::NotFound {
            path: logical.to_string(),
            root: self.root.path().to_path_buf(),
        })
    }
}
