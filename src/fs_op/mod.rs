//! Filesystem side of the vault fallback: root handling, existence probes and
//! the plain/vault lookup itself.
//!
//! Only `stat` touches the filesystem, and only through `metadata` calls.

pub mod path;
pub mod root;
pub mod stat;

pub use path::{split_extension, vault_name, Candidates, VaultResolver, VAULT_INFIX};
pub use root::ProjectRoot;
pub use stat::{exists, PathType};
