//! The project root every logical path is resolved against.
//!
//! A `ProjectRoot` is built once and handed to the resolver explicitly. The
//! process-wide discovered root exists only as a convenience constructor.

use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::settings::Settings;

/// An absolute directory that logical paths are joined onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(PathBuf);

static DISCOVERED: OnceCell<ProjectRoot> = OnceCell::new();

impl ProjectRoot {
    /// Use `path` as the root. Relative paths are anchored to the current
    /// working directory now, so later `chdir` calls do not move the root.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(ProjectRoot(std::path::absolute(path.as_ref())?))
    }

    /// The parent of `module_dir`, e.g. `<root>/filter_plugins` -> `<root>`.
    /// A directory without a parent is its own root.
    pub fn from_module_dir<P: AsRef<Path>>(module_dir: P) -> io::Result<Self> {
        let dir = std::path::absolute(module_dir.as_ref())?;
        let root = dir.parent().map(Path::to_path_buf).unwrap_or(dir);
        Ok(ProjectRoot(root))
    }

    /// The parent of the directory holding the running executable, computed
    /// on first use and reused for the rest of the process.
    pub fn discover() -> io::Result<Self> {
        DISCOVERED
            .get_or_try_init(|| {
                let exe = std::env::current_exe()?;
                let exe_dir = exe.parent().ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("executable has no parent directory: {}", exe.display()),
                    )
                })?;
                let root = Self::from_module_dir(exe_dir)?;
                tracing::debug!(root = %root.path().display(), "discovered project root");
                Ok(root)
            })
            .cloned()
    }

    /// Root named by `settings`, else the discovered root. A relative
    /// `project_root` is taken relative to `settings_dir`.
    pub fn from_settings(settings: &Settings, settings_dir: &Path) -> io::Result<Self> {
        match &settings.project_root {
            Some(p) if p.is_absolute() => Self::new(p),
            Some(p) => Self::new(settings_dir.join(p)),
            None => Self::discover(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn join<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        self.0.join(rel)
    }
}

impl AsRef<Path> for ProjectRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
