use std::io;
use std::path::Path;

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (socket, FIFO, device and so on).
    Other,
}

impl PathType {
    /// Classify `path` with a single `stat` call (symlinks are followed).
    ///
    /// A missing entry, a path running through a non-directory, and a
    /// symlink loop all classify as `NotFound`. Other errors (permission
    /// denied and similar) are returned to the caller.
    pub fn probe<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        match std::fs::metadata(path.as_ref()) {
            Ok(meta) if meta.is_dir() => Ok(PathType::Directory),
            Ok(meta) if meta.is_file() => Ok(PathType::File),
            Ok(_) => Ok(PathType::Other),
            Err(e) if is_absent(&e) => Ok(PathType::NotFound),
            Err(e) => Err(e),
        }
    }

    pub fn exists(self) -> bool {
        self != PathType::NotFound
    }
}

fn is_absent(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory | io::ErrorKind::FilesystemLoop
    )
}

/// Return `Ok(true)` if the provided `path` exists.
pub fn exists<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    PathType::probe(path).map(PathType::exists)
}
