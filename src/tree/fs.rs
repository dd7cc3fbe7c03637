//! Filesystem access used by the renderer

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Metadata the renderer needs about one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Last component of the path as given, lossily decoded for display
    pub name: String,
    /// Directory, or a symlink whose target is a directory
    pub is_dir: bool,
    /// The entry itself is a symbolic link
    pub is_symlink: bool,
}

/// Stat, listing and path joining
pub trait FileSystem {
    /// Look up metadata for `path`
    fn stat(&self, path: &Path) -> io::Result<EntryInfo>;

    /// Raw names of the immediate children of `path`, sorted by name
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Compose a child path
    fn join(&self, parent: &Path, name: &OsStr) -> PathBuf {
        parent.join(name)
    }
}

/// The local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn stat(&self, path: &Path) -> io::Result<EntryInfo> {
        let meta = fs::symlink_metadata(path)?;
        let is_symlink = meta.file_type().is_symlink();
        let is_dir = if is_symlink {
            // Any failure to resolve the target (dangling, EACCES, ELOOP)
            // makes the link a non-directory, rendered as a Symlink
            fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            meta.is_dir()
        };

        Ok(EntryInfo {
            name: base_name(path),
            is_dir,
            is_symlink,
        })
    }

    fn list(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}

/// Names starting with `.` are not shown
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

/// Last element of `path` with trailing separators removed.
///
/// Unlike `Path::file_name`, `.` and `..` are returned verbatim and a path
/// made only of separators yields the separator itself.
pub fn base_name(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return ".".to_string();
    }

    let trimmed = raw.trim_end_matches(std::path::is_separator);
    if trimmed.is_empty() {
        return std::path::MAIN_SEPARATOR.to_string();
    }

    trimmed
        .rsplit(std::path::is_separator)
        .next()
        .unwrap_or(trimmed)
        .to_string()
}
