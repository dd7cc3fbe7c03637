//! Node kind definition and classification

use std::fmt;
use std::path::PathBuf;

use super::fs::EntryInfo;

/// Continuation appended to the prefix below a directory
pub const BRANCH_INDENT: &str = "│   ";
/// Continuation appended to the prefix below a leaf
pub const LEAF_INDENT: &str = "    ";

/// How an entry is drawn in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The `.` entry the walk starts from
    Root,
    /// A `..` entry
    Parent,
    /// Directory
    Branch,
    /// Non-directory that has later siblings
    Leaf,
    /// Non-directory that is the last sibling
    FinalLeaf,
    /// Symbolic link that does not resolve to a directory
    Symlink,
}

impl NodeKind {
    /// Fixed glyph for this kind
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Root => ".",
            Self::Parent => "..",
            Self::Branch => "├──",
            Self::Leaf => "│",
            Self::FinalLeaf => "└──",
            Self::Symlink => "->",
        }
    }

    /// Classify an entry.
    ///
    /// Order matters: the directory check runs before the symlink check, so a
    /// link to a directory is a `Branch`. Directories are never `FinalLeaf`.
    pub fn classify(info: &EntryInfo, is_last: bool) -> Self {
        match info.name.as_str() {
            "." => Self::Root,
            ".." => Self::Parent,
            _ if info.is_dir => Self::Branch,
            _ if info.is_symlink => Self::Symlink,
            _ if is_last => Self::FinalLeaf,
            _ => Self::Leaf,
        }
    }

    /// Render the line for an entry of this kind, or `None` when the kind
    /// has no printable form.
    pub fn line(self, prefix: &str, name: &str) -> Option<String> {
        let line = match self {
            Self::Root => format!("{}{}", prefix, name),
            Self::Branch => format!("{}├── {}/", prefix, name),
            Self::Leaf => format!("{}├── {}", prefix, name),
            Self::FinalLeaf => format!("{}└── {}", prefix, name),
            Self::Symlink => format!("{}-> {}", prefix, name),
            Self::Parent => return None,
        };
        Some(line)
    }

    /// Prefix handed down to this node's children
    pub fn child_prefix(self, prefix: &str) -> String {
        match self {
            Self::Root => prefix.to_string(),
            // Also for a Branch that is the last sibling
            Self::Branch => format!("{}{}", prefix, BRANCH_INDENT),
            _ => format!("{}{}", prefix, LEAF_INDENT),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Per-call state of the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    /// Path being visited
    pub path: PathBuf,
    /// Connector prefix inherited from ancestors
    pub prefix: String,
    /// Whether this entry is the last one in its parent's listing
    pub is_last: bool,
}

impl RenderState {
    /// State for an explicit call, usually the top-level one
    pub fn new(path: impl Into<PathBuf>, prefix: &str, is_last: bool) -> Self {
        Self {
            path: path.into(),
            prefix: prefix.to_string(),
            is_last,
        }
    }

    /// State for the `index`-th of `count` children
    pub fn child(path: PathBuf, prefix: &str, index: usize, count: usize) -> Self {
        Self {
            path,
            prefix: prefix.to_string(),
            is_last: index + 1 == count,
        }
    }
}
