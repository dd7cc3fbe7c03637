//! Recursive tree rendering
//!
//! Walks depth-first and writes one line per visited entry, in pre-order.
//! The first error aborts the whole walk; lines already written stay written.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, trace};

use super::fs::{is_hidden, FileSystem, LocalFs};
use super::node::{NodeKind, RenderState};
use crate::error::{Result, TreeError};

/// Renders a tree from a [`FileSystem`] into a writer
pub struct TreeRenderer<F, W> {
    fs: F,
    out: W,
}

impl<F: FileSystem, W: Write> TreeRenderer<F, W> {
    pub fn new(fs: F, out: W) -> Self {
        Self { fs, out }
    }

    /// Render `path` and everything visible below it
    pub fn render(&mut self, path: &Path, prefix: &str, is_last: bool) -> Result<()> {
        self.visit(RenderState::new(path, prefix, is_last))
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn visit(&mut self, state: RenderState) -> Result<()> {
        let info = self
            .fs
            .stat(&state.path)
            .map_err(|e| TreeError::stat(&state.path, e))?;

        let kind = NodeKind::classify(&info, state.is_last);
        let line = kind
            .line(&state.prefix, &info.name)
            .ok_or(TreeError::UnknownNodeType(kind))?;
        writeln!(self.out, "{}", line)?;

        // Symlinks to non-directories land here too, so they are never followed
        if !info.is_dir {
            return Ok(());
        }

        let child_prefix = kind.child_prefix(&state.prefix);

        // Materialize the filtered listing first so the last entry is known
        let visible: Vec<OsString> = self
            .fs
            .list(&state.path)
            .map_err(|e| TreeError::read_dir(&state.path, e))?
            .into_iter()
            .filter(|name| {
                let hidden = is_hidden(name);
                if hidden {
                    trace!(name = %name.to_string_lossy(), "skipping hidden entry");
                }
                !hidden
            })
            .collect();

        debug!(
            path = %state.path.display(),
            entries = visible.len(),
            "listed directory"
        );

        let count = visible.len();
        for (i, name) in visible.iter().enumerate() {
            let child = RenderState::child(self.fs.join(&state.path, name), &child_prefix, i, count);
            self.visit(child)?;
        }

        Ok(())
    }
}

/// Render the tree under `root` to stdout.
///
/// Stdout is flushed whether or not the walk succeeds.
pub fn output_tree(root: &Path) -> Result<()> {
    let stdout = io::stdout();
    let mut renderer = TreeRenderer::new(LocalFs, stdout.lock());

    let result = renderer.render(root, "", true);
    let flushed = renderer.into_inner().flush();

    result?;
    flushed.map_err(TreeError::from)
}

/// Render the tree under `root` into a string
pub fn render_to_string(fs: impl FileSystem, root: &Path) -> Result<String> {
    let mut renderer = TreeRenderer::new(fs, Vec::new());
    renderer.render(root, "", true)?;
    Ok(String::from_utf8_lossy(&renderer.into_inner()).into_owned())
}
