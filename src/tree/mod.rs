//! Tree module - classification, filesystem access and rendering

pub mod fs;
pub mod node;
pub mod render;

pub use fs::{EntryInfo, FileSystem, LocalFs};
pub use node::{NodeKind, RenderState};
pub use render::{output_tree, render_to_string, TreeRenderer};
