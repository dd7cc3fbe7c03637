//! dirtree - print a directory hierarchy as a tree
//!
//! Walks a directory depth-first and prints every visible entry with
//! box-drawing connectors. Entries whose name starts with `.` are skipped.
//!
//! ```text
//! .
//! ├── Cargo.toml
//! ├── src/
//! │   ├── lib.rs
//! │   └── main.rs
//! ```

pub mod app;
pub mod error;
pub mod tree;

pub use error::{Result, TreeError};
