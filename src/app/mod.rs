//! Application module
//!
//! CLI configuration, logging setup and the tree command itself.

mod config;

pub use config::{print_help, CliAction, Config};

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::tree::output_tree;

/// Exit codes for the dirtree binary
pub mod exit_code {
    /// Tree rendered completely
    pub const SUCCESS: u8 = 0;
    /// Traversal failed (stat, listing, output or unknown node type)
    pub const ERROR: u8 = 1;
    /// Invalid arguments or options
    pub const INVALID: u8 = 2;
}

/// Install the stderr log subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dirtree=debug,warn")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Render the configured tree to stdout
pub fn run_tree(config: &Config) -> Result<()> {
    debug!(root = %config.root.display(), "rendering tree");
    output_tree(&config.root)
}
