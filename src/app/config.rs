//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;

/// What the command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Render the tree
    Run(Config),
    /// Print usage and exit
    Help,
    /// Print version and exit
    Version,
}

/// Application configuration from CLI args
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path the walk starts from (as given, not canonicalized)
    pub root: PathBuf,
    /// Emit debug logging to stderr
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_args() -> anyhow::Result<CliAction> {
        Self::parse_from(env::args().skip(1))
    }

    /// Parse arguments (without the program name)
    pub fn parse_from<I, S>(args: I) -> anyhow::Result<CliAction>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut root: Option<String> = None;
        let mut options_done = false;

        for arg in args.into_iter().map(Into::into) {
            if !options_done && arg.starts_with('-') && arg != "-" {
                match arg.as_str() {
                    "--" => options_done = true,
                    "--help" | "-h" => return Ok(CliAction::Help),
                    "--version" | "-V" => return Ok(CliAction::Version),
                    "--verbose" | "-v" => config.verbose = true,
                    unknown => {
                        anyhow::bail!(
                            "Unknown option: {}. Use --help for usage information.",
                            unknown
                        );
                    }
                }
                continue;
            }

            if let Some(first) = &root {
                anyhow::bail!("Unexpected argument '{}': root path already set to '{}'", arg, first);
            }
            root = Some(arg);
        }

        if let Some(root) = root {
            config.root = PathBuf::from(root);
        }
        Ok(CliAction::Run(config))
    }
}

pub fn print_help() {
    println!(
        r#"dirtree - print a directory hierarchy as a tree

USAGE:
    dirtree [OPTIONS] [PATH]

ARGS:
    PATH                Directory to render (default: .)

OPTIONS:
    -v, --verbose       Log traversal details to stderr
    -h, --help          Show this help message
    -V, --version       Show version

Entries whose name starts with '.' are not shown.

EXIT CODES:
    0    Success
    1    Traversal failed
    2    Invalid arguments"#
    );
}
