//! dirtree - print a directory hierarchy as a tree

use std::process::ExitCode;

use tracing::debug;

use dirtree::app::{exit_code, print_help, run_tree, setup_logging, CliAction, Config};

fn main() -> ExitCode {
    // Argument errors go to stderr with their own exit code
    let config = match Config::from_args() {
        Ok(CliAction::Run(c)) => c,
        Ok(CliAction::Help) => {
            print_help();
            return ExitCode::from(exit_code::SUCCESS);
        }
        Ok(CliAction::Version) => {
            println!("dirtree {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::from(exit_code::SUCCESS);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID);
        }
    };

    setup_logging(config.verbose);

    match run_tree(&config) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS),
        Err(e) => {
            debug!(io = e.is_io(), "traversal failed");
            // Traversal errors are reported on stdout, after the partial tree
            println!("Error: {}", e);
            ExitCode::from(exit_code::ERROR)
        }
    }
}
