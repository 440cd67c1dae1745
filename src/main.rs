mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI, set up logging and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("urlutils error: {:#}", err);
        std::process::exit(1);
    }
}
