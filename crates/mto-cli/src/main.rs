use mto_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Prefer the log file; fall back to stderr rather than refusing to run.
    if logging::init().is_err() {
        logging::init_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("mto error: {:#}", err);
        std::process::exit(1);
    }
}
