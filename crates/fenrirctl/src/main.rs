//! Fenrir Control - offline first-aid triage and survival protocols

use clap::Parser;
use fenrirctl::cli::Cli;
use fenrirctl::output::{display_error, Palette};
use fenrirctl::{dispatch, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display_error(&format!("{:#}", e), Palette::plain());
            ExitCode::FAILURE
        }
    }
}
