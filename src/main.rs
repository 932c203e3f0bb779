//! joe - Generate .gitignore files from the command line
//!
//! joe provides:
//! - A local cache of the github/gitignore templates (~/.joe-data)
//! - Listing and regex search over template names
//! - Composition of several templates into one .gitignore on stdout

use clap::Parser;

mod cache;
mod catalog;
mod cli;
mod commands;
mod core;
mod fetch;

fn main() {
    let cli = cli::Cli::parse();
    core::logging::init_tracing(cli.verbose, cli.quiet);

    if let Err(err) = cli::run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
