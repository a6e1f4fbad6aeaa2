//! velt CLI - build-descriptor resolver for the three desktop targets.
//!
//! Handles command-line argument parsing, logging initialization, and command
//! dispatch.

use clap::Parser;
use miette::Result;
use velt_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args, &args.root),
        cli::Command::Serve(serve_args) => commands::serve_execute(serve_args, &args.root),
        cli::Command::Check(check_args) => commands::check_execute(check_args, &args.root),
    };

    result.map_err(error::cli_error_to_miette)
}
