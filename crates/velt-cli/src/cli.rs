//! Command-line interface definition for the velt resolver.
//!
//! Defined with clap v4's derive macros. The `serve` subcommand hands its raw
//! trailing arguments to the invocation classifier instead of parsing a mode
//! itself, so mode selection has a single owner.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// velt - build-descriptor resolver for a three-target desktop app
#[derive(Parser, Debug)]
#[command(
    name = "velt",
    version,
    about = "Resolves build descriptors for the host, bridge, and UI targets",
    long_about = "velt resolves mode-scoped environment variables into a fully \
                  typed build descriptor for the three targets of the desktop \
                  application: the privileged host process, the isolated bridge \
                  script, and the sandboxed UI process. The descriptor is \
                  emitted as JSON for the downstream bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root containing the `.env` files
    #[arg(short = 'C', long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the production build descriptor
    Build(BuildArgs),

    /// Resolve the dev-server descriptor
    Serve(ServeArgs),

    /// Report resolved settings and the active plugin chain
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Mode profile to load (defaults to "production")
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Raw arguments handed to the invocation classifier:
    /// `--mode <MODE>`, `--mode=<MODE>`, or a bare mode name
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Mode profile to load (defaults to "development")
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_collects_raw_trailing_args() {
        let cli = Cli::parse_from(["velt", "serve", "--mode", "staging"]);
        match cli.command {
            Command::Serve(args) => assert_eq!(args.args, vec!["--mode", "staging"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
