//! Invocation classification: build-vs-serve and mode selection.
//!
//! The classifier runs once at process start and produces an [`Invocation`]
//! that is passed explicitly to every later stage. No later stage re-reads
//! argv or ambient process state.

use serde::Serialize;

use crate::error::{ConfigError, Result};

/// Mode used for `serve` runs when no mode argument is present.
pub const DEFAULT_SERVE_MODE: &str = "development";

/// Mode used for `build` runs when no mode argument is present.
pub const DEFAULT_BUILD_MODE: &str = "production";

/// Whether this run emits production bundles or drives a dev-server session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Build,
    Serve,
}

impl RunKind {
    pub fn is_build(self) -> bool {
        matches!(self, RunKind::Build)
    }
}

/// The classified invocation: run kind plus the resolved mode name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub run: RunKind,
    pub mode: String,
}

/// Classify an invocation into a run kind and a mode name.
///
/// `explicit_mode` is the mode supplied by the CLI layer (`--mode` on the
/// `build` subcommand); it wins over anything in `argv`. Otherwise `argv` is
/// scanned for a `--mode` token (or `--mode=NAME`), then for a bare
/// positional mode name. When nothing is given the mode defaults to
/// [`DEFAULT_BUILD_MODE`] or [`DEFAULT_SERVE_MODE`] per run kind.
///
/// # Errors
///
/// A `--mode` token with no following value, or an empty mode name from any
/// source, is a fatal configuration error. Resolution never proceeds with an
/// empty mode.
pub fn classify(run: RunKind, argv: &[String], explicit_mode: Option<&str>) -> Result<Invocation> {
    let mode = match explicit_mode {
        Some(mode) => Some(mode.to_string()),
        None => mode_from_argv(argv)?,
    };

    let mode = match mode {
        Some(mode) if mode.is_empty() => return Err(ConfigError::EmptyMode),
        Some(mode) => mode,
        None => match run {
            RunKind::Build => DEFAULT_BUILD_MODE.to_string(),
            RunKind::Serve => DEFAULT_SERVE_MODE.to_string(),
        },
    };

    Ok(Invocation { run, mode })
}

/// Scan raw arguments for a mode name.
///
/// `--mode NAME` and `--mode=NAME` are authoritative. The bare-positional
/// fallback (first token not starting with `-`) is best-effort only: it
/// cannot tell a mode name from the value of an unrelated flag.
fn mode_from_argv(argv: &[String]) -> Result<Option<String>> {
    let mut tokens = argv.iter();
    while let Some(token) = tokens.next() {
        if token == "--mode" {
            return match tokens.next() {
                Some(value) => Ok(Some(value.clone())),
                None => Err(ConfigError::MissingModeValue),
            };
        }
        if let Some(value) = token.strip_prefix("--mode=") {
            return Ok(Some(value.to_string()));
        }
    }

    Ok(argv.iter().find(|token| !token.starts_with('-')).cloned())
}
