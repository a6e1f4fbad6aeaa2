//! Error handling for the velt CLI.

use thiserror::Error;
use velt_config::ConfigError;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invocation or environment resolution errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Descriptor serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert CliError to a miette Report for terminal error reporting.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(ConfigError::MissingModeValue | ConfigError::EmptyMode) => {
            miette::miette!(
                "{}\n\nHint: pass an explicit mode, e.g. `velt serve --mode development`",
                err
            )
        }
        _ => miette::miette!("{}", err),
    }
}
