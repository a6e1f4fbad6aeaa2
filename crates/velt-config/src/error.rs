//! Error types for invocation classification.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`--mode` was given without a value")]
    MissingModeValue,

    #[error("mode name is empty; pass `--mode <MODE>` with a non-empty name")]
    EmptyMode,
}
