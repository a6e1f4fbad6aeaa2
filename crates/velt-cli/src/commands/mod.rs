//! Command implementations for the velt CLI.
//!
//! - [`build`] - resolve the production build descriptor
//! - [`serve`] - resolve the dev-server descriptor
//! - [`check`] - report resolved settings and the active plugin chain
//!
//! Each command runs the same five-stage pipeline: classify the invocation,
//! load the mode-scoped environment, resolve typed settings, compose the UI
//! plugin chain, assemble the three target descriptors.

pub mod build;
pub mod check;
pub mod serve;

// Re-export execute functions for convenience
pub use build::execute as build_execute;
pub use check::execute as check_execute;
pub use serve::execute as serve_execute;

use std::path::Path;

use tracing::debug;
use velt_config::{Invocation, ResolvedSettings, RunKind, classify, load_env};
use velt_target::{BuildDescriptor, assemble, compose};

use crate::error::Result;

/// Run the resolution pipeline once, sequentially. Settings are resolved
/// exactly once and threaded through; no stage re-reads argv or files.
pub(crate) fn resolve_pipeline(
    run: RunKind,
    argv: &[String],
    explicit_mode: Option<&str>,
    root: &Path,
) -> Result<(Invocation, ResolvedSettings, BuildDescriptor)> {
    let invocation = classify(run, argv, explicit_mode)?;
    debug!(mode = %invocation.mode, ?run, "classified invocation");
    let raw = load_env(&invocation.mode, root);
    let settings = ResolvedSettings::resolve(&raw);
    let plugins = compose(&settings, invocation.run);
    let descriptor = assemble(&settings, invocation.run, plugins);
    Ok((invocation, settings, descriptor))
}
