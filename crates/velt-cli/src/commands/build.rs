//! Build command implementation.

use std::path::Path;

use velt_config::RunKind;

use crate::cli::BuildArgs;
use crate::commands::resolve_pipeline;
use crate::error::Result;
use crate::ui;

/// Execute the build command: resolve the build-run descriptor and emit it as
/// JSON on stdout.
pub fn execute(args: BuildArgs, root: &Path) -> Result<()> {
    let (invocation, _, descriptor) =
        resolve_pipeline(RunKind::Build, &[], args.mode.as_deref(), root)?;

    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    ui::success(&format!(
        "resolved build descriptor for mode `{}`",
        invocation.mode
    ));
    Ok(())
}
