//! Serve command implementation.

use std::path::Path;

use velt_config::RunKind;

use crate::cli::ServeArgs;
use crate::commands::resolve_pipeline;
use crate::error::Result;
use crate::ui;

/// Execute the serve command: classify the raw trailing arguments, resolve
/// the dev-server descriptor, and emit it as JSON on stdout.
pub fn execute(args: ServeArgs, root: &Path) -> Result<()> {
    let (invocation, _, descriptor) = resolve_pipeline(RunKind::Serve, &args.args, None, root)?;

    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    ui::success(&format!(
        "resolved dev-server descriptor for mode `{}`",
        invocation.mode
    ));
    Ok(())
}
