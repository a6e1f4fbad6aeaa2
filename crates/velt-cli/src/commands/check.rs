//! Check command implementation.
//!
//! Resolves configuration without emitting a descriptor and reports what a
//! serve run would see.

use std::path::Path;

use velt_config::RunKind;

use crate::cli::CheckArgs;
use crate::commands::resolve_pipeline;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
pub fn execute(args: CheckArgs, root: &Path) -> Result<()> {
    ui::info("Checking configuration...");

    let (invocation, settings, descriptor) =
        resolve_pipeline(RunKind::Serve, &[], args.mode.as_deref(), root)?;

    if !root.join(".env").exists() {
        ui::warning("no .env file found, using defaults");
    }
    let overlay = root.join(format!(".env.{}", invocation.mode));
    if !overlay.exists() {
        ui::warning(&format!("no {} file found", overlay.display()));
    }

    ui::info(&format!("mode: {}", invocation.mode));
    ui::info(&format!("app title: {}", settings.app_title));
    ui::info(&format!("base path: {}", settings.base_path));
    ui::info(&format!("ui out dir: {}", settings.out_dir));
    ui::info(&format!(
        "flags: mock={} all_element_styles={} drop_console={} drop_debugger={} analyzer={} css_split={} sourcemap={}",
        settings.use_mock,
        settings.use_all_element_styles,
        settings.drop_console,
        settings.drop_debugger,
        settings.use_bundle_analyzer,
        settings.css_code_split,
        settings.source_map,
    ));

    let chain: Vec<_> = descriptor.ui.plugins.iter().map(|p| p.name).collect();
    ui::info(&format!("ui plugin chain: {}", chain.join(", ")));

    ui::success("Configuration is valid");
    Ok(())
}
