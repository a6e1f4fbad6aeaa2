//! Target and build descriptors.
//!
//! The assembler is a pure merge: settings are resolved exactly once per run
//! and threaded through; nothing here re-reads the environment.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use velt_config::{ResolvedSettings, RunKind};

use crate::chunks::chunk_groups;
use crate::plugins::PluginActivation;
use crate::server::{DevServer, dev_server};

pub const HOST_ENTRY: &str = "src/host/index.ts";
pub const BRIDGE_ENTRY: &str = "src/bridge/index.ts";
pub const UI_ENTRY: &str = "src/ui/index.html";

const HOST_OUT_DIR: &str = "out/host";
const BRIDGE_OUT_DIR: &str = "out/bridge";

/// LESS variables shared by every UI stylesheet.
const LESS_VARIABLES_IMPORT: &str = "@import \"./src/ui/styles/variables.module.less\";";

/// Dependencies pre-bundled before the first dev-server request.
const PREBUNDLE: &[&str] = &["vue", "vue-router", "pinia", "element-plus", "echarts"];

/// One independently-built output of the desktop application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetDescriptor {
    pub entry: PathBuf,
    pub out_dir: PathBuf,
    pub plugins: Vec<PluginActivation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiOptions>,
}

/// Settings specific to the UI target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiOptions {
    pub base: String,
    pub app_title: String,
    pub alias: IndexMap<String, String>,
    pub css: CssOptions,
    pub source_map: bool,
    pub drop_console: bool,
    pub drop_debugger: bool,
    pub chunk_groups: IndexMap<&'static str, Vec<&'static str>>,
    pub prebundle: Vec<&'static str>,
    pub server: DevServer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssOptions {
    pub preprocessor: &'static str,
    pub additional_data: &'static str,
    pub javascript_enabled: bool,
    pub code_split: bool,
}

/// The root artifact, constructed fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildDescriptor {
    pub host: TargetDescriptor,
    pub bridge: TargetDescriptor,
    pub ui: TargetDescriptor,
}

/// Combine the three target descriptors from settings resolved upstream.
pub fn assemble(
    settings: &ResolvedSettings,
    run: RunKind,
    ui_plugins: Vec<PluginActivation>,
) -> BuildDescriptor {
    BuildDescriptor {
        host: process_target(HOST_ENTRY, HOST_OUT_DIR),
        bridge: process_target(BRIDGE_ENTRY, BRIDGE_OUT_DIR),
        ui: ui_target(settings, run, ui_plugins),
    }
}

/// Host and bridge targets: fixed entry, fixed plugin pair, no conditionals.
fn process_target(entry: &str, out_dir: &str) -> TargetDescriptor {
    TargetDescriptor {
        entry: PathBuf::from(entry),
        out_dir: PathBuf::from(out_dir),
        plugins: vec![
            PluginActivation {
                name: "externalize-deps",
                config: Value::Null,
            },
            PluginActivation {
                name: "bytecode",
                config: Value::Null,
            },
        ],
        ui: None,
    }
}

fn ui_target(
    settings: &ResolvedSettings,
    run: RunKind,
    plugins: Vec<PluginActivation>,
) -> TargetDescriptor {
    let mut alias = IndexMap::new();
    alias.insert("@".to_string(), "src/ui".to_string());

    TargetDescriptor {
        entry: PathBuf::from(UI_ENTRY),
        out_dir: PathBuf::from(&settings.out_dir),
        plugins,
        ui: Some(UiOptions {
            base: settings.base_path.clone(),
            app_title: settings.app_title.clone(),
            alias,
            css: CssOptions {
                preprocessor: "less",
                additional_data: LESS_VARIABLES_IMPORT,
                javascript_enabled: true,
                code_split: settings.css_code_split,
            },
            source_map: settings.source_map,
            drop_console: settings.drop_console,
            drop_debugger: settings.drop_debugger,
            chunk_groups: chunk_groups(),
            prebundle: PREBUNDLE.to_vec(),
            server: dev_server(run),
        }),
    }
}
