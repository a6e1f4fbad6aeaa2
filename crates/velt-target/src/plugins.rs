//! Plugin composition for the UI target.
//!
//! The chain is declared in a fixed order; resolved flags only enable or
//! disable entries, never reorder them. Disabled entries are filtered out
//! before assembly, so a disabled plugin is absent from the chain rather than
//! present as a no-op.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;
use velt_config::{ResolvedSettings, RunKind};

/// A plugin participating in the UI build, with its opaque configuration.
///
/// Plugins are named capabilities; their internals are external
/// collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginActivation {
    pub name: &'static str,
    pub config: Value,
}

/// Source fragment spliced into production bundles when mocking is enabled.
/// Installs the request-interception layer at process start. Serve runs get
/// the same layer from the dev-server request pipeline instead, so the
/// fragment must never be emitted for them: both at once would double-install
/// the interception.
const MOCK_INJECT_CODE: &str =
    "import { installRequestMocks } from './mock/runtime';\ninstallRequestMocks();";

/// Compose the ordered plugin chain for the UI target.
///
/// Predicates are evaluated over the resolved settings first, then disabled
/// entries are filtered out. The two styling strategies are complementary:
/// `style-import` is active exactly when the full UI-kit stylesheet is not.
pub fn compose(settings: &ResolvedSettings, run: RunKind) -> Vec<PluginActivation> {
    let activations = [
        (true, vue()),
        (true, vue_jsx()),
        (true, svg_icons()),
        (true, atomic_css()),
        (!settings.use_all_element_styles, style_import()),
        (true, html_template(settings)),
        (settings.use_mock, mock_server(run)),
        (!run.is_build(), lint()),
        (settings.use_bundle_analyzer, bundle_analyzer()),
    ];

    let chain: Vec<PluginActivation> = activations
        .into_iter()
        .filter_map(|(enabled, activation)| enabled.then_some(activation))
        .collect();

    debug!(
        plugins = ?chain.iter().map(|p| p.name).collect::<Vec<_>>(),
        "composed UI plugin chain"
    );
    chain
}

fn vue() -> PluginActivation {
    PluginActivation {
        name: "vue",
        config: Value::Null,
    }
}

fn vue_jsx() -> PluginActivation {
    PluginActivation {
        name: "vue-jsx",
        config: Value::Null,
    }
}

fn svg_icons() -> PluginActivation {
    PluginActivation {
        name: "svg-icons",
        config: json!({
            "icon_dirs": ["src/ui/assets/svgs"],
            "symbol_id": "icon-[dir]-[name]",
            "svgo": true,
        }),
    }
}

fn atomic_css() -> PluginActivation {
    PluginActivation {
        name: "atomic-css",
        config: Value::Null,
    }
}

fn style_import() -> PluginActivation {
    PluginActivation {
        name: "style-import",
        config: json!({ "libraries": ["element-plus"] }),
    }
}

fn html_template(settings: &ResolvedSettings) -> PluginActivation {
    PluginActivation {
        name: "html-template",
        config: json!({ "title": settings.app_title }),
    }
}

fn mock_server(run: RunKind) -> PluginActivation {
    let config = if run.is_build() {
        json!({ "mock_dir": "mock", "inject_code": MOCK_INJECT_CODE })
    } else {
        json!({ "mock_dir": "mock", "middleware": true })
    };
    PluginActivation {
        name: "mock-server",
        config,
    }
}

fn lint() -> PluginActivation {
    PluginActivation {
        name: "lint",
        config: json!({ "include": ["src/ui/**/*.{ts,vue}"], "on_save": true }),
    }
}

fn bundle_analyzer() -> PluginActivation {
    PluginActivation {
        name: "bundle-analyzer",
        config: json!({ "filename": "report.html", "open": false }),
    }
}
