//! Tests for build descriptor assembly.

use std::path::PathBuf;

use velt_config::{RawEnv, ResolvedSettings, RunKind};
use velt_target::{assemble, compose};

fn descriptor(entries: &[(&str, &str)], run: RunKind) -> velt_target::BuildDescriptor {
    let mut raw = RawEnv::new();
    for (key, value) in entries {
        raw.insert(key.to_string(), value.to_string());
    }
    let settings = ResolvedSettings::resolve(&raw);
    let plugins = compose(&settings, run);
    assemble(&settings, run, plugins)
}

#[test]
fn host_and_bridge_get_the_fixed_plugin_pair() {
    let descriptor = descriptor(&[], RunKind::Build);

    for target in [&descriptor.host, &descriptor.bridge] {
        let names: Vec<_> = target.plugins.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["externalize-deps", "bytecode"]);
        assert!(target.ui.is_none());
    }
    assert_eq!(descriptor.host.entry, PathBuf::from("src/host/index.ts"));
    assert_eq!(
        descriptor.bridge.entry,
        PathBuf::from("src/bridge/index.ts")
    );
}

#[test]
fn production_build_settings_flow_into_the_ui_target() {
    // Scenario: build in production mode with console stripping and a custom
    // output directory.
    let descriptor = descriptor(
        &[("VELT_DROP_CONSOLE", "true"), ("VELT_OUT_DIR", "release")],
        RunKind::Build,
    );

    assert_eq!(descriptor.ui.out_dir, PathBuf::from("release"));
    let ui = descriptor.ui.ui.as_ref().unwrap();
    assert!(ui.drop_console);
    assert!(!ui.drop_debugger);
}

#[test]
fn ui_target_carries_the_composed_chain() {
    let descriptor = descriptor(&[("VELT_USE_MOCK", "true")], RunKind::Serve);
    let names: Vec<_> = descriptor.ui.plugins.iter().map(|p| p.name).collect();
    assert!(names.contains(&"mock-server"));
    assert!(names.contains(&"vue"));
}

#[test]
fn dev_server_listens_on_all_interfaces_with_overlay_off() {
    let descriptor = descriptor(&[], RunKind::Serve);
    let server = &descriptor.ui.ui.as_ref().unwrap().server;

    assert_eq!(server.host, "0.0.0.0");
    assert_eq!(server.port, 5173);
    assert!(!server.overlay);
}

#[test]
fn proxy_targets_the_local_endpoint_for_serve_runs() {
    let serve = descriptor(&[], RunKind::Serve);
    let rule = &serve.ui.ui.as_ref().unwrap().server.proxy[0];
    assert_eq!(rule.prefix, "/api");
    assert_eq!(rule.target, "http://127.0.0.1:3000");

    let build = descriptor(&[], RunKind::Build);
    let rule = &build.ui.ui.as_ref().unwrap().server.proxy[0];
    assert_eq!(rule.target, "https://api.velt.dev");
}

#[test]
fn chunk_groups_are_static() {
    let with_flags = descriptor(&[("VELT_USE_MOCK", "true")], RunKind::Build);
    let without = descriptor(&[], RunKind::Serve);

    assert_eq!(
        with_flags.ui.ui.as_ref().unwrap().chunk_groups,
        without.ui.ui.as_ref().unwrap().chunk_groups,
    );

    let groups = &without.ui.ui.as_ref().unwrap().chunk_groups;
    let names: Vec<_> = groups.keys().copied().collect();
    assert_eq!(names, vec!["framework", "ui-kit", "editor", "charts"]);
}

#[test]
fn css_wiring_and_defaults() {
    let descriptor = descriptor(&[], RunKind::Serve);
    let ui = descriptor.ui.ui.as_ref().unwrap();

    assert_eq!(ui.css.preprocessor, "less");
    assert!(ui.css.javascript_enabled);
    assert!(ui.css.code_split);
    assert_eq!(ui.base, "./");
    assert_eq!(descriptor.ui.out_dir, PathBuf::from("dist"));
    assert_eq!(ui.alias.get("@").unwrap(), "src/ui");
}

#[test]
fn assembly_is_deterministic() {
    let entries = [("VELT_USE_MOCK", "true"), ("VELT_SOURCEMAP", "true")];
    assert_eq!(
        descriptor(&entries, RunKind::Build),
        descriptor(&entries, RunKind::Build)
    );
}
