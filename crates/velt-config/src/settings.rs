//! Typed projection of the raw environment.
//!
//! This is the single boundary where stringly-typed values are parsed;
//! downstream stages only ever see [`ResolvedSettings`]. Resolution is total:
//! every field has a documented default, and malformed values degrade to those
//! defaults rather than raising. Callers wanting strict validation add it as a
//! wrapping layer.

use serde::Serialize;

use crate::env::RawEnv;

// Documented defaults
pub const DEFAULT_BASE_PATH: &str = "./";
pub const DEFAULT_OUT_DIR: &str = "dist";
pub const DEFAULT_APP_TITLE: &str = "Velt App";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSettings {
    /// `VELT_USE_MOCK` — gates the mock-server plugin.
    pub use_mock: bool,

    /// `VELT_USE_ALL_ELEMENT_PLUS_STYLE` — import the UI kit's full
    /// stylesheet; disables on-demand style-import rewriting.
    pub use_all_element_styles: bool,

    /// `VELT_DROP_CONSOLE` — strip console calls from production output.
    pub drop_console: bool,

    /// `VELT_DROP_DEBUGGER` — strip debugger statements from production output.
    pub drop_debugger: bool,

    /// `VELT_USE_BUNDLE_ANALYZER` — attach a bundle-size report step.
    pub use_bundle_analyzer: bool,

    /// `VELT_USE_CSS_SPLIT` — per-component stylesheet splitting.
    pub css_code_split: bool,

    /// `VELT_SOURCEMAP` — source-map emission for the UI target.
    pub source_map: bool,

    /// `VELT_BASE_PATH` — public base path of the UI bundle.
    pub base_path: String,

    /// `VELT_OUT_DIR` — output directory of the UI target.
    pub out_dir: String,

    /// `VELT_APP_TITLE` — title injected into the UI page shell.
    pub app_title: String,
}

impl Default for ResolvedSettings {
    fn default() -> Self {
        Self::resolve(&RawEnv::new())
    }
}

impl ResolvedSettings {
    /// Resolve typed settings from a raw environment.
    ///
    /// Pure and deterministic: identical inputs yield field-for-field
    /// identical settings.
    pub fn resolve(raw: &RawEnv) -> Self {
        Self {
            use_mock: flag(raw, "VELT_USE_MOCK", false),
            use_all_element_styles: flag(raw, "VELT_USE_ALL_ELEMENT_PLUS_STYLE", false),
            drop_console: flag(raw, "VELT_DROP_CONSOLE", false),
            drop_debugger: flag(raw, "VELT_DROP_DEBUGGER", false),
            use_bundle_analyzer: flag(raw, "VELT_USE_BUNDLE_ANALYZER", false),
            css_code_split: flag(raw, "VELT_USE_CSS_SPLIT", true),
            source_map: flag(raw, "VELT_SOURCEMAP", false),
            base_path: string(raw, "VELT_BASE_PATH", DEFAULT_BASE_PATH),
            out_dir: string(raw, "VELT_OUT_DIR", DEFAULT_OUT_DIR),
            app_title: string(raw, "VELT_APP_TITLE", DEFAULT_APP_TITLE),
        }
    }
}

/// Exact-literal boolean parsing: only `"true"` and `"false"` are recognized,
/// anything else resolves to the default. No generic truthiness.
fn flag(raw: &RawEnv, key: &str, default: bool) -> bool {
    match raw.get(key).map(String::as_str) {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

/// Absent or empty raw values fall back to the default constant.
fn string(raw: &RawEnv, key: &str, default: &str) -> String {
    match raw.get(key) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => default.to_string(),
    }
}
