//! Tests for mode-scoped environment file loading.

use std::fs;

use tempfile::TempDir;
use velt_config::load_env;

#[test]
fn missing_files_yield_empty_mapping() {
    let dir = TempDir::new().unwrap();
    let env = load_env("development", dir.path());
    assert!(env.is_empty());
}

#[test]
fn base_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "VELT_APP_TITLE=Velt\n").unwrap();

    let env = load_env("development", dir.path());
    assert_eq!(env.get("VELT_APP_TITLE").unwrap(), "Velt");
}

#[test]
fn mode_overlay_overrides_base_key_by_key() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "VELT_APP_TITLE=Velt\nVELT_OUT_DIR=dist\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".env.production"),
        "VELT_OUT_DIR=release\n",
    )
    .unwrap();

    let env = load_env("production", dir.path());
    assert_eq!(env.get("VELT_APP_TITLE").unwrap(), "Velt");
    assert_eq!(env.get("VELT_OUT_DIR").unwrap(), "release");
}

#[test]
fn overlay_for_other_mode_is_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env.production"),
        "VELT_OUT_DIR=release\n",
    )
    .unwrap();

    let env = load_env("development", dir.path());
    assert!(env.get("VELT_OUT_DIR").is_none());
}

#[test]
fn unprefixed_keys_are_filtered_out() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "PATH=/usr/bin\nNODE_ENV=production\nVELT_USE_MOCK=true\n",
    )
    .unwrap();

    let env = load_env("development", dir.path());
    assert_eq!(env.len(), 1);
    assert_eq!(env.get("VELT_USE_MOCK").unwrap(), "true");
}

#[test]
fn comments_blanks_and_quotes_are_handled() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "# build settings\n\nVELT_APP_TITLE=\"Velt Desktop\"\nVELT_BASE_PATH='./'\nnot a pair\n",
    )
    .unwrap();

    let env = load_env("development", dir.path());
    assert_eq!(env.get("VELT_APP_TITLE").unwrap(), "Velt Desktop");
    assert_eq!(env.get("VELT_BASE_PATH").unwrap(), "./");
}

#[test]
fn loading_is_deterministic() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "VELT_USE_MOCK=true\nVELT_OUT_DIR=dist\n",
    )
    .unwrap();

    let first = load_env("development", dir.path());
    let second = load_env("development", dir.path());
    assert_eq!(first, second);
}
