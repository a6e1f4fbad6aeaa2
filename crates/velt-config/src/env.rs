//! Mode-scoped environment loading.
//!
//! Variables come from dotenv-style files under the project root: a base
//! `.env` plus a `.env.<mode>` overlay, the overlay overriding the base
//! key-by-key. Only keys carrying [`ENV_PREFIX`] are visible to the
//! resolver; everything else is filtered out so unrelated process
//! configuration cannot leak in.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

/// Prefix a variable must carry to be retained.
pub const ENV_PREFIX: &str = "VELT_";

/// Flat, insertion-ordered mapping from variable name to raw string value.
pub type RawEnv = IndexMap<String, String>;

/// Load the raw environment for `mode` from files under `root`.
///
/// Missing or unreadable files contribute an empty mapping; a build with no
/// environment files degrades to defaults rather than failing. Never mutates
/// process-wide state.
pub fn load_env(mode: &str, root: impl AsRef<Path>) -> RawEnv {
    let root = root.as_ref();
    let mut env = RawEnv::new();
    merge_file(&mut env, &root.join(".env"));
    merge_file(&mut env, &root.join(format!(".env.{mode}")));
    env
}

fn merge_file(env: &mut RawEnv, path: &Path) {
    let Ok(content) = fs::read_to_string(path) else {
        debug!(path = %path.display(), "env file absent, skipping");
        return;
    };

    let mut kept = 0usize;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if !key.starts_with(ENV_PREFIX) {
            continue;
        }
        env.insert(key.to_string(), unquote(value.trim()).to_string());
        kept += 1;
    }
    debug!(path = %path.display(), kept, "merged env file");
}

/// Strip one matching pair of surrounding single or double quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
