//! Static manual chunk partition for third-party dependencies.

use indexmap::IndexMap;

/// Chunk name → libraries forced to co-locate in that chunk.
///
/// Independent of resolved settings. The partition bounds any single chunk's
/// size and keeps vendor chunks stable for long-term caching.
pub fn chunk_groups() -> IndexMap<&'static str, Vec<&'static str>> {
    IndexMap::from([
        ("framework", vec!["vue", "vue-router", "pinia"]),
        ("ui-kit", vec!["element-plus", "@element-plus/icons-vue"]),
        (
            "editor",
            vec!["@wangeditor/editor", "@wangeditor/editor-for-vue"],
        ),
        ("charts", vec!["echarts", "vue-echarts"]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_library_belongs_to_exactly_one_group() {
        let groups = chunk_groups();
        let mut seen: Vec<&str> = Vec::new();
        for libraries in groups.values() {
            for &library in libraries {
                assert!(!seen.contains(&library), "{library} assigned twice");
                seen.push(library);
            }
        }
    }
}
