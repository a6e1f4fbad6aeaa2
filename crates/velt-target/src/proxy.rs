//! Dev-server proxy rules for the UI target.

use serde::Serialize;
use velt_config::RunKind;

/// API prefix forwarded to the backend.
pub const API_PREFIX: &str = "/api";

const DEV_API_TARGET: &str = "http://127.0.0.1:3000";
const PROD_API_TARGET: &str = "https://api.velt.dev";

/// One rule per proxied API prefix. The matched prefix is stripped before
/// forwarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyRule {
    pub prefix: String,
    pub target: String,
    pub change_origin: bool,
}

impl ProxyRule {
    /// Rewrite a request path by stripping the matched prefix.
    pub fn rewrite(&self, path: &str) -> String {
        path.strip_prefix(&self.prefix).unwrap_or(path).to_string()
    }
}

/// Build the proxy table: the local development endpoint for serve runs, the
/// fixed production endpoint otherwise.
pub fn proxy_rules(run: RunKind) -> Vec<ProxyRule> {
    let target = if run.is_build() {
        PROD_API_TARGET
    } else {
        DEV_API_TARGET
    };

    vec![ProxyRule {
        prefix: API_PREFIX.to_string(),
        target: target.to_string(),
        change_origin: true,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_strips_matched_prefix() {
        let rule = &proxy_rules(RunKind::Serve)[0];
        assert_eq!(rule.rewrite("/api/users/1"), "/users/1");
        assert_eq!(rule.rewrite("/health"), "/health");
    }

    #[test]
    fn target_depends_on_run_kind() {
        assert_eq!(proxy_rules(RunKind::Serve)[0].target, DEV_API_TARGET);
        assert_eq!(proxy_rules(RunKind::Build)[0].target, PROD_API_TARGET);
    }
}
