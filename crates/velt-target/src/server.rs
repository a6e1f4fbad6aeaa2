//! Dev-server settings for the UI target.

use serde::Serialize;
use velt_config::RunKind;

use crate::proxy::{ProxyRule, proxy_rules};

/// Fixed dev-server port.
pub const DEV_SERVER_PORT: u16 = 5173;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServer {
    /// Listens on all interfaces.
    pub host: String,
    pub port: u16,
    /// Hot-reload error overlay, disabled by policy.
    pub overlay: bool,
    pub proxy: Vec<ProxyRule>,
}

pub fn dev_server(run: RunKind) -> DevServer {
    DevServer {
        host: "0.0.0.0".to_string(),
        port: DEV_SERVER_PORT,
        overlay: false,
        proxy: proxy_rules(run),
    }
}
