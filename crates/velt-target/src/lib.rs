pub mod chunks;
pub mod descriptor;
pub mod plugins;
pub mod proxy;
pub mod server;

// Re-export main types
pub use chunks::chunk_groups;
pub use descriptor::{BuildDescriptor, CssOptions, TargetDescriptor, UiOptions, assemble};
pub use plugins::{PluginActivation, compose};
pub use proxy::{ProxyRule, proxy_rules};
pub use server::{DevServer, dev_server};
